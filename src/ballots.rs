multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_VOTED;
use crate::types::{BallotOutcome, VoteRecord};

// ============================================================
// Ballot store: one permanent ballot per (entry, member).
// ============================================================

#[multiversx_sc::module]
pub trait BallotModule:
    crate::storage::StorageModule
    + crate::guards::GuardsModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
{
    /// Checks every precondition, then records the ballot, the roster entry
    /// and the voter's stats in one step.
    fn record_ballot(&self, entry_id: u64, voter: &ManagedAddress, outcome: BallotOutcome) {
        self.require_member(voter);
        self.require_pending_entry(entry_id);
        // any earlier ballot blocks, whatever its outcome
        require!(!self.has_voted(entry_id, voter).get(), ERR_ALREADY_VOTED);

        let timestamp = self.blockchain().get_block_timestamp();

        self.has_voted(entry_id, voter).set(true);
        self.ballots(entry_id, voter).set(outcome);
        self.roster(entry_id, outcome).push(voter);
        self.member_records(voter)
            .update(|member| member.record_ballot(outcome, timestamp));
        self.total_votes_cast().update(|total| *total += 1);

        self.ballot_cast_event(entry_id, voter, outcome, timestamp);
    }

    fn ballot_of(&self, entry_id: u64, voter: &ManagedAddress) -> Option<BallotOutcome> {
        if self.has_voted(entry_id, voter).get() {
            Some(self.ballots(entry_id, voter).get())
        } else {
            None
        }
    }

    #[view(getVoteRecord)]
    fn get_vote_record(&self, entry_id: u64, voter: &ManagedAddress) -> VoteRecord {
        VoteRecord::from_ballot(self.ballot_of(entry_id, voter))
    }

    #[view(getApprovers)]
    fn get_approvers(&self, entry_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.roster_encoded(entry_id, BallotOutcome::Approve)
    }

    #[view(getReviewers)]
    fn get_reviewers(&self, entry_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.roster_encoded(entry_id, BallotOutcome::Review)
    }

    #[view(getRejecters)]
    fn get_rejecters(&self, entry_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.roster_encoded(entry_id, BallotOutcome::Reject)
    }

    fn roster_encoded(
        &self,
        entry_id: u64,
        outcome: BallotOutcome,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.roster(entry_id, outcome).iter() {
            result.push(voter);
        }
        result
    }

    fn roster_of(&self, entry_id: u64, outcome: BallotOutcome) -> ManagedVec<ManagedAddress> {
        let mut voters = ManagedVec::new();
        for voter in self.roster(entry_id, outcome).iter() {
            voters.push(voter);
        }
        voters
    }
}

multiversx_sc::imports!();

use crate::errors::ERR_INVALID_ENTRY_ID;
use crate::types::{BallotOutcome, EntryStatus, EntryVotingDetails, MemberInfo};

// ============================================================
// VIEWS: read-only aggregation across ledger, ballots and registry
// ============================================================

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule
    + crate::guards::GuardsModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
    + crate::ballots::BallotModule
    + crate::tally::TallyModule
{
    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> MemberInfo<Self::Api> {
        if self.member_records(&address).is_empty() {
            return MemberInfo::non_member(address);
        }
        let member = self.member_records(&address).get();
        MemberInfo::from_member(address, member)
    }

    #[view(getEntryVotingDetails)]
    fn get_entry_voting_details(
        &self,
        entry_id: u64,
        voter: ManagedAddress,
    ) -> EntryVotingDetails<Self::Api> {
        require!(self.is_valid_entry_id(entry_id), ERR_INVALID_ENTRY_ID);

        let status = self.registry_entry_status(entry_id);
        let (approval_total, review_total) = self.registry_vote_totals(entry_id);

        EntryVotingDetails {
            entry_id,
            status,
            approval_total,
            review_total,
            rejection_total: self.rejection_tally(entry_id),
            approvers: self.roster_of(entry_id, BallotOutcome::Approve),
            reviewers: self.roster_of(entry_id, BallotOutcome::Review),
            rejecters: self.roster_of(entry_id, BallotOutcome::Reject),
            can_vote: status == EntryStatus::Pending
                && self.members().contains(&voter)
                && !self.has_voted(entry_id, &voter).get(),
        }
    }

    /// Same preconditions as a ballot, without failing. Also false for
    /// out-of-range ids.
    #[view(canVote)]
    fn can_vote(&self, entry_id: u64, voter: ManagedAddress) -> bool {
        if !self.members().contains(&voter) || self.has_voted(entry_id, &voter).get() {
            return false;
        }
        self.is_valid_entry_id(entry_id)
            && self.registry_entry_status(entry_id) == EntryStatus::Pending
    }

    #[view(getPendingEntries)]
    fn get_pending_entries(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let total = self.registry_entry_count();

        for entry_id in 1..=total {
            if self.registry_entry_status(entry_id) == EntryStatus::Pending {
                result.push(entry_id);
            }
        }
        result
    }

    /// `(members, total contributions, votes cast, approved, rejected,
    /// average contribution per member)`
    #[view(getGlobalStats)]
    fn get_global_stats(&self) -> MultiValue6<u64, BigUint, u64, u64, u64, BigUint> {
        let member_count = self.members().len() as u64;
        let total_contributions = self.total_contributions().get();
        let average_contribution = if member_count == 0 {
            BigUint::zero()
        } else {
            total_contributions.clone() / member_count
        };

        (
            member_count,
            total_contributions,
            self.total_votes_cast().get(),
            self.total_entries_approved().get(),
            self.total_entries_rejected().get(),
            average_contribution,
        )
            .into()
    }

    #[view(getTotalVotesCast)]
    fn get_total_votes_cast(&self) -> u64 {
        self.total_votes_cast().get()
    }
}

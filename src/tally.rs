multiversx_sc::imports!();

use crate::types::{BallotOutcome, EntryStatus};

// ============================================================
// Tally engine
//
// Approve and review totals live in the registry and grow by the voter's
// power at cast time. The reject total is never stored: it is the sum of the
// rejecters' current power, recomputed whenever it is needed.
// ============================================================

#[multiversx_sc::module]
pub trait TallyModule:
    crate::storage::StorageModule
    + crate::guards::GuardsModule
    + crate::events::EventsModule
    + crate::registry::RegistryModule
    + crate::membership::MembershipModule
{
    fn apply_ballot(&self, entry_id: u64, voter: &ManagedAddress, outcome: BallotOutcome) {
        match outcome {
            BallotOutcome::Approve => self.apply_approval(entry_id, voter),
            BallotOutcome::Review => self.apply_review(entry_id, voter),
            BallotOutcome::Reject => self.apply_rejection(entry_id),
        }
    }

    fn apply_approval(&self, entry_id: u64, voter: &ManagedAddress) {
        let (approval_total, review_total) = self.registry_vote_totals(entry_id);
        let new_approval = approval_total + self.voting_power_of(voter);
        self.registry_set_vote_totals(entry_id, new_approval, review_total);

        if new_approval >= self.approval_threshold().get() {
            self.registry_set_status(entry_id, EntryStatus::Approved);
            self.total_entries_approved().update(|total| *total += 1);

            let timestamp = self.blockchain().get_block_timestamp();
            self.entry_approved_event(entry_id, new_approval, timestamp);
        }
    }

    /// Reaching the review threshold is a soft signal: no global counter moves.
    fn apply_review(&self, entry_id: u64, voter: &ManagedAddress) {
        let (approval_total, review_total) = self.registry_vote_totals(entry_id);
        let new_review = review_total + self.voting_power_of(voter);
        self.registry_set_vote_totals(entry_id, approval_total, new_review);

        if new_review >= self.review_threshold().get() {
            self.registry_set_status(entry_id, EntryStatus::UnderReview);

            let timestamp = self.blockchain().get_block_timestamp();
            self.entry_under_review_event(entry_id, new_review, timestamp);
        }
    }

    fn apply_rejection(&self, entry_id: u64) {
        let rejection_total = self.rejection_tally(entry_id);

        if rejection_total >= self.rejection_threshold().get() {
            self.registry_set_status(entry_id, EntryStatus::Rejected);
            self.total_entries_rejected().update(|total| *total += 1);

            let timestamp = self.blockchain().get_block_timestamp();
            self.entry_rejected_event(entry_id, rejection_total, timestamp);
        }
    }

    /// O(rejecters). Uses each rejecter's power as of now, not as of their ballot.
    #[view(getRejectionTally)]
    fn rejection_tally(&self, entry_id: u64) -> u64 {
        self.roster(entry_id, BallotOutcome::Reject)
            .iter()
            .map(|rejecter| self.voting_power_of(&rejecter))
            .sum()
    }
}

multiversx_sc::imports!();

use crate::types::{BallotOutcome, Member};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("registryAddress")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("treasuryWallet")]
    fn treasury_wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("membershipFee")]
    fn membership_fee(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("approvalThreshold")]
    fn approval_threshold(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reviewThreshold")]
    fn review_threshold(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("rejectionThreshold")]
    fn rejection_threshold(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("memberRecords")]
    fn member_records(&self, member: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    /// Sum of every member's cumulative contribution.
    #[storage_mapper("totalContributions")]
    fn total_contributions(&self) -> SingleValueMapper<BigUint>;

    // ── Ballots ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, entry_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    /// At most one outcome per (entry, member). `Approve` encodes as empty
    /// bytes, so presence is read from `has_voted`.
    #[storage_mapper("ballots")]
    fn ballots(&self, entry_id: u64, voter: &ManagedAddress) -> SingleValueMapper<BallotOutcome>;

    #[storage_mapper("roster")]
    fn roster(&self, entry_id: u64, outcome: BallotOutcome) -> VecMapper<ManagedAddress>;

    // ── Global counters ──

    #[storage_mapper("totalVotesCast")]
    fn total_votes_cast(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalEntriesApproved")]
    fn total_entries_approved(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("totalEntriesRejected")]
    fn total_entries_rejected(&self) -> SingleValueMapper<u64>;
}

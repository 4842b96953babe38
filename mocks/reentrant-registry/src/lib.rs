#![no_std]

multiversx_sc::imports!();

pub mod reentrant_registry_proxy;

use entry_registry::types::EntryStatus;

/// Test double for the entry registry. Every entry up to `entryCount` reads
/// as pending with zero totals, and `setVoteTotals` calls straight back into
/// governance with an approve ballot for the same entry.
#[multiversx_sc::contract]
pub trait ReentrantRegistry {
    #[init]
    fn init(&self, governance_address: ManagedAddress, entry_count: u64) {
        self.governance_address().set(&governance_address);
        self.entry_count().set(entry_count);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setVoteTotals)]
    fn set_vote_totals(&self, entry_id: u64, _approval_total: u64, _review_total: u64) {
        let governance = self.governance_address().get();
        self.tx()
            .to(&governance)
            .raw_call("voteApprove")
            .argument(&entry_id)
            .sync_call();
    }

    #[endpoint(setEntryStatus)]
    fn set_entry_status(&self, _entry_id: u64, _status: EntryStatus) {}

    #[view(getEntryStatus)]
    fn get_entry_status(&self, _entry_id: u64) -> EntryStatus {
        EntryStatus::Pending
    }

    #[view(getVoteTotals)]
    fn get_vote_totals(&self, _entry_id: u64) -> MultiValue2<u64, u64> {
        (0u64, 0u64).into()
    }

    #[view(getEntryCount)]
    #[storage_mapper("entryCount")]
    fn entry_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("governanceAddress")]
    fn governance_address(&self) -> SingleValueMapper<ManagedAddress>;
}

multiversx_sc::imports!();

use entry_registry::entry_registry_proxy::EntryRegistryProxy;

use crate::errors::{ERR_ENTRY_NOT_PENDING, ERR_INVALID_ENTRY_ID};
use crate::types::EntryStatus;

// ============================================================
// Synchronous access to the entry registry.
// The registry owns entry status and the stored approve/review totals.
// Reads go through `sync_call` as well: the Rust VM has no readonly
// synchronous call, and the engine's tests run there end to end.
// ============================================================

#[multiversx_sc::module]
pub trait RegistryModule: crate::storage::StorageModule {
    fn registry_entry_count(&self) -> u64 {
        let registry = self.registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntryRegistryProxy)
            .get_entry_count()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn registry_entry_status(&self, entry_id: u64) -> EntryStatus {
        let registry = self.registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntryRegistryProxy)
            .get_entry_status(entry_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Returns `(approval_total, review_total)`.
    fn registry_vote_totals(&self, entry_id: u64) -> (u64, u64) {
        let registry = self.registry_address().get();
        let totals: MultiValue2<u64, u64> = self
            .tx()
            .to(&registry)
            .typed(EntryRegistryProxy)
            .get_vote_totals(entry_id)
            .returns(ReturnsResult)
            .sync_call();
        totals.into_tuple()
    }

    fn registry_set_vote_totals(&self, entry_id: u64, approval_total: u64, review_total: u64) {
        let registry = self.registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntryRegistryProxy)
            .set_vote_totals(entry_id, approval_total, review_total)
            .sync_call();
    }

    fn registry_set_status(&self, entry_id: u64, status: EntryStatus) {
        let registry = self.registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntryRegistryProxy)
            .set_entry_status(entry_id, status)
            .sync_call();
    }

    fn is_valid_entry_id(&self, entry_id: u64) -> bool {
        entry_id >= 1 && entry_id <= self.registry_entry_count()
    }

    fn require_pending_entry(&self, entry_id: u64) {
        require!(self.is_valid_entry_id(entry_id), ERR_INVALID_ENTRY_ID);
        require!(
            self.registry_entry_status(entry_id) == EntryStatus::Pending,
            ERR_ENTRY_NOT_PENDING
        );
    }
}

#![no_std]

multiversx_sc::imports!();

pub mod entry_registry_proxy;
pub mod types;

use types::{Entry, EntryStatus};

// ============================================================
// Contract
// ============================================================

/// Authoritative store of beneficiary entries and their status.
/// Only the configured governance contract may move an entry out of `Pending`
/// or write its vote totals.
#[multiversx_sc::contract]
pub trait EntryRegistry {
    #[init]
    fn init(&self) {
        self.entry_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setGovernance (owner)
    // ========================================================

    #[only_owner]
    #[endpoint(setGovernance)]
    fn set_governance(&self, governance_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&governance_address),
            "Governance must be a smart contract"
        );
        self.governance_address().set(&governance_address);
    }

    // ========================================================
    // ENDPOINT: registerEntry
    // One registration per official identifier.
    // ========================================================

    #[endpoint(registerEntry)]
    fn register_entry(&self, name: ManagedBuffer, official_id: ManagedBuffer) -> u64 {
        require!(!name.is_empty(), "Name is required");
        require!(!official_id.is_empty(), "Official id is required");
        require!(
            self.entry_by_official_id(&official_id).is_empty(),
            "Official id already registered"
        );

        let caller = self.blockchain().get_caller();
        let entry_id = self.entry_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let entry = Entry {
            id: entry_id,
            registrant: caller.clone(),
            name,
            official_id: official_id.clone(),
            status: EntryStatus::Incomplete,
            approval_total: 0u64,
            review_total: 0u64,
            registered_at: timestamp,
        };

        self.entries(entry_id).set(&entry);
        self.entry_by_official_id(&official_id).set(entry_id);
        self.entry_count().set(entry_id);

        self.entry_registered_event(entry_id, &caller, &official_id);

        entry_id
    }

    // ========================================================
    // ENDPOINT: submitEntry
    // Registrant opens the entry for governance ballots.
    // ========================================================

    #[endpoint(submitEntry)]
    fn submit_entry(&self, entry_id: u64) {
        self.require_valid_entry(entry_id);

        let caller = self.blockchain().get_caller();
        let mut entry = self.entries(entry_id).get();
        require!(entry.registrant == caller, "Only registrant can submit");

        self.transition(&mut entry, EntryStatus::Pending);
    }

    // ========================================================
    // ENDPOINTS: governance writes
    // ========================================================

    #[endpoint(setEntryStatus)]
    fn set_entry_status(&self, entry_id: u64, status: EntryStatus) {
        self.require_governance();
        self.require_valid_entry(entry_id);
        require!(
            status.is_governance_decision(),
            "Governance may only set decision states"
        );

        let mut entry = self.entries(entry_id).get();
        self.transition(&mut entry, status);
    }

    #[endpoint(setVoteTotals)]
    fn set_vote_totals(&self, entry_id: u64, approval_total: u64, review_total: u64) {
        self.require_governance();
        self.require_valid_entry(entry_id);

        self.entries(entry_id).update(|entry| {
            entry.approval_total = approval_total;
            entry.review_total = review_total;
        });
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn transition(&self, entry: &mut Entry<Self::Api>, next: EntryStatus) {
        require!(
            entry.status.can_transition_to(&next),
            "Status transition not allowed"
        );

        let previous = entry.status;
        entry.status = next;
        self.entries(entry.id).set(&*entry);

        self.status_changed_event(entry.id, previous, next);
    }

    fn require_governance(&self) {
        require!(
            !self.governance_address().is_empty(),
            "Governance not configured"
        );
        require!(
            self.blockchain().get_caller() == self.governance_address().get(),
            "Only governance"
        );
    }

    fn require_valid_entry(&self, entry_id: u64) {
        require!(
            entry_id >= 1 && entry_id <= self.entry_count().get(),
            "Invalid entry id"
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getEntryCount)]
    fn get_entry_count(&self) -> u64 {
        self.entry_count().get()
    }

    #[view(getEntry)]
    fn get_entry(&self, entry_id: u64) -> Entry<Self::Api> {
        self.require_valid_entry(entry_id);
        self.entries(entry_id).get()
    }

    #[view(getEntryStatus)]
    fn get_entry_status(&self, entry_id: u64) -> EntryStatus {
        self.require_valid_entry(entry_id);
        self.entries(entry_id).get().status
    }

    #[view(getVoteTotals)]
    fn get_vote_totals(&self, entry_id: u64) -> MultiValue2<u64, u64> {
        self.require_valid_entry(entry_id);
        let entry = self.entries(entry_id).get();
        (entry.approval_total, entry.review_total).into()
    }

    #[view(getEntryIdByOfficialId)]
    fn get_entry_id_by_official_id(&self, official_id: &ManagedBuffer) -> u64 {
        self.entry_by_official_id(official_id).get()
    }

    #[view(getGovernanceAddress)]
    fn get_governance_address(&self) -> OptionalValue<ManagedAddress> {
        if self.governance_address().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.governance_address().get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("entryRegistered")]
    fn entry_registered_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] registrant: &ManagedAddress,
        official_id: &ManagedBuffer,
    );

    #[event("entryStatusChanged")]
    fn status_changed_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] previous: EntryStatus,
        next: EntryStatus,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("governanceAddress")]
    fn governance_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("entryCount")]
    fn entry_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("entries")]
    fn entries(&self, id: u64) -> SingleValueMapper<Entry<Self::Api>>;

    #[storage_mapper("entryByOfficialId")]
    fn entry_by_official_id(&self, official_id: &ManagedBuffer) -> SingleValueMapper<u64>;
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Entry Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntryStatus {
    /// Registered, not yet submitted for governance review.
    Incomplete,
    /// Open for member ballots.
    Pending,
    /// Approval weight reached the threshold. Terminal.
    Approved,
    /// Review weight reached the threshold. Not re-entered by governance.
    UnderReview,
    /// Rejection weight reached the threshold. Terminal.
    Rejected,
}

impl EntryStatus {
    /// The single transition table. Registrants drive `Incomplete -> Pending`,
    /// governance drives every transition out of `Pending`.
    pub fn can_transition_to(&self, next: &EntryStatus) -> bool {
        matches!(
            (self, next),
            (EntryStatus::Incomplete, EntryStatus::Pending)
                | (EntryStatus::Pending, EntryStatus::Approved)
                | (EntryStatus::Pending, EntryStatus::UnderReview)
                | (EntryStatus::Pending, EntryStatus::Rejected)
        )
    }

    pub fn is_governance_decision(&self) -> bool {
        matches!(
            self,
            EntryStatus::Approved | EntryStatus::UnderReview | EntryStatus::Rejected
        )
    }
}

// ============================================================
// Entry: the registry record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Entry<M: ManagedTypeApi> {
    pub id: u64,
    pub registrant: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub official_id: ManagedBuffer<M>,
    pub status: EntryStatus,
    pub approval_total: u64,
    pub review_total: u64,
    pub registered_at: u64,
}

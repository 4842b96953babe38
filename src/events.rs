multiversx_sc::imports!();

use crate::types::{BallotOutcome, ThresholdKind};

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Membership ──

    #[event("memberEnrolled")]
    fn member_enrolled_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] voting_power: u64,
        amount: &BigUint,
    );

    #[event("memberToppedUp")]
    fn member_topped_up_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] voting_power: u64,
        amount: &BigUint,
    );

    // ── Ballots and transitions ──

    #[event("ballotCast")]
    fn ballot_cast_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] outcome: BallotOutcome,
        timestamp: u64,
    );

    #[event("entryApproved")]
    fn entry_approved_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] approval_total: u64,
        timestamp: u64,
    );

    #[event("entryUnderReview")]
    fn entry_under_review_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] review_total: u64,
        timestamp: u64,
    );

    #[event("entryRejected")]
    fn entry_rejected_event(
        &self,
        #[indexed] entry_id: u64,
        #[indexed] rejection_total: u64,
        timestamp: u64,
    );

    // ── Administration ──

    #[event("thresholdUpdated")]
    fn threshold_updated_event(
        &self,
        #[indexed] kind: ThresholdKind,
        #[indexed] previous: u64,
        threshold: u64,
    );

    #[event("feeUpdated")]
    fn fee_updated_event(&self, #[indexed] previous: &BigUint, fee: &BigUint);

    #[event("treasuryWalletUpdated")]
    fn treasury_wallet_updated_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        wallet: &ManagedAddress,
    );

    #[event("registryAddressUpdated")]
    fn registry_address_updated_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        registry: &ManagedAddress,
    );

    #[event("paused")]
    fn paused_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("emergencyWithdraw")]
    fn emergency_withdraw_event(&self, #[indexed] wallet: &ManagedAddress, amount: &BigUint);
}

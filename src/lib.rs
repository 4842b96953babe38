#![no_std]

multiversx_sc::imports!();

pub mod ballots;
pub mod charity_governance_proxy;
pub mod config;
pub mod errors;
pub mod events;
pub mod guards;
pub mod membership;
pub mod registry;
pub mod storage;
pub mod tally;
pub mod types;
pub mod views;
pub mod voting_power;

use errors::ERR_INVALID_CONFIGURATION;
use types::BallotOutcome;

// ============================================================
// Constants
// ============================================================

const DEFAULT_APPROVAL_THRESHOLD: u64 = 3;

const DEFAULT_REVIEW_THRESHOLD: u64 = 2;

const DEFAULT_REJECTION_THRESHOLD: u64 = 3;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CharityGovernance:
    storage::StorageModule
    + events::EventsModule
    + guards::GuardsModule
    + registry::RegistryModule
    + membership::MembershipModule
    + ballots::BallotModule
    + tally::TallyModule
    + config::ConfigModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        admin: ManagedAddress,
        registry_address: ManagedAddress,
        treasury_wallet: ManagedAddress,
        membership_fee: BigUint,
    ) {
        require!(!admin.is_zero(), ERR_INVALID_CONFIGURATION);
        require!(
            self.blockchain().is_smart_contract(&registry_address),
            ERR_INVALID_CONFIGURATION
        );
        require!(!treasury_wallet.is_zero(), ERR_INVALID_CONFIGURATION);
        require!(membership_fee > 0u64, ERR_INVALID_CONFIGURATION);

        self.admin().set(&admin);
        self.registry_address().set(&registry_address);
        self.treasury_wallet().set(&treasury_wallet);
        self.membership_fee().set(&membership_fee);
        self.approval_threshold().set(DEFAULT_APPROVAL_THRESHOLD);
        self.review_threshold().set(DEFAULT_REVIEW_THRESHOLD);
        self.rejection_threshold().set(DEFAULT_REJECTION_THRESHOLD);
        self.total_contributions().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: enroll
    // Pays at least the membership fee, forwarded to the treasury.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(enroll)]
    fn enroll(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.non_reentrant(|| self.enroll_member(&caller, &payment));
    }

    // ========================================================
    // ENDPOINT: topUp
    // Raises cumulative contribution; power is recomputed, capped at 5.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(topUp)]
    fn top_up(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.non_reentrant(|| self.top_up_member(&caller, &payment));
    }

    // ========================================================
    // ENDPOINT: contribute
    // Direct payment: enrolls a newcomer, tops up an existing member.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(contribute)]
    fn contribute(&self) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.non_reentrant(|| {
            if self.members().contains(&caller) {
                self.top_up_member(&caller, &payment);
            } else {
                self.enroll_member(&caller, &payment);
            }
        });
    }

    // ========================================================
    // ENDPOINTS: ballots
    // One permanent ballot per member per pending entry.
    // ========================================================

    #[endpoint(voteApprove)]
    fn vote_approve(&self, entry_id: u64) {
        self.cast_ballot(entry_id, BallotOutcome::Approve);
    }

    #[endpoint(voteReview)]
    fn vote_review(&self, entry_id: u64) {
        self.cast_ballot(entry_id, BallotOutcome::Review);
    }

    #[endpoint(voteReject)]
    fn vote_reject(&self, entry_id: u64) {
        self.cast_ballot(entry_id, BallotOutcome::Reject);
    }

    fn cast_ballot(&self, entry_id: u64, outcome: BallotOutcome) {
        self.require_not_paused();
        let voter = self.blockchain().get_caller();

        self.non_reentrant(|| {
            self.record_ballot(entry_id, &voter, outcome);
            self.apply_ballot(entry_id, &voter, outcome);
        });
    }
}

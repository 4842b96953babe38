multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_CONFIGURATION, ERR_ZERO_AMOUNT};
use crate::types::ThresholdKind;

// ============================================================
// Administrator-only configuration. Every value is read fresh by the
// membership and tally paths, so changes apply to the next operation.
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule:
    crate::storage::StorageModule
    + crate::guards::GuardsModule
    + crate::events::EventsModule
{
    #[endpoint(setMembershipFee)]
    fn set_membership_fee(&self, fee: BigUint) {
        self.require_admin();
        require!(fee > 0u64, ERR_INVALID_CONFIGURATION);

        let previous = self.membership_fee().get();
        self.membership_fee().set(&fee);
        self.fee_updated_event(&previous, &fee);
    }

    #[endpoint(setApprovalThreshold)]
    fn set_approval_threshold(&self, threshold: u64) {
        self.update_threshold(ThresholdKind::Approval, threshold);
    }

    #[endpoint(setReviewThreshold)]
    fn set_review_threshold(&self, threshold: u64) {
        self.update_threshold(ThresholdKind::Review, threshold);
    }

    #[endpoint(setRejectionThreshold)]
    fn set_rejection_threshold(&self, threshold: u64) {
        self.update_threshold(ThresholdKind::Rejection, threshold);
    }

    fn update_threshold(&self, kind: ThresholdKind, threshold: u64) {
        self.require_admin();
        require!(threshold > 0, ERR_INVALID_CONFIGURATION);

        let mapper = match kind {
            ThresholdKind::Approval => self.approval_threshold(),
            ThresholdKind::Review => self.review_threshold(),
            ThresholdKind::Rejection => self.rejection_threshold(),
        };
        let previous = mapper.replace(threshold);
        self.threshold_updated_event(kind, previous, threshold);
    }

    #[endpoint(setTreasuryWallet)]
    fn set_treasury_wallet(&self, wallet: ManagedAddress) {
        self.require_admin();
        require!(!wallet.is_zero(), ERR_INVALID_CONFIGURATION);

        let previous = self.treasury_wallet().replace(wallet.clone());
        self.treasury_wallet_updated_event(&previous, &wallet);
    }

    #[endpoint(setRegistryAddress)]
    fn set_registry_address(&self, registry: ManagedAddress) {
        self.require_admin();
        require!(
            self.blockchain().is_smart_contract(&registry),
            ERR_INVALID_CONFIGURATION
        );

        let previous = self.registry_address().replace(registry.clone());
        self.registry_address_updated_event(&previous, &registry);
    }

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_admin();
        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_admin();
        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    /// Sweeps any EGLD held by the contract to the treasury. Works while paused.
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self) {
        self.require_admin();
        self.non_reentrant(|| {
            let balance = self
                .blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
            require!(balance > 0u64, ERR_ZERO_AMOUNT);

            let wallet = self.treasury_wallet().get();
            self.send().direct_egld(&wallet, &balance);
            self.emergency_withdraw_event(&wallet, &balance);
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(getRegistryAddress)]
    fn get_registry_address(&self) -> ManagedAddress {
        self.registry_address().get()
    }

    #[view(getTreasuryWallet)]
    fn get_treasury_wallet(&self) -> ManagedAddress {
        self.treasury_wallet().get()
    }

    #[view(getMembershipFee)]
    fn get_membership_fee(&self) -> BigUint {
        self.membership_fee().get()
    }

    /// `(approval, review, rejection)`
    #[view(getThresholds)]
    fn get_thresholds(&self) -> MultiValue3<u64, u64, u64> {
        (
            self.approval_threshold().get(),
            self.review_threshold().get(),
            self.rejection_threshold().get(),
        )
            .into()
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }
}

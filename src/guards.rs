multiversx_sc::imports!();

use crate::errors::{ERR_NOT_A_MEMBER, ERR_PAUSED, ERR_REENTRANT_CALL, ERR_UNAUTHORIZED};

/// Guard predicates run before an operation body. Each fails with exactly one
/// error kind.
#[multiversx_sc::module]
pub trait GuardsModule: crate::storage::StorageModule {
    /// Also refuses while a guarded operation is in flight, so configuration
    /// never changes underneath one.
    fn require_admin(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.members().contains(address), ERR_NOT_A_MEMBER);
    }

    /// Runs `body` holding the reentrancy lock. A nested call into any guarded
    /// operation fails while the lock is held; a failed body reverts the lock
    /// together with everything else.
    fn non_reentrant<R, F: FnOnce() -> R>(&self, body: F) -> R {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
        self.reentrancy_lock().set(true);

        let result = body();

        self.reentrancy_lock().clear();
        result
    }
}

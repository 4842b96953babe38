multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_MEMBER, ERR_INSUFFICIENT_AMOUNT, ERR_ZERO_AMOUNT};
use crate::types::Member;
use crate::voting_power::voting_power_for;

// ============================================================
// Membership ledger: enrollment, top-ups, voting power.
// Value is forwarded to the treasury only after the ledger is written.
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule:
    crate::storage::StorageModule
    + crate::guards::GuardsModule
    + crate::events::EventsModule
{
    fn enroll_member(&self, member: &ManagedAddress, amount: &BigUint) {
        require!(!self.members().contains(member), ERR_ALREADY_MEMBER);

        let fee = self.membership_fee().get();
        require!(*amount >= fee, ERR_INSUFFICIENT_AMOUNT);

        let voting_power = voting_power_for(amount, &fee);
        let timestamp = self.blockchain().get_block_timestamp();

        self.member_records(member)
            .set(Member::new(timestamp, amount.clone(), voting_power));
        self.members().insert(member.clone());
        self.total_contributions().update(|total| *total += amount);

        self.member_enrolled_event(member, voting_power, amount);
        self.forward_to_treasury(amount);
    }

    fn top_up_member(&self, member: &ManagedAddress, amount: &BigUint) {
        self.require_member(member);
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);

        let fee = self.membership_fee().get();
        let voting_power = self.member_records(member).update(|record| {
            record.contribution += amount;
            record.voting_power = voting_power_for(&record.contribution, &fee);
            record.voting_power
        });
        self.total_contributions().update(|total| *total += amount);

        self.member_topped_up_event(member, voting_power, amount);
        self.forward_to_treasury(amount);
    }

    fn forward_to_treasury(&self, amount: &BigUint) {
        let wallet = self.treasury_wallet().get();
        self.send().direct_egld(&wallet, amount);
    }

    #[view(getVotingPower)]
    fn voting_power_of(&self, member: &ManagedAddress) -> u64 {
        if self.member_records(member).is_empty() {
            return 0;
        }
        self.member_records(member).get().voting_power
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(votingPowerFor)]
    fn voting_power_for_amount(&self, amount: BigUint) -> u64 {
        voting_power_for(&amount, &self.membership_fee().get())
    }
}

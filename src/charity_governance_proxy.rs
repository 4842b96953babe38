use multiversx_sc::proxy_imports::*;

use crate::types::{EntryVotingDetails, MemberInfo, VoteRecord};

pub struct CharityGovernanceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CharityGovernanceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CharityGovernanceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CharityGovernanceProxyMethods { wrapped_tx: tx }
    }
}

pub struct CharityGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CharityGovernanceProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        admin: Arg0,
        registry_address: Arg1,
        treasury_wallet: Arg2,
        membership_fee: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&admin)
            .argument(&registry_address)
            .argument(&treasury_wallet)
            .argument(&membership_fee)
            .original_result()
    }
}

impl<Env, From, To, Gas> CharityGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn enroll(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("enroll")
            .original_result()
    }

    pub fn top_up(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("topUp")
            .original_result()
    }

    pub fn contribute(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("contribute")
            .original_result()
    }

    pub fn vote_approve<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteApprove")
            .argument(&entry_id)
            .original_result()
    }

    pub fn vote_review<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteReview")
            .argument(&entry_id)
            .original_result()
    }

    pub fn vote_reject<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteReject")
            .argument(&entry_id)
            .original_result()
    }

    pub fn set_membership_fee<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        fee: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMembershipFee")
            .argument(&fee)
            .original_result()
    }

    pub fn set_approval_threshold<Arg0: ProxyArg<u64>>(
        self,
        threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setApprovalThreshold")
            .argument(&threshold)
            .original_result()
    }

    pub fn set_review_threshold<Arg0: ProxyArg<u64>>(
        self,
        threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setReviewThreshold")
            .argument(&threshold)
            .original_result()
    }

    pub fn set_rejection_threshold<Arg0: ProxyArg<u64>>(
        self,
        threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRejectionThreshold")
            .argument(&threshold)
            .original_result()
    }

    pub fn set_treasury_wallet<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        wallet: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTreasuryWallet")
            .argument(&wallet)
            .original_result()
    }

    pub fn set_registry_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        registry: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRegistryAddress")
            .argument(&registry)
            .original_result()
    }

    pub fn pause(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("pause")
            .original_result()
    }

    pub fn unpause(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unpause")
            .original_result()
    }

    pub fn emergency_withdraw(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("emergencyWithdraw")
            .original_result()
    }

    pub fn voting_power_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPower")
            .argument(&member)
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&address)
            .original_result()
    }

    pub fn voting_power_for_amount<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingPowerFor")
            .argument(&amount)
            .original_result()
    }

    pub fn get_vote_record<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        entry_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VoteRecord> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteRecord")
            .argument(&entry_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_approvers<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getApprovers")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_reviewers<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getReviewers")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_rejecters<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRejecters")
            .argument(&entry_id)
            .original_result()
    }

    pub fn rejection_tally<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRejectionTally")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MemberInfo<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMember")
            .argument(&address)
            .original_result()
    }

    pub fn get_entry_voting_details<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        entry_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EntryVotingDetails<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntryVotingDetails")
            .argument(&entry_id)
            .argument(&voter)
            .original_result()
    }

    pub fn can_vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        entry_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("canVote")
            .argument(&entry_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_pending_entries(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingEntries")
            .original_result()
    }

    pub fn get_global_stats(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue6<u64, BigUint<Env::Api>, u64, u64, u64, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGlobalStats")
            .original_result()
    }

    pub fn get_total_votes_cast(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalVotesCast")
            .original_result()
    }

    pub fn get_admin(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }

    pub fn get_registry_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRegistryAddress")
            .original_result()
    }

    pub fn get_treasury_wallet(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryWallet")
            .original_result()
    }

    pub fn get_membership_fee(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembershipFee")
            .original_result()
    }

    pub fn get_thresholds(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getThresholds")
            .original_result()
    }

    pub fn is_paused(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaused")
            .original_result()
    }
}

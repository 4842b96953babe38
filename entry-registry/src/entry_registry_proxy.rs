use multiversx_sc::proxy_imports::*;

use crate::types::{Entry, EntryStatus};

pub struct EntryRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for EntryRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = EntryRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        EntryRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct EntryRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> EntryRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> EntryRegistryProxyMethods<Env, From, To, Gas>
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

    pub fn set_governance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        governance_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setGovernance")
            .argument(&governance_address)
            .original_result()
    }

    pub fn register_entry<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        name: Arg0,
        official_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerEntry")
            .argument(&name)
            .argument(&official_id)
            .original_result()
    }

    pub fn submit_entry<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitEntry")
            .argument(&entry_id)
            .original_result()
    }

    pub fn set_entry_status<Arg0: ProxyArg<u64>, Arg1: ProxyArg<EntryStatus>>(
        self,
        entry_id: Arg0,
        status: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEntryStatus")
            .argument(&entry_id)
            .argument(&status)
            .original_result()
    }

    pub fn set_vote_totals<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>, Arg2: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
        approval_total: Arg1,
        review_total: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVoteTotals")
            .argument(&entry_id)
            .argument(&approval_total)
            .argument(&review_total)
            .original_result()
    }

    pub fn get_entry_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntryCount")
            .original_result()
    }

    pub fn get_entry<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Entry<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntry")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_entry_status<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EntryStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntryStatus")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_vote_totals<Arg0: ProxyArg<u64>>(
        self,
        entry_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteTotals")
            .argument(&entry_id)
            .original_result()
    }

    pub fn get_entry_id_by_official_id<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        official_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEntryIdByOfficialId")
            .argument(&official_id)
            .original_result()
    }

    pub fn get_governance_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernanceAddress")
            .original_result()
    }
}

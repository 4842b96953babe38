// The calculator is pure, so it is checked directly against StaticApi without
// a blockchain. Endpoint behaviour lives in charity_governance_blackbox_test.rs.

use multiversx_sc_scenario::api::{DebugApi, StaticApi};
use multiversx_sc_scenario::imports::BigUint;

use charity_governance::voting_power::{voting_power_for, MAX_VOTING_POWER};

type GovernanceContract = charity_governance::ContractObj<DebugApi>;

fn power(contribution: u64, fee: u64) -> u64 {
    voting_power_for(
        &BigUint::<StaticApi>::from(contribution),
        &BigUint::<StaticApi>::from(fee),
    )
}

#[test]
fn test_contract_builds() {
    let _: fn() -> GovernanceContract = charity_governance::contract_obj;
}

#[test]
fn test_one_vote_per_fee_unit() {
    assert_eq!(power(100, 100), 1);
    assert_eq!(power(199, 100), 1);
    assert_eq!(power(200, 100), 2);
    assert_eq!(power(350, 100), 3);
    assert_eq!(power(499, 100), 4);
    assert_eq!(power(500, 100), 5);
}

#[test]
fn test_power_is_capped() {
    assert_eq!(power(501, 100), MAX_VOTING_POWER);
    assert_eq!(power(1_000_000, 100), MAX_VOTING_POWER);
    assert_eq!(power(u64::MAX, 1), MAX_VOTING_POWER);
}

#[test]
fn test_below_one_fee_has_no_power() {
    assert_eq!(power(0, 100), 0);
    assert_eq!(power(99, 100), 0);
    assert_eq!(power(100, 0), 0);
}

#[test]
fn test_power_never_decreases_as_contribution_grows() {
    let fee = 100;
    let mut previous = 0;
    for contribution in (fee..=800).step_by(7) {
        let current = power(contribution, fee);
        assert!(current >= previous);
        assert!(current <= MAX_VOTING_POWER);
        assert_eq!(current, core::cmp::min(1 + (contribution - fee) / fee, 5));
        previous = current;
    }
}

#[test]
fn test_large_denomination_fee() {
    // 1 EGLD fee, 18 decimals
    let fee = BigUint::<StaticApi>::from(10u64).pow(18);
    let contribution = &fee * 3u64;
    assert_eq!(voting_power_for(&contribution, &fee), 3);
}

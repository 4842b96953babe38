use multiversx_sc_scenario::imports::*;

use charity_governance::types::{BallotOutcome, VoteRecord};

#[test]
fn test_approve_top_encodes_to_empty_bytes() {
    // Storage cannot tell a stored `Approve` from an empty slot, which is why
    // ballot presence lives in its own flag.
    assert!(top_encode_to_vec_u8_or_panic(&BallotOutcome::Approve).is_empty());
    assert_eq!(top_encode_to_vec_u8_or_panic(&BallotOutcome::Review), vec![1u8]);
    assert_eq!(top_encode_to_vec_u8_or_panic(&BallotOutcome::Reject), vec![2u8]);
}

#[test]
fn test_every_outcome_decodes_back() {
    for outcome in [
        BallotOutcome::Approve,
        BallotOutcome::Review,
        BallotOutcome::Reject,
    ] {
        let bytes = top_encode_to_vec_u8_or_panic(&outcome);
        assert_eq!(check_top_decode::<BallotOutcome>(&bytes), outcome);
    }
}

#[test]
fn test_vote_record_flags_exactly_one_outcome() {
    assert!(!VoteRecord::from_ballot(None).has_voted());

    let approved = VoteRecord::from_ballot(Some(BallotOutcome::Approve));
    assert!(approved.has_voted());
    assert!(approved.voted_approve);
    assert!(!approved.voted_review);
    assert!(!approved.voted_reject);
}

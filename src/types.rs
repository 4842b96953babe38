multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub use entry_registry::types::EntryStatus;

// ============================================================
// Ballot Outcome: the three mutually exclusive choices
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BallotOutcome {
    Approve,
    /// Flag the entry for review.
    Review,
    Reject,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThresholdKind {
    Approval,
    Review,
    Rejection,
}

// ============================================================
// Member: enrollment record and lifetime ballot stats
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub joined_at: u64,
    /// Cumulative contribution; only ever grows.
    pub contribution: BigUint<M>,
    /// Derived from `contribution`, overwritten on every top-up.
    pub voting_power: u64,
    pub ballots_cast: u64,
    pub approvals_cast: u64,
    pub reviews_cast: u64,
    pub rejections_cast: u64,
    pub last_ballot_at: u64,
}

impl<M: ManagedTypeApi> Member<M> {
    pub fn new(joined_at: u64, contribution: BigUint<M>, voting_power: u64) -> Self {
        Member {
            joined_at,
            contribution,
            voting_power,
            ballots_cast: 0,
            approvals_cast: 0,
            reviews_cast: 0,
            rejections_cast: 0,
            last_ballot_at: 0,
        }
    }

    pub fn record_ballot(&mut self, outcome: BallotOutcome, timestamp: u64) {
        self.ballots_cast += 1;
        match outcome {
            BallotOutcome::Approve => self.approvals_cast += 1,
            BallotOutcome::Review => self.reviews_cast += 1,
            BallotOutcome::Reject => self.rejections_cast += 1,
        }
        self.last_ballot_at = timestamp;
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct MemberInfo<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub is_member: bool,
    pub joined_at: u64,
    pub contribution: BigUint<M>,
    pub voting_power: u64,
    pub ballots_cast: u64,
    pub approvals_cast: u64,
    pub reviews_cast: u64,
    pub rejections_cast: u64,
    pub last_ballot_at: u64,
}

impl<M: ManagedTypeApi> MemberInfo<M> {
    pub fn from_member(address: ManagedAddress<M>, member: Member<M>) -> Self {
        MemberInfo {
            address,
            is_member: true,
            joined_at: member.joined_at,
            contribution: member.contribution,
            voting_power: member.voting_power,
            ballots_cast: member.ballots_cast,
            approvals_cast: member.approvals_cast,
            reviews_cast: member.reviews_cast,
            rejections_cast: member.rejections_cast,
            last_ballot_at: member.last_ballot_at,
        }
    }

    pub fn non_member(address: ManagedAddress<M>) -> Self {
        MemberInfo {
            address,
            is_member: false,
            joined_at: 0,
            contribution: BigUint::zero(),
            voting_power: 0,
            ballots_cast: 0,
            approvals_cast: 0,
            reviews_cast: 0,
            rejections_cast: 0,
            last_ballot_at: 0,
        }
    }
}

// ============================================================
// Vote Record: flag view over a member's single ballot
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct VoteRecord {
    pub voted_approve: bool,
    pub voted_review: bool,
    pub voted_reject: bool,
}

impl VoteRecord {
    pub fn from_ballot(ballot: Option<BallotOutcome>) -> Self {
        VoteRecord {
            voted_approve: ballot == Some(BallotOutcome::Approve),
            voted_review: ballot == Some(BallotOutcome::Review),
            voted_reject: ballot == Some(BallotOutcome::Reject),
        }
    }

    pub fn has_voted(&self) -> bool {
        self.voted_approve || self.voted_review || self.voted_reject
    }
}

// ============================================================
// Entry Voting Details: per-entry inspection view
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct EntryVotingDetails<M: ManagedTypeApi> {
    pub entry_id: u64,
    pub status: EntryStatus,
    pub approval_total: u64,
    pub review_total: u64,
    /// Recomputed from current voting power at query time.
    pub rejection_total: u64,
    pub approvers: ManagedVec<M, ManagedAddress<M>>,
    pub reviewers: ManagedVec<M, ManagedAddress<M>>,
    pub rejecters: ManagedVec<M, ManagedAddress<M>>,
    pub can_vote: bool,
}

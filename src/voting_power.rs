use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

/// Voting weight never exceeds this, however large the contribution.
pub const MAX_VOTING_POWER: u64 = 5;

/// Maps a cumulative contribution to a voting weight, using the membership
/// fee as the unit: one vote for the first fee, one more for every further
/// full fee, capped at [`MAX_VOTING_POWER`].
///
/// Returns 0 below one fee (and for a zero fee), which enrollment never lets
/// through.
pub fn voting_power_for<M: ManagedTypeApi>(contribution: &BigUint<M>, fee: &BigUint<M>) -> u64 {
    if *fee == 0u64 || contribution < fee {
        return 0;
    }

    let extra_units = (contribution - fee) / fee;
    if extra_units >= MAX_VOTING_POWER - 1 {
        return MAX_VOTING_POWER;
    }

    // below the cap, so it fits
    1 + extra_units.to_u64().unwrap_or_default()
}

//! RNG seed derivation for reproducible episodes and matches.
//!
//! A base seed fans out into one seed per deal so that episode `n` of a run
//! replays identically regardless of what earlier episodes did.

/// Seed for the `deal_no`-th deal (0-based) derived from `base_seed`.
///
/// SplitMix64 finalizer over the combined input; distinct deal numbers give
/// well-separated seeds even for adjacent base seeds.
pub fn derive_deal_seed(base_seed: u64, deal_no: u64) -> u64 {
    let mut z = base_seed
        .wrapping_add(deal_no.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

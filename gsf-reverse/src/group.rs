//! Group-seed recovery: one wrapping subtraction.
//!
//! The group-level stream is freshly seeded, so its first output (the
//! generator seed) is `group_seed + XOROSHIRO_CONST1` mod 2^64.

use gsf_core::rng::XOROSHIRO_CONST1;

/// The unique group seed whose first group-level draw is `gen_seed`.
pub fn reverse_group_seed(gen_seed: u64) -> u64 {
    gen_seed.wrapping_sub(XOROSHIRO_CONST1)
}

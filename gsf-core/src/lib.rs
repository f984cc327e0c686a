//! gsf-core: PRNG primitive, entity record model, and shiny arithmetic
//! shared by every stage of the group-seed reversal pipeline.

pub mod mode;
pub mod record;
pub mod rng;
pub mod shiny;


pub use mode::SpawnerModeSet;
pub use record::{EntityRecord, RecordError};
pub use rng::{Xoroshiro128, XOROSHIRO_CONST0, XOROSHIRO_CONST1};
pub use shiny::{
    combine_trainer_id, is_potential_anti_shiny, shiny_xor, ANTI_SHINY_XOR, SHINY_XOR_THRESHOLD,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An entity seed paired with the personality roll count that reproduces
/// the observed record from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeedCandidate {
    pub seed: u64,
    pub rolls: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn seed_candidates_order_by_seed_then_rolls() {
        let a = SeedCandidate { seed: 1, rolls: 9 };
        let b = SeedCandidate { seed: 2, rolls: 1 };
        let c = SeedCandidate { seed: 2, rolls: 3 };
        assert!(a < b && b < c);
    }
}

//! Spawner mode bitset.
//!
//! A cohort can be explained by one of three spawn patterns; the finder
//! tries the members of the set in a fixed order (multi, then single,
//! then mixed).

use std::fmt;
use std::ops::BitOr;

/// Set of spawner patterns the validator may accept under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnerModeSet(u8);

impl SpawnerModeSet {
    /// One wave spawning the whole cohort.
    pub const MULTI: SpawnerModeSet = SpawnerModeSet(0b001);
    /// One entity per wave.
    pub const SINGLE: SpawnerModeSet = SpawnerModeSet(0b010);
    /// First wave of one, second wave of the rest.
    pub const MIXED: SpawnerModeSet = SpawnerModeSet(0b100);

    pub const fn empty() -> Self {
        SpawnerModeSet(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: SpawnerModeSet) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for SpawnerModeSet {
    /// Multi and single; mixed is opt-in.
    fn default() -> Self {
        Self::MULTI | Self::SINGLE
    }
}

impl BitOr for SpawnerModeSet {
    type Output = SpawnerModeSet;

    fn bitor(self, rhs: SpawnerModeSet) -> SpawnerModeSet {
        SpawnerModeSet(self.0 | rhs.0)
    }
}

impl fmt::Display for SpawnerModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (bit, name) in [
            (Self::MULTI, "multi"),
            (Self::SINGLE, "single"),
            (Self::MIXED, "mixed"),
        ] {
            if self.contains(bit) {
                write!(f, "{sep}{name}")?;
                sep = ",";
            }
        }
        if self.is_empty() {
            write!(f, "none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_multi_and_single() {
        let set = SpawnerModeSet::default();
        assert!(set.contains(SpawnerModeSet::MULTI));
        assert!(set.contains(SpawnerModeSet::SINGLE));
        assert!(!set.contains(SpawnerModeSet::MIXED));
    }

    #[test]
    fn union_and_membership() {
        let set = SpawnerModeSet::SINGLE | SpawnerModeSet::MIXED;
        assert!(!set.contains(SpawnerModeSet::MULTI));
        assert!(set.contains(SpawnerModeSet::SINGLE | SpawnerModeSet::MIXED));
        assert!(SpawnerModeSet::empty().is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn display_lists_members_in_probe_order() {
        assert_eq!(SpawnerModeSet::default().to_string(), "multi,single");
        assert_eq!(SpawnerModeSet::MIXED.to_string(), "mixed");
        assert_eq!(SpawnerModeSet::empty().to_string(), "none");
    }
}

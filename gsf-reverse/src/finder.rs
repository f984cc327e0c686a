//! Orchestrates the three reversal stages across a cohort.
//!
//! Entities are processed strictly one at a time: the 2^32 sweep
//! dominates the runtime, so an early hit on the first entity skips
//! every later sweep entirely.

use std::time::Instant;

use gsf_core::mode::SpawnerModeSet;
use gsf_core::record::EntityRecord;

use crate::entity::reverse_entity_seeds;
use crate::gen::reverse_gen_seeds;
use crate::group::reverse_group_seed;
use crate::validate::validate_group_seed;

/// Personality re-roll bound when the caller does not supply one.
pub const DEFAULT_MAX_ROLLS: u8 = 32;

#[derive(Debug, Clone, Copy)]
pub struct FinderOptions {
    /// Upper bound on personality re-rolls probed per candidate seed.
    pub max_rolls: u8,
    /// Spawner patterns the validator may accept under.
    pub modes: SpawnerModeSet,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            max_rolls: DEFAULT_MAX_ROLLS,
            modes: SpawnerModeSet::default(),
        }
    }
}

/// Accounting for one entity's reversal attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityStats {
    pub entity_seed_candidates: u64,
    pub gen_seed_candidates: u64,
    pub validator_calls: u64,
    pub elapsed_ms: u64,
}

/// Accounting across a whole run, one entry per entity attempted.
#[derive(Debug, Clone, Default)]
pub struct FinderStats {
    pub per_entity: Vec<EntityStats>,
}

impl FinderStats {
    pub fn validator_calls(&self) -> u64 {
        self.per_entity.iter().map(|e| e.validator_calls).sum()
    }
}

/// A confirmed group seed and the cohort index it was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSeedFind {
    pub group_seed: u64,
    pub first_index: usize,
}

/// Drives entity → generator → group reversal and validation.
pub struct Finder {
    options: FinderOptions,
    stats: FinderStats,
}

impl Finder {
    pub fn new(options: FinderOptions) -> Self {
        Self {
            options,
            stats: FinderStats::default(),
        }
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Accounting from the most recent [`Finder::run`].
    pub fn stats(&self) -> &FinderStats {
        &self.stats
    }

    /// Reverse the cohort; the first validated group seed wins.
    ///
    /// Candidate seeds are iterated in the deterministic order the
    /// entity reverser emits them, so repeated runs over the same
    /// cohort return the same find.
    pub fn run(&mut self, records: &[EntityRecord]) -> Option<GroupSeedFind> {
        self.stats = FinderStats::default();
        let ecs: Vec<u32> = records.iter().map(|r| r.encryption_constant).collect();

        for (index, record) in records.iter().enumerate() {
            let started = Instant::now();
            let mut entry = EntityStats::default();
            let mut hit = None;

            let candidates = reverse_entity_seeds(record, self.options.max_rolls);
            entry.entity_seed_candidates = candidates.len() as u64;

            'candidates: for candidate in &candidates {
                for gen_seed in reverse_gen_seeds(candidate.seed) {
                    entry.gen_seed_candidates += 1;
                    let group_seed = reverse_group_seed(gen_seed);
                    entry.validator_calls += 1;
                    if validate_group_seed(group_seed, &ecs, index, self.options.modes) {
                        hit = Some(GroupSeedFind {
                            group_seed,
                            first_index: index,
                        });
                        break 'candidates;
                    }
                }
            }

            entry.elapsed_ms = started.elapsed().as_millis() as u64;
            self.stats.per_entity.push(entry);
            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}

/// One-shot reversal with default options.
pub fn find_group_seed(records: &[EntityRecord]) -> Option<GroupSeedFind> {
    Finder::new(FinderOptions::default()).run(records)
}

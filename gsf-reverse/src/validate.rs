//! Forward re-simulation of candidate group seeds against a cohort.
//!
//! A candidate explains the cohort when replaying the spawn pipeline
//! from it reproduces every observed encryption constant in the shape
//! one of the spawner patterns demands. Waves in the single-spawn family
//! are separated by one extra group-level draw, which becomes the next
//! wave's group seed.

use gsf_core::mode::SpawnerModeSet;
use gsf_core::rng::Xoroshiro128;

use crate::generate::{encryption_constant, spawn};

fn spawn_ec(group_rng: &mut Xoroshiro128) -> u32 {
    encryption_constant(spawn(group_rng))
}

/// Decide whether `group_seed` explains the cohort's encryption
/// constants `ecs` under any member of `modes`, probed in the fixed
/// order multi, single, mixed. `first` is the cohort index the candidate
/// was derived from.
///
/// # Panics
/// Panics if `ecs` is empty or `first` is out of range.
pub fn validate_group_seed(
    group_seed: u64,
    ecs: &[u32],
    first: usize,
    modes: SpawnerModeSet,
) -> bool {
    assert!(!ecs.is_empty(), "cohort must not be empty");
    assert!(
        first < ecs.len(),
        "first index {} out of range for cohort of {}",
        first,
        ecs.len()
    );

    (modes.contains(SpawnerModeSet::MULTI) && accepts_multi(group_seed, ecs))
        || (modes.contains(SpawnerModeSet::SINGLE) && accepts_single(group_seed, ecs, first))
        || (modes.contains(SpawnerModeSet::MIXED) && accepts_mixed(group_seed, ecs, first))
}

/// One wave spawning the whole cohort: every produced constant must be a
/// member of `ecs`. A cohort of one is never accepted here.
fn accepts_multi(group_seed: u64, ecs: &[u32]) -> bool {
    if ecs.len() == 1 {
        return false;
    }
    let mut group_rng = Xoroshiro128::new(group_seed);
    let mut hits = 0;
    for _ in 0..ecs.len() {
        if ecs.contains(&spawn_ec(&mut group_rng)) {
            hits += 1;
        }
    }
    hits == ecs.len()
}

/// One entity per wave: constants are drained from a working multiset,
/// and the first wave must produce the constant the candidate came from.
fn accepts_single(group_seed: u64, ecs: &[u32], first: usize) -> bool {
    let mut remaining = ecs.to_vec();
    let mut wave_seed = group_seed;
    let mut first_wave = true;
    while !remaining.is_empty() {
        let mut group_rng = Xoroshiro128::new(wave_seed);
        let ec = spawn_ec(&mut group_rng);
        if first_wave && ec != ecs[first] {
            return false;
        }
        first_wave = false;
        match remaining.iter().position(|&x| x == ec) {
            Some(i) => {
                remaining.swap_remove(i);
            }
            None => return false,
        }
        wave_seed = group_rng.next();
    }
    true
}

/// First wave of one, second wave of the rest.
fn accepts_mixed(group_seed: u64, ecs: &[u32], first: usize) -> bool {
    let mut group_rng = Xoroshiro128::new(group_seed);
    if spawn_ec(&mut group_rng) != ecs[first] {
        return false;
    }
    let wave_seed = group_rng.next();

    let mut remaining = ecs.to_vec();
    remaining.swap_remove(first);
    let mut group_rng = Xoroshiro128::new(wave_seed);
    let mut hits = 0;
    for _ in 0..remaining.len() {
        if remaining.contains(&spawn_ec(&mut group_rng)) {
            hits += 1;
        }
    }
    hits == remaining.len()
}

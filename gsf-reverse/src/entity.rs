//! Brute-force entity-seed recovery.
//!
//! The entity-level stream is freshly seeded, so its first draw is
//! `seed + XOROSHIRO_CONST1` and the record's encryption constant pins
//! the low 32 bits of the seed algebraically. Only the upper half is
//! searched: 2^16 chunks of 2^16 candidates each, swept as a rayon
//! data-parallel map. A candidate survives the sweep when one of its
//! first `max_rolls` personality draws hits the record's target, and is
//! then confirmed by full trait regeneration.

use gsf_core::record::EntityRecord;
use gsf_core::rng::{Xoroshiro128, XOROSHIRO_CONST1};
use gsf_core::shiny::{is_potential_anti_shiny, ANTI_SHINY_XOR};
use gsf_core::SeedCandidate;
use rayon::prelude::*;

use crate::generate::matches_record;

/// Flawless IV counts the confirmation pass probes. The record carries
/// its own count, but confirming over the full set costs little and the
/// validator is idempotent under the duplicates.
pub const FLAWLESS_COUNTS: [u8; 3] = [0, 3, 4];

/// Personality acceptance during the sweep.
#[derive(Debug, Clone, Copy)]
enum PidTarget {
    /// Exact match against one or two candidate personalities.
    Exact { targets: [u32; 2], len: usize },
    /// Low-half match only; the high half is rewritten after generation.
    LowHalf(u16),
}

impl PidTarget {
    fn for_record(record: &EntityRecord) -> Self {
        if record.is_shiny() {
            return PidTarget::LowHalf(record.personality as u16);
        }
        let pid = record.personality;
        if is_potential_anti_shiny(record.trainer_id, record.secret_id, pid) {
            PidTarget::Exact {
                targets: [pid, pid ^ ANTI_SHINY_XOR],
                len: 2,
            }
        } else {
            PidTarget::Exact {
                targets: [pid, pid],
                len: 1,
            }
        }
    }

    #[inline]
    fn accepts(&self, pid: u32) -> bool {
        match *self {
            PidTarget::Exact { targets, len } => targets[..len].contains(&pid),
            PidTarget::LowHalf(low) => pid as u16 == low,
        }
    }
}

/// Low 32 bits shared by every candidate seed for a record.
pub fn seed_low_half(record: &EntityRecord) -> u32 {
    record
        .encryption_constant
        .wrapping_sub(XOROSHIRO_CONST1 as u32)
}

#[inline]
fn survives_sweep(seed: u64, target: &PidTarget, max_rolls: u8) -> bool {
    let mut rng = Xoroshiro128::new(seed);
    let _ec = rng.next_u32();
    let _fake_tid = rng.next_u32();
    for _ in 0..max_rolls {
        if target.accepts(rng.next_u32()) {
            return true;
        }
    }
    false
}

fn confirm_into(seed: u64, record: &EntityRecord, max_rolls: u8, out: &mut Vec<SeedCandidate>) {
    for flawless in FLAWLESS_COUNTS {
        for rolls in 1..=max_rolls {
            if matches_record(seed, rolls, flawless, record) {
                out.push(SeedCandidate { seed, rolls });
            }
        }
    }
}

/// Sweep the 2^16 candidate seeds whose upper half starts with `outer`.
pub fn scan_chunk(outer: u16, record: &EntityRecord, max_rolls: u8) -> Vec<SeedCandidate> {
    let low = seed_low_half(record);
    let target = PidTarget::for_record(record);
    let mut out = Vec::new();
    for inner in 0..=u16::MAX {
        let upper = (u32::from(outer) << 16) | u32::from(inner);
        let seed = (u64::from(upper) << 32) | u64::from(low);
        if survives_sweep(seed, &target, max_rolls) {
            confirm_into(seed, record, max_rolls, &mut out);
        }
    }
    out
}

/// Find every entity seed that regenerates `record` within `max_rolls`
/// personality re-rolls.
///
/// The full 2^32 upper-half space is swept across the worker pool; the
/// per-chunk results are merged, sorted, and deduplicated, so the output
/// order is deterministic even though discovery order is not.
pub fn reverse_entity_seeds(record: &EntityRecord, max_rolls: u8) -> Vec<SeedCandidate> {
    let mut found: Vec<SeedCandidate> = (0..=u32::from(u16::MAX))
        .into_par_iter()
        .flat_map_iter(|outer| scan_chunk(outer as u16, record, max_rolls))
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}

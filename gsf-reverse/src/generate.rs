//! Forward spawn pipeline: seeds to observable traits.
//!
//! Every helper here is a pure function of its seed inputs. The group
//! level hands two draws to each spawn (the generator seed and one opaque
//! value that is never interpreted); the generator level hands out a slot
//! roll (discarded) and the entity seed; the entity level rolls the
//! visible traits in a fixed order.

use gsf_core::record::EntityRecord;
use gsf_core::rng::Xoroshiro128;
use gsf_core::shiny::{shiny_xor, ANTI_SHINY_XOR, SHINY_XOR_THRESHOLD};

/// Derive the next spawn's entity seed from the group-level stream.
///
/// Consumes exactly two group-level draws. Mutable group state never
/// crosses into the lower levels; the generator instance is local.
pub fn spawn(group_rng: &mut Xoroshiro128) -> u64 {
    let gen_seed = group_rng.next();
    let _ = group_rng.next();
    entity_seed_from_gen(gen_seed)
}

/// Second output of a freshly seeded generator-level stream; the first
/// output is the slot roll and is discarded.
pub fn entity_seed_from_gen(gen_seed: u64) -> u64 {
    let mut rng = Xoroshiro128::new(gen_seed);
    let _ = rng.next();
    rng.next()
}

/// First 32-bit draw of the entity-level stream.
pub fn encryption_constant(entity_seed: u64) -> u32 {
    Xoroshiro128::new(entity_seed).next_u32()
}

/// Replay the trait rolls from `entity_seed` with `rolls` personality
/// draws and `flawless` forced IVs; true when every observable field of
/// `record` is reproduced.
///
/// Height and weight are not rolled for alpha records.
pub fn matches_record(entity_seed: u64, rolls: u8, flawless: u8, record: &EntityRecord) -> bool {
    let mut rng = Xoroshiro128::new(entity_seed);
    let _ec = rng.next_u32();
    let fake_tid = rng.next_u32();

    let mut pid = 0u32;
    for _ in 0..rolls {
        pid = rng.next_u32();
    }

    if record.is_shiny() {
        if pid & 0xFFFF != record.personality & 0xFFFF {
            return false;
        }
        if shiny_xor(pid, fake_tid) >= SHINY_XOR_THRESHOLD {
            return false;
        }
    } else if pid != record.personality && pid != record.personality ^ ANTI_SHINY_XOR {
        return false;
    }

    let ivs = record.ivs_speed_last();
    let mut forced = [false; 6];
    for _ in 0..flawless {
        loop {
            let slot = rng.next_bounded(6) as usize;
            if forced[slot] {
                continue;
            }
            if ivs[slot] != 31 {
                return false;
            }
            forced[slot] = true;
            break;
        }
    }
    for (slot, &iv) in ivs.iter().enumerate() {
        if !forced[slot] && rng.next_bounded(32) as u8 != iv {
            return false;
        }
    }

    if rng.next_bounded(2) as u8 + 1 != record.ability_number {
        return false;
    }

    if !record.has_fixed_gender() {
        let roll = rng.next_bounded(252) as u8 + 1;
        let gender = u8::from(roll < record.gender_ratio);
        if gender != record.gender {
            return false;
        }
    }

    if rng.next_bounded(25) as u8 != record.nature {
        return false;
    }

    if record.is_alpha {
        return true;
    }

    let height = (rng.next_bounded(0x81) + rng.next_bounded(0x80)) as u8;
    if height != record.height_scalar {
        return false;
    }
    let weight = (rng.next_bounded(0x81) + rng.next_bounded(0x80)) as u8;
    weight == record.weight_scalar
}

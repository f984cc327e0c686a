//! Decoded entity record: the observable fields the reverser works from.
//!
//! Decoding the game's binary container is an external concern; whatever
//! decoder is plugged in must produce these fields. IVs arrive in the
//! decoded stat order (HP, Atk, Def, Spe, SpA, SpD); the trait generator
//! rolls them with Speed last, so [`EntityRecord::ivs_speed_last`] is the
//! order every confirmation pass uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shiny::{combine_trainer_id, shiny_xor, SHINY_XOR_THRESHOLD};

/// Gender ratio sentinel: species without gender.
pub const GENDER_RATIO_GENDERLESS: u8 = 255;
/// Gender ratio sentinel: always female.
pub const GENDER_RATIO_FEMALE_ONLY: u8 = 254;
/// Gender ratio sentinel: always male.
pub const GENDER_RATIO_MALE_ONLY: u8 = 0;

/// Field-range violations caught before a record enters the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("flawless IV count must be 0, 3 or 4, got {0}")]
    FlawlessCount(u8),
    #[error("ability number must be 1 or 2, got {0}")]
    AbilityNumber(u8),
    #[error("gender must be 0, 1 or 2, got {0}")]
    Gender(u8),
    #[error("nature must be below 25, got {0}")]
    Nature(u8),
    #[error("IV in slot {slot} out of range: {value}")]
    IvOutOfRange { slot: usize, value: u8 },
}

/// One decoded entity, as handed over by the record decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub encryption_constant: u32,
    pub personality: u32,
    pub trainer_id: u16,
    pub secret_id: u16,
    /// Decoded stat order: HP, Atk, Def, Spe, SpA, SpD.
    pub ivs: [u8; 6],
    pub flawless_iv_count: u8,
    pub ability_number: u8,
    /// 0 male, 1 female, 2 genderless.
    pub gender: u8,
    pub gender_ratio: u8,
    pub nature: u8,
    pub is_alpha: bool,
    #[serde(default)]
    pub height_scalar: u8,
    #[serde(default)]
    pub weight_scalar: u8,
}

impl EntityRecord {
    /// Shiny against the owning trainer's real ids.
    pub fn is_shiny(&self) -> bool {
        let blob = combine_trainer_id(self.secret_id, self.trainer_id);
        shiny_xor(self.personality, blob) < SHINY_XOR_THRESHOLD
    }

    /// IVs in roll order (HP, Atk, Def, SpA, SpD, Spe): the decoded Spe
    /// slot rotates to the end.
    pub fn ivs_speed_last(&self) -> [u8; 6] {
        let v = self.ivs;
        [v[0], v[1], v[2], v[4], v[5], v[3]]
    }

    /// True when the species skips the gender roll entirely.
    pub fn has_fixed_gender(&self) -> bool {
        matches!(
            self.gender_ratio,
            GENDER_RATIO_GENDERLESS | GENDER_RATIO_FEMALE_ONLY | GENDER_RATIO_MALE_ONLY
        )
    }

    /// Range-check every bounded field.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !matches!(self.flawless_iv_count, 0 | 3 | 4) {
            return Err(RecordError::FlawlessCount(self.flawless_iv_count));
        }
        if !matches!(self.ability_number, 1 | 2) {
            return Err(RecordError::AbilityNumber(self.ability_number));
        }
        if self.gender > 2 {
            return Err(RecordError::Gender(self.gender));
        }
        if self.nature >= 25 {
            return Err(RecordError::Nature(self.nature));
        }
        for (slot, &value) in self.ivs.iter().enumerate() {
            if value > 31 {
                return Err(RecordError::IvOutOfRange { slot, value });
            }
        }
        Ok(())
    }
}

//! gsf-ingest: turns a directory of record files into a bounded cohort.
//!
//! Decoding the game's binary container is someone else's job: anything
//! implementing [`RecordDecoder`] can be plugged in. The bundled
//! [`JsonDecoder`] reads one JSON object per file with the field names
//! of [`EntityRecord`], which is enough to drive the finder end to end.
//! Files that fail to decode or validate are silently skipped; only the
//! cohort size is enforced here.

use std::fs;
use std::path::Path;

use gsf_core::record::EntityRecord;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fewer records than this cannot identify a unique group seed.
pub const COHORT_MIN: usize = 2;
/// The pipeline never produces more than this many initial spawns.
pub const COHORT_MAX: usize = 4;

#[derive(Debug, Error)]
pub enum CohortError {
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
    #[error("found {found} decodable record(s), need at least {COHORT_MIN}")]
    TooFew { found: usize },
    #[error("found {found} decodable records, at most {COHORT_MAX} supported")]
    TooMany { found: usize },
}

/// External decoder seam: bytes of one file in, one record out.
///
/// Returning `None` marks the file as "not an entity record"; the walk
/// skips it without error.
pub trait RecordDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<EntityRecord>;
}

/// Bundled decoder: one JSON object per file, field names as in
/// [`EntityRecord`], range-validated after parsing.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl RecordDecoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<EntityRecord> {
        let record: EntityRecord = serde_json::from_slice(bytes).ok()?;
        record.validate().ok()?;
        Some(record)
    }
}

/// Read every decodable record under `dir` (regular files only, stable
/// name order) and enforce the cohort bounds.
pub fn read_cohort_with<D: RecordDecoder>(
    dir: &Path,
    decoder: &D,
) -> Result<Vec<EntityRecord>, CohortError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        let bytes = fs::read(&path)?;
        if let Some(record) = decoder.decode(&bytes) {
            records.push(record);
        }
    }

    if records.len() < COHORT_MIN {
        return Err(CohortError::TooFew {
            found: records.len(),
        });
    }
    if records.len() > COHORT_MAX {
        return Err(CohortError::TooMany {
            found: records.len(),
        });
    }
    Ok(records)
}

/// [`read_cohort_with`] using the bundled [`JsonDecoder`].
pub fn read_cohort(dir: &Path) -> Result<Vec<EntityRecord>, CohortError> {
    read_cohort_with(dir, &JsonDecoder)
}

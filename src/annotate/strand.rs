//! Merging of `_W`/`_C` strand pairs.
//!
//! Some references carry the same region twice, once per strand, as two
//! consecutive records `<base>_W` and `<base>_C`. Such a pair is collapsed
//! into a single record named `<base>`.

use tracing::debug;

use crate::annotate::AnnotateError;
use crate::core::record::SequenceRecord;

pub const WATSON_SUFFIX: &str = "_W";
pub const CRICK_SUFFIX: &str = "_C";

/// Holds a pending `_W` record until its `_C` partner arrives
#[derive(Debug, Default)]
pub struct StrandPairer {
    held: Option<SequenceRecord>,
}

impl StrandPairer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a `_W` record is waiting for its partner
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Feed the next record in file order.
    ///
    /// Returns `Ok(None)` while a `_W` record is held, and the record to
    /// annotate otherwise: either `record` unchanged or the merged pair.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::MalformedPairing` if a held `_W` record is not
    /// followed by its matching `_C` record.
    pub fn push(
        &mut self,
        record: SequenceRecord,
    ) -> Result<Option<SequenceRecord>, AnnotateError> {
        let Some(watson) = self.held.take() else {
            if record.name.ends_with(WATSON_SUFFIX) {
                self.held = Some(record);
                return Ok(None);
            }
            return Ok(Some(record));
        };

        if !is_partner(&watson, &record) {
            return Err(AnnotateError::MalformedPairing {
                watson: watson.name,
                next: Some(record.name),
            });
        }

        let mut merged = record;
        merged.name.truncate(merged.name.len() - CRICK_SUFFIX.len());
        debug!(
            watson = %watson.name,
            merged = %merged.name,
            "Merged strand pair"
        );
        Ok(Some(merged))
    }

    /// Signal end of input.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::MalformedPairing` if a `_W` record is still held.
    pub fn finish(self) -> Result<(), AnnotateError> {
        match self.held {
            Some(watson) => Err(AnnotateError::MalformedPairing {
                watson: watson.name,
                next: None,
            }),
            None => Ok(()),
        }
    }
}

/// Check that `crick` is the `_C` counterpart of `watson`: same base name,
/// same length with and without placeholders.
fn is_partner(watson: &SequenceRecord, crick: &SequenceRecord) -> bool {
    let (Some(watson_base), Some(crick_base)) = (
        watson.name.strip_suffix(WATSON_SUFFIX),
        crick.name.strip_suffix(CRICK_SUFFIX),
    ) else {
        return false;
    };

    watson_base == crick_base
        && watson.length() == crick.length()
        && watson.length_without_n() == crick.length_without_n()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, length: usize, n_count: usize) -> SequenceRecord {
        let mut sequence = vec![b'A'; length - n_count];
        sequence.extend(std::iter::repeat(b'N').take(n_count));
        SequenceRecord::new(name, sequence)
    }

    #[test]
    fn test_passes_through_unpaired_records() {
        let mut pairer = StrandPairer::new();
        let out = pairer.push(record("chr1", 10, 0)).unwrap();
        assert_eq!(out.unwrap().name, "chr1");
        // A lone _C record is not a pair
        let out = pairer.push(record("seqB_C", 10, 0)).unwrap();
        assert_eq!(out.unwrap().name, "seqB_C");
        pairer.finish().unwrap();
    }

    #[test]
    fn test_merges_matching_pair() {
        let mut pairer = StrandPairer::new();
        assert!(pairer.push(record("seqA_W", 100, 10)).unwrap().is_none());
        assert!(pairer.is_holding());

        let merged = pairer.push(record("seqA_C", 100, 10)).unwrap().unwrap();
        assert_eq!(merged.name, "seqA");
        assert_eq!(merged.length(), 100);
        assert_eq!(merged.length_without_n(), 90);
        assert!(!pairer.is_holding());
        pairer.finish().unwrap();
    }

    #[test]
    fn test_rejects_different_base_name() {
        let mut pairer = StrandPairer::new();
        pairer.push(record("seqA_W", 100, 10)).unwrap();
        let err = pairer.push(record("seqB_C", 100, 10)).unwrap_err();
        match err {
            AnnotateError::MalformedPairing { watson, next } => {
                assert_eq!(watson, "seqA_W");
                assert_eq!(next.as_deref(), Some("seqB_C"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_different_lengths() {
        let mut pairer = StrandPairer::new();
        pairer.push(record("seqA_W", 100, 10)).unwrap();
        assert!(pairer.push(record("seqA_C", 99, 9)).is_err());

        let mut pairer = StrandPairer::new();
        pairer.push(record("seqA_W", 100, 10)).unwrap();
        assert!(pairer.push(record("seqA_C", 100, 11)).is_err());
    }

    #[test]
    fn test_rejects_consecutive_watson() {
        let mut pairer = StrandPairer::new();
        pairer.push(record("seqA_W", 100, 10)).unwrap();
        assert!(pairer.push(record("seqA_W", 100, 10)).is_err());
    }

    #[test]
    fn test_rejects_held_watson_at_end() {
        let mut pairer = StrandPairer::new();
        pairer.push(record("seqA_W", 100, 10)).unwrap();
        let err = pairer.finish().unwrap_err();
        assert!(err.to_string().contains("seqA_W"));
        assert!(err.to_string().contains("end of input"));
    }
}

/// Placeholder symbol for an undetermined base
pub const PLACEHOLDER: u8 = b'N';

/// A single record read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the definition line
    pub name: String,

    /// Raw sequence symbols, case preserved
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// Total number of symbols, placeholders included
    #[must_use]
    pub fn length(&self) -> u64 {
        self.sequence.len() as u64
    }

    /// Number of symbols other than the uppercase placeholder.
    ///
    /// Lowercase `n` is counted as a regular symbol.
    #[must_use]
    pub fn length_without_n(&self) -> u64 {
        self.sequence.iter().filter(|&&b| b != PLACEHOLDER).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        let record = SequenceRecord::new("chr1", "ACGTNNNNACGT");
        assert_eq!(record.length(), 12);
        assert_eq!(record.length_without_n(), 8);
    }

    #[test]
    fn test_lowercase_n_is_not_a_placeholder() {
        let record = SequenceRecord::new("chr1", "acgtnnNN");
        assert_eq!(record.length(), 8);
        assert_eq!(record.length_without_n(), 6);
    }

    #[test]
    fn test_empty_sequence() {
        let record = SequenceRecord::new("empty", "");
        assert_eq!(record.length(), 0);
        assert_eq!(record.length_without_n(), 0);
    }
}

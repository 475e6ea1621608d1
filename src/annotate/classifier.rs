//! Identifier pattern classification.

use regex::Regex;

use crate::core::types::Classification;

const CHROMOSOME_PATTERN: &str = r"^(chr)?(\d{1,2}|X|Y)$";
const MITOCHONDRIAL_PATTERN: &str = r"^(chr)?(M|MT)$";
/// Accession-named contig with optional chromosome/`Un` designator, GenBank
/// (`.1`) or UCSC (`v1`) version and `_random` suffix
const CONTIG_PATTERN: &str = r"^(chr)?(\d{1,2}|X|Y|Un)?_?[A-Z]{2}\d{6}([.v]\d+)?(_random)?$";

/// Alias preferred for mitochondrial sequences
pub const MITOCHONDRIAL_ALIAS: &str = "M";

/// Result of classifying one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub classification: Classification,

    /// Preferred short alias, if the classification has one
    pub short_alias: Option<&'a str>,
}

/// Compiled identifier patterns, checked in priority order
#[derive(Debug, Clone)]
pub struct Classifier {
    chromosome: Regex,
    mitochondrial: Regex,
    contig: Regex,
}

impl Classifier {
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            chromosome: Regex::new(CHROMOSOME_PATTERN)?,
            mitochondrial: Regex::new(MITOCHONDRIAL_PATTERN)?,
            contig: Regex::new(CONTIG_PATTERN)?,
        })
    }

    /// Classify an identifier. Only the identifier text is considered.
    #[must_use]
    pub fn classify<'a>(&self, identifier: &'a str) -> Classified<'a> {
        if let Some(caps) = self.chromosome.captures(identifier) {
            return Classified {
                classification: Classification::Chromosome,
                short_alias: caps.get(2).map(|m| m.as_str()),
            };
        }

        if self.mitochondrial.is_match(identifier) {
            return Classified {
                classification: Classification::Mitochondrial,
                short_alias: Some(MITOCHONDRIAL_ALIAS),
            };
        }

        let classification = if self.contig.is_match(identifier) {
            Classification::Contig
        } else {
            Classification::Undefined
        };

        Classified {
            classification,
            short_alias: None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Coarse classification of a reference sequence, derived from its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Primary chromosome: 1-99, X, Y (optionally `chr`-prefixed)
    Chromosome,
    /// Mitochondrial genome: M or MT (optionally `chr`-prefixed)
    Mitochondrial,
    /// Accession-named contig, e.g. `GL000202.1` or `chrUn_GL000219.1`
    Contig,
    /// Anything else
    Undefined,
}

impl Classification {
    /// All classifications in priority order
    pub const ALL: [Self; 4] = [
        Self::Chromosome,
        Self::Mitochondrial,
        Self::Contig,
        Self::Undefined,
    ];

    /// Tag as used in the generated `Classification.<TAG>` literal
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Chromosome => "CHROMOSOME",
            Self::Mitochondrial => "MITOCHONDRIAL",
            Self::Contig => "CONTIG",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

//! Command-line interface for ref-annotator.
//!
//! ## Usage
//!
//! ```text
//! # Groovy literals for a reference genome
//! ref-annotator hs37d5_GRCm38mm10_PhiX.conv.fa
//!
//! # Compressed input, tabular output
//! ref-annotator GRCh38.fa.gz --format tsv
//!
//! # Keep _W/_C strand records separate
//! ref-annotator sacCer3.fa --no-merge-strands
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod annotate;

#[derive(Parser)]
#[command(name = "ref-annotator")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract names, aliases, lengths and classifications from a reference FASTA")]
#[command(
    long_about = "ref-annotator reads a reference genome FASTA file and prints one line per sequence with its identifier, alias, length with and without N placeholders, and classification.\n\nThe default output is a list of Groovy `new FastaEntry(...)` literals ready to be pasted into source code.\n\nConsecutive <name>_W/<name>_C strand records are merged into a single <name> entry unless --no-merge-strands is given."
)]
pub struct Cli {
    /// Reference FASTA file (.fa, .fasta, .fna, optionally .gz/.bgz compressed)
    #[arg(required = true, value_name = "FASTA")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "groovy")]
    pub format: OutputFormat,

    /// Annotate _W/_C strand records individually instead of merging them
    #[arg(long)]
    pub no_merge_strands: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `new FastaEntry(...)` Groovy literals
    Groovy,
    /// Older `[...]` list literals without alias or classification
    Legacy,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Whether the format is meant to be pasted into source code, in which
    /// case a leading progress line is printed as well.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Groovy | Self::Legacy)
    }
}

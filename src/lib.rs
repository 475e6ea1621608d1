//! # ref-annotator
//!
//! A library for describing the sequences of a reference genome FASTA file.
//!
//! Pipelines that register a new reference genome need to know, for every
//! sequence in the FASTA, its name, a short alias, its length with and without
//! `N` padding, and whether it is a chromosome, the mitochondrial genome or an
//! unplaced contig. `ref-annotator` reads the FASTA once and produces exactly
//! that, by default as Groovy `new FastaEntry(...)` literals.
//!
//! ## Features
//!
//! - **Classification**: chromosome, mitochondrial, contig or undefined,
//!   decided from the sequence name alone
//! - **Aliasing**: `chr1` becomes `1` and `chrM` becomes `M`, without ever
//!   handing out the same alias twice
//! - **Strand merging**: `<name>_W`/`<name>_C` record pairs collapse into `<name>`
//! - **Compressed input**: gzip and bgzip FASTA files are read directly
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_annotator::annotate::{AnnotateOptions, Annotator};
//! use ref_annotator::parsing::fasta::{open_fasta, read_records};
//! use std::path::Path;
//!
//! let mut reader = open_fasta(Path::new("hs37d5.fa")).unwrap();
//! let mut annotator = Annotator::new(AnnotateOptions::default()).unwrap();
//!
//! for record in read_records(&mut reader) {
//!     if let Some(entry) = annotator.push(record.unwrap()).unwrap() {
//!         println!("{}", entry.groovy_literal());
//!     }
//! }
//! annotator.finish().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`annotate`]: Strand merging, classification and aliasing
//! - [`core`]: Records, entries, classifications and the alias registry
//! - [`parsing`]: FASTA reading
//! - [`cli`]: Command-line interface implementation

pub mod annotate;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use annotate::{AnnotateError, AnnotateOptions, Annotator};
pub use crate::core::entry::AnnotatedEntry;
pub use crate::core::record::SequenceRecord;
pub use crate::core::types::Classification;

//! Parsers for reference sequence files.
//!
//! - **FASTA files** ([`fasta`]): plain, gzip or bgzip compressed
//!
//! ## Example
//!
//! ```rust,no_run
//! use ref_annotator::parsing::fasta::{open_fasta, read_records};
//! use std::path::Path;
//!
//! let mut reader = open_fasta(Path::new("hs37d5.fa")).unwrap();
//! for record in read_records(&mut reader) {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.name, record.length());
//! }
//! ```

pub mod fasta;

//! Core data types for reference sequence annotation.
//!
//! - [`SequenceRecord`]: a record as read from a FASTA file
//! - [`AnnotatedEntry`]: the metadata emitted for one logical sequence
//! - [`Classification`]: chromosome, mitochondrial, contig or undefined
//! - [`AliasRegistry`]: aliases handed out so far in a run
//!
//! ## Aliases
//!
//! Different reference sources name the same sequence differently:
//!
//! | Source | Chromosome 1 | Mitochondrial |
//! |--------|--------------|---------------|
//! | UCSC   | chr1         | chrM          |
//! | NCBI   | 1            | MT            |
//!
//! Chromosomes are aliased to their bare name (`1`, `X`) and the mitochondrial
//! genome to `M`, as long as that alias has not been handed out already.
//!
//! [`SequenceRecord`]: record::SequenceRecord
//! [`AnnotatedEntry`]: entry::AnnotatedEntry
//! [`Classification`]: types::Classification
//! [`AliasRegistry`]: alias::AliasRegistry

pub mod alias;
pub mod entry;
pub mod record;
pub mod types;

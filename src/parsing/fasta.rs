//! Reader for FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::warn;

use crate::core::record::SequenceRecord;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file for reading, decompressing `.gz`/`.bgz` input.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> Result<fasta::io::Reader<Box<dyn BufRead>>, ParseError> {
    if !is_fasta_file(path) {
        warn!(
            "{} does not have a FASTA extension, reading it as FASTA anyway",
            path.display()
        );
    }

    let file = File::open(path)?;
    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        // bgzip is a series of gzip members
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(inner))
}

/// Iterate over the records of a FASTA reader in file order.
///
/// The record name is the first whitespace-delimited token of the definition
/// line; the sequence is kept as stored, without case folding.
pub fn read_records<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> impl Iterator<Item = Result<SequenceRecord, ParseError>> + '_ {
    reader.records().map(|result| {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();

        Ok(SequenceRecord::new(name, sequence))
    })
}

/// Read every record of a FASTA file into memory.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if parsing fails.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut reader = open_fasta(path)?;
    read_records(&mut reader).collect()
}

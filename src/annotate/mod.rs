//! Annotation of reference sequences.
//!
//! Records are processed in file order:
//!
//! 1. **Strand merging** ([`strand`]): a `<base>_W` record immediately followed
//!    by a matching `<base>_C` record becomes one record named `<base>`
//! 2. **Classification** ([`classifier`]): the identifier alone decides
//!    between chromosome, mitochondrial, contig and undefined
//! 3. **Aliasing**: chromosomes get their bare name, mitochondria get `M`,
//!    unless that alias is already taken
//! 4. **Lengths**: with and without uppercase `N` placeholders

use thiserror::Error;

pub mod annotator;
pub mod classifier;
pub mod strand;

pub use annotator::{annotate_records, AnnotateOptions, AnnotationSummary, Annotator};

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error(
        "Unexpected duplicated entries with _W and _C: '{watson}' is followed by {}",
        describe_next(.next)
    )]
    MalformedPairing {
        /// Identifier of the held `_W` record
        watson: String,
        /// Identifier of the record that failed to pair, `None` at end of input
        next: Option<String>,
    },

    #[error("Invalid classification pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn describe_next(next: &Option<String>) -> String {
    match next {
        Some(name) => format!("'{name}'"),
        None => "end of input".to_string(),
    }
}

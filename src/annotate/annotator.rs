use tracing::debug;

use crate::annotate::classifier::Classifier;
use crate::annotate::strand::StrandPairer;
use crate::annotate::AnnotateError;
use crate::core::alias::AliasRegistry;
use crate::core::entry::AnnotatedEntry;
use crate::core::record::SequenceRecord;
use crate::core::types::Classification;

/// Options controlling annotation
#[derive(Debug, Clone, Copy)]
pub struct AnnotateOptions {
    /// Collapse consecutive `<base>_W`/`<base>_C` records into `<base>`
    pub merge_strands: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            merge_strands: true,
        }
    }
}

/// Entry counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub chromosomes: usize,
    pub mitochondrial: usize,
    pub contigs: usize,
    pub undefined: usize,
}

impl AnnotationSummary {
    fn add(&mut self, classification: Classification) {
        match classification {
            Classification::Chromosome => self.chromosomes += 1,
            Classification::Mitochondrial => self.mitochondrial += 1,
            Classification::Contig => self.contigs += 1,
            Classification::Undefined => self.undefined += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.chromosomes + self.mitochondrial + self.contigs + self.undefined
    }
}

/// Turns FASTA records, in file order, into annotated entries.
///
/// Records are fed one at a time with [`Annotator::push`]; [`Annotator::finish`]
/// must be called once input is exhausted so that a dangling `_W` record is
/// reported.
///
/// ```
/// use ref_annotator::annotate::{AnnotateOptions, Annotator};
/// use ref_annotator::core::record::SequenceRecord;
///
/// let mut annotator = Annotator::new(AnnotateOptions::default()).unwrap();
/// let entry = annotator
///     .push(SequenceRecord::new("chr7", "ACGTNNNNACGT"))
///     .unwrap()
///     .unwrap();
/// assert_eq!(entry.alias, "7");
/// assert_eq!(entry.length_without_n, 8);
/// ```
#[derive(Debug)]
pub struct Annotator {
    classifier: Classifier,
    aliases: AliasRegistry,
    pairer: Option<StrandPairer>,
    summary: AnnotationSummary,
}

impl Annotator {
    /// # Errors
    ///
    /// Returns `AnnotateError::Pattern` if the classification patterns fail to compile.
    pub fn new(options: AnnotateOptions) -> Result<Self, AnnotateError> {
        Ok(Self {
            classifier: Classifier::new()?,
            aliases: AliasRegistry::new(),
            pairer: options.merge_strands.then(StrandPairer::new),
            summary: AnnotationSummary::default(),
        })
    }

    /// Feed the next record.
    ///
    /// Returns `Ok(None)` when the record is held back as the first half of a
    /// strand pair.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::MalformedPairing` if strand merging is enabled
    /// and a `_W` record is not followed by its `_C` partner.
    pub fn push(
        &mut self,
        record: SequenceRecord,
    ) -> Result<Option<AnnotatedEntry>, AnnotateError> {
        let record = match self.pairer.as_mut() {
            Some(pairer) => match pairer.push(record)? {
                Some(record) => record,
                None => return Ok(None),
            },
            None => record,
        };

        Ok(Some(self.annotate(&record)))
    }

    /// Finish the run and return the entry counts.
    ///
    /// # Errors
    ///
    /// Returns `AnnotateError::MalformedPairing` if a `_W` record is still
    /// waiting for its partner.
    pub fn finish(self) -> Result<AnnotationSummary, AnnotateError> {
        if let Some(pairer) = self.pairer {
            pairer.finish()?;
        }
        Ok(self.summary)
    }

    fn annotate(&mut self, record: &SequenceRecord) -> AnnotatedEntry {
        let classified = self.classifier.classify(&record.name);

        let alias = match classified.short_alias {
            Some(short) => self.aliases.claim(short, &record.name),
            None => {
                self.aliases.record(&record.name);
                record.name.clone()
            }
        };

        debug!(
            identifier = %record.name,
            alias = %alias,
            classification = %classified.classification,
            "Annotated sequence"
        );
        self.summary.add(classified.classification);

        AnnotatedEntry {
            identifier: record.name.clone(),
            alias,
            length: record.length(),
            length_without_n: record.length_without_n(),
            classification: classified.classification,
        }
    }
}

/// Annotate a complete set of records.
///
/// # Errors
///
/// Returns the first `AnnotateError` encountered.
pub fn annotate_records<I>(
    records: I,
    options: AnnotateOptions,
) -> Result<Vec<AnnotatedEntry>, AnnotateError>
where
    I: IntoIterator<Item = SequenceRecord>,
{
    let mut annotator = Annotator::new(options)?;
    let mut entries = Vec::new();
    for record in records {
        if let Some(entry) = annotator.push(record)? {
            entries.push(entry);
        }
    }
    annotator.finish()?;
    Ok(entries)
}

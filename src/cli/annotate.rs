use std::io::{self, Write};

use anyhow::Context;
use tracing::info;

use crate::annotate::{AnnotateOptions, AnnotationSummary, Annotator};
use crate::cli::{Cli, OutputFormat};
use crate::core::entry::AnnotatedEntry;
use crate::parsing::fasta::{open_fasta, read_records};
use crate::utils::validation::validate_input_path;

/// Annotate the input FASTA and write entries to stdout
///
/// Entries are written as soon as they are produced, except for JSON which is
/// written once the whole file has been read.
///
/// # Errors
///
/// Returns an error if the input cannot be found or parsed, if strand pairs
/// are malformed, or if writing to stdout fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    validate_input_path(&cli.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.format.is_literal() {
        writeln!(out, "Reading fasta file from {}", cli.input.display())?;
    }
    if cli.format == OutputFormat::Tsv {
        writeln!(
            out,
            "identifier\talias\tlength\tlength_without_n\tclassification"
        )?;
    }

    let options = AnnotateOptions {
        merge_strands: !cli.no_merge_strands,
    };
    let mut annotator = Annotator::new(options)?;
    let mut collected = Vec::new();

    let mut reader = open_fasta(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?;

    for result in read_records(&mut reader) {
        let record = result.with_context(|| format!("Failed to read {}", cli.input.display()))?;

        if let Some(entry) = annotator.push(record)? {
            match render_line(&entry, cli.format) {
                Some(line) => writeln!(out, "{line}")?,
                None => collected.push(entry),
            }
        }
    }

    let summary = annotator.finish()?;

    if cli.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&collected)?)?;
    }
    out.flush()?;

    log_summary(&summary);
    Ok(())
}

/// Line for line-oriented formats, `None` for JSON
fn render_line(entry: &AnnotatedEntry, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Groovy => Some(entry.groovy_literal()),
        OutputFormat::Legacy => Some(entry.legacy_literal()),
        OutputFormat::Tsv => Some(entry.tsv_row()),
        OutputFormat::Json => None,
    }
}

fn log_summary(summary: &AnnotationSummary) {
    info!(
        total = summary.total(),
        chromosomes = summary.chromosomes,
        mitochondrial = summary.mitochondrial,
        contigs = summary.contigs,
        undefined = summary.undefined,
        "Annotated reference sequences"
    );
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod annotate;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ref_annotator=debug,info")
    } else {
        EnvFilter::new("ref_annotator=warn")
    };

    // stdout is reserved for the generated entries
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::annotate::run(cli)
}

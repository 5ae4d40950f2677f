use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docsift::analyzer::{ExtractOptions, FileScanner, doc_from_dir, doc_from_file};
use docsift::config::ConfigLoader;
use docsift::model::DocSet;
use docsift::render::{OutputFormat, VALID_FORMATS, render};

/// Parse output format from string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "docsift")]
#[command(
    version,
    about = "Structural documentation extractor for Python codebases"
)]
struct Cli {
    #[arg(value_parser = parse_output_format, help = format!("Output format: {}", VALID_FORMATS))]
    format: OutputFormat,

    /// Source file or directory to document
    input: PathBuf,

    /// File the rendered documentation is written to
    output: PathBuf,

    /// Root directory anchoring canonical dotted names
    #[arg(long)]
    root: Option<PathBuf>,

    /// Drop functions and classes without docstrings
    #[arg(long)]
    ignore_undocumented: bool,

    /// Load configuration from a specific file
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let opts = ExtractOptions {
        ignore_undocumented: cli.ignore_undocumented || config.extract.ignore_undocumented,
    };
    let root = cli.root.or(config.extract.root.clone());

    let set = build_doc_set(&cli.input, root.as_deref(), &opts, &config)?;
    tracing::info!("documented {} modules", set.len());

    let rendered = render(&set, cli.format)?;
    fs::write(&cli.output, rendered)?;
    tracing::info!("wrote {} output to {}", cli.format, cli.output.display());

    Ok(())
}

fn build_doc_set(
    input: &std::path::Path,
    root: Option<&std::path::Path>,
    opts: &ExtractOptions,
    config: &docsift::Config,
) -> anyhow::Result<DocSet> {
    if input.is_dir() {
        let scanner = FileScanner::new(input)
            .with_exclude(config.scan.exclude.clone())
            .with_max_file_size(config.scan.max_file_size);
        Ok(doc_from_dir(input, root, scanner, opts)?)
    } else if input.is_file() {
        let mut set = DocSet::new();
        if let Some(module) = doc_from_file(input, root, opts)? {
            set.insert(module);
        }
        Ok(set)
    } else {
        anyhow::bail!("input path does not exist: {}", input.display())
    }
}

//! decomment - strip comments from source trees in place.
//!
//! Usage:
//!   dcm [PATH]                 Strip comments under PATH (default: .)
//!   dcm -n [PATH]              Dry run; report without rewriting
//!   dcm -e .c -e .h [PATH]     Override the suffix filter
//!   dcm -x vendor [PATH]       Override the excluded directory names
//!   dcm --format json [PATH]   Emit the run report as JSON
//!   dcm --help                 Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::Level;

use decomment_core::{StripConfig, StripReport};
use decomment_walk::StripWalker;

#[derive(Parser)]
#[command(
    name = "decomment",
    version,
    about = "Strip line and block comments from source trees in place",
    long_about = "decomment walks a directory tree and rewrites matching source \
                  files with // line comments, /* */ block comments, and blank \
                  lines removed.\n\n\
                  Files are only written when their content actually changes; \
                  use --dry-run to see what a run would touch."
)]
struct Cli {
    /// Root directory to process (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File-name suffix to process (repeatable; a bare name gets a leading dot)
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        default_values_t = [".rs".to_string(), ".ts".to_string()]
    )]
    extensions: Vec<String>,

    /// Directory name to exclude wherever it appears in a path (repeatable)
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "NAME",
        default_values_t = ["node_modules".to_string(), "target".to_string(), ".git".to_string()]
    )]
    exclude: Vec<String>,

    /// Report files that would change without rewriting anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = StripConfig::builder()
        .root(&cli.path)
        .extensions(normalize_extensions(&cli.extensions))
        .exclude_dirs(cli.exclude.clone())
        .dry_run(cli.dry_run)
        .build()
        .context("Invalid configuration")?;

    let walker = StripWalker::new();
    let report = walker.run(&config).context("Strip run failed")?;

    match cli.format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    // Per-file failures do not abort the walk, but they do flip the exit
    // code so scripts can tell a clean run from a partial one.
    if report.has_warnings() {
        std::process::exit(1);
    }

    Ok(())
}

/// Print the per-file lines and final summary.
fn print_text_report(report: &StripReport) {
    for path in &report.modified {
        if report.is_dry_run() {
            println!("Would process: {}", path.display());
        } else {
            println!("Processed: {}", path.display());
        }
    }

    for warning in &report.warnings {
        println!(
            "Error processing {}: {}",
            warning.path.display(),
            warning.message
        );
    }

    println!();
    if report.is_dry_run() {
        println!("Done! Would process {} files.", report.modified_count());
    } else {
        println!("Done! Processed {} files.", report.modified_count());
    }
}

/// Accept both ".rs" and "rs" on the command line.
fn normalize_extensions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|ext| {
            if ext.starts_with('.') {
                ext.clone()
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

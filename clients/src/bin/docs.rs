//! `ontodoc` — Generates HTML documentation for every ontology in a directory.
//!
//! **Outputs (`<out>/`):**
//! - `<stem>.html` — Rendered reference page per ontology
//! - `<stem>.ttl` — Copy of each successfully rendered source
//! - `index.html` — Links to every discovered ontology (unless `--no-index`)
//!
//! **Usage:**
//! ```
//! ontodoc [--source <dir>] [--out <dir>] [--config <file>] [--no-index] [--base-url <url>]
//! ```
//!
//! Exits non-zero if no ontology was found or any ontology failed to render.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use ontodoc_docs::{discover, run, BatchReport, DocsConfig, DocsError};
use ontodoc_renderer::OntPub;
use tracing_subscriber::{fmt, EnvFilter};

const RULE: &str = "------------------------------------------------------------";

/// Generate HTML documentation for ontology files.
#[derive(Parser)]
#[command(
    name = "ontodoc",
    version,
    about = "Generate HTML documentation for ontology files"
)]
struct Args {
    /// Directory scanned for ontology files (default: config, then `.`).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output directory (default: config, then `docs`).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Extension of ontology files, without the dot (default: `ttl`).
    #[arg(long)]
    extension: Option<String>,

    /// Config file (default: `ontodoc.toml` if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not write `index.html`.
    #[arg(long)]
    no_index: bool,

    /// Public URL the output directory is served from.
    #[arg(long)]
    base_url: Option<String>,

    /// Visualisation service prefix for the index page's "Visualise" links.
    #[arg(long)]
    visualiser_url: Option<String>,

    /// Title of the index page.
    #[arg(long)]
    title: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layers the command-line flags over the loaded configuration.
    fn apply(self, mut config: DocsConfig) -> DocsConfig {
        if let Ok(base) = std::env::var("PUBLIC_BASE_PATH") {
            if !base.trim().is_empty() {
                config.base_url = Some(base);
            }
        }
        if let Some(source) = self.source {
            config.source_dir = source;
        }
        if let Some(out) = self.out {
            config.out_dir = out;
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        if self.no_index {
            config.index = false;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(visualiser_url) = self.visualiser_url {
            config.visualiser_url = visualiser_url;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        config
    }
}

/// Process exit code for a finished batch: 0 only if every input succeeded.
fn exit_code(report: &BatchReport) -> i32 {
    if report.all_succeeded() {
        0
    } else {
        1
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = DocsConfig::load(args.config.as_deref())?;
    let config = args.apply(config);
    let kind = config.normalized_extension().to_uppercase();

    println!("Scanning for {} files in: {}", kind, config.source_dir.display());

    let inputs = match discover(&config) {
        Ok(inputs) => inputs,
        Err(DocsError::NoInputs { dir, .. }) => {
            println!("No {} files found in {}.", kind, dir.display());
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!("Found {} {} file(s):", inputs.len(), kind);
    for input in &inputs {
        println!("  - {}", input.file_name);
    }

    println!();
    println!("Generating documentation to: {}", config.out_dir.display());
    println!("{}", RULE);

    let renderer = OntPub::new();
    let report = run(&config, &renderer, &inputs, |result| match &result.error {
        None => println!("  ✓ Generated: {}", result.output.display()),
        Some(error) => eprintln!("  ✗ Error processing {}: {}", result.input.file_name, error),
    })?;

    println!("{}", RULE);
    if let Some(index) = &report.index {
        println!("Index page: {}", index.display());
    }
    println!(
        "Documentation generation complete: {}/{} files processed successfully.",
        report.success_count(),
        report.total()
    );

    match exit_code(&report) {
        0 => Ok(()),
        code => process::exit(code),
    }
}

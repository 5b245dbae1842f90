//! Ontology documentation batch runner.
//!
//! Scans a source directory for ontology files, renders each one through an
//! [`OntologyRenderer`], copies the source next to its rendering, and writes
//! an index page linking them all. A file that fails to render is recorded
//! and the batch moves on.
//!
//! # Entry Point
//!
//! ```no_run
//! use ontodoc_docs::{generate, DocsConfig};
//! use ontodoc_renderer::OntPub;
//!
//! let report = generate(&DocsConfig::default(), &OntPub::new())
//!     .expect("Documentation generation failed");
//! assert!(report.all_succeeded());
//! ```
//!
//! # Structure
//!
//! ```text
//! docs/
//!   index.html        ← one entry per discovered ontology
//!   alpha.html        ← rendering of alpha.ttl
//!   alpha.ttl         ← copy of the source
//!   beta_one.html
//!   beta_one.ttl
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod model;
pub mod processor;
pub mod report;
pub mod writer;

use anyhow::Result;
use ontodoc_renderer::OntologyRenderer;

pub use config::DocsConfig;
pub use error::DocsError;
pub use model::{InputFile, ProcessingResult};
pub use report::BatchReport;

/// Discovers the inputs named by `config`.
///
/// # Errors
///
/// Returns [`DocsError::NoInputs`] when nothing matches, or the discovery
/// error when the source directory cannot be scanned.
pub fn discover(config: &DocsConfig) -> Result<Vec<InputFile>, DocsError> {
    let extension = config.normalized_extension();
    let inputs = discovery::find_inputs(&config.source_dir, extension)?;
    if inputs.is_empty() {
        return Err(DocsError::NoInputs {
            dir: config.source_dir.clone(),
            extension: extension.to_string(),
        });
    }
    Ok(inputs)
}

/// Processes `inputs` in order, then writes the index page if enabled.
///
/// `on_result` sees each result as soon as its input is done.
///
/// # Errors
///
/// Returns an error only if the index page cannot be written; per-file
/// failures are reported in the returned [`BatchReport`].
pub fn run<R, F>(
    config: &DocsConfig,
    renderer: &R,
    inputs: &[InputFile],
    mut on_result: F,
) -> Result<BatchReport>
where
    R: OntologyRenderer + ?Sized,
    F: FnMut(&ProcessingResult),
{
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let result = processor::process_file(renderer, input, &config.out_dir);
        on_result(&result);
        results.push(result);
    }

    let mut report = BatchReport::new(results);
    if config.index {
        report.index = Some(index::write_index(inputs, config, &config.out_dir)?);
    }

    tracing::info!(
        total = report.total(),
        succeeded = report.success_count(),
        "batch complete"
    );
    Ok(report)
}

/// Discovers, processes and indexes in one call.
///
/// # Errors
///
/// Returns [`DocsError::NoInputs`] (wrapped) when nothing matches, a
/// discovery error, or an index-writing error.
pub fn generate<R>(config: &DocsConfig, renderer: &R) -> Result<BatchReport>
where
    R: OntologyRenderer + ?Sized,
{
    let inputs = discover(config)?;
    run(config, renderer, &inputs, |_| {})
}

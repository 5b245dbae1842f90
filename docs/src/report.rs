//! Batch report: per-file results and aggregation.

use std::path::PathBuf;

use crate::model::ProcessingResult;

/// Aggregated outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One result per discovered input, in processing order.
    pub results: Vec<ProcessingResult>,
    /// Path of the index page, if one was written.
    pub index: Option<PathBuf>,
}

impl BatchReport {
    /// Creates a report with no index page.
    pub fn new(results: Vec<ProcessingResult>) -> Self {
        Self {
            results,
            index: None,
        }
    }

    /// Number of processed inputs.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of inputs rendered and copied.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    /// Number of failed inputs.
    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    /// The failed results.
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| !r.succeeded())
    }

    /// Returns true if at least one input was processed and none failed.
    pub fn all_succeeded(&self) -> bool {
        self.total() > 0 && self.failure_count() == 0
    }
}

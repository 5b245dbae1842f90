//! Fatal batch errors.
//!
//! Per-file rendering failures are not errors at this level; they are
//! recorded in [`ProcessingResult`](crate::model::ProcessingResult)s.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A condition that stops the batch before or outside per-file processing.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The source directory holds no matching files.
    #[error("no .{extension} files found in {}", dir.display())]
    NoInputs {
        /// Scanned directory.
        dir: PathBuf,
        /// Extension searched for.
        extension: String,
    },

    /// The source directory does not exist or is not a directory.
    #[error("source directory not found: {}", dir.display())]
    SourceDir {
        /// Configured source directory.
        dir: PathBuf,
    },

    /// The source directory could not be listed.
    #[error("cannot scan {}", dir.display())]
    Scan {
        /// Scanned directory.
        dir: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// A configuration file could not be read.
    #[error("cannot read config {}", path.display())]
    ConfigRead {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A configuration file is not valid TOML for [`DocsConfig`](crate::config::DocsConfig).
    #[error("invalid config {}", path.display())]
    ConfigParse {
        /// Config path.
        path: PathBuf,
        /// TOML error.
        source: toml::de::Error,
    },
}

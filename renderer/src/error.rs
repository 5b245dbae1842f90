//! Renderer error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::SyntaxError;

/// Why an ontology could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input file could not be read.
    #[error("cannot read {}", path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The input is not valid Turtle.
    #[error("invalid Turtle in {}", path.display())]
    Parse {
        /// Input path.
        path: PathBuf,
        /// Parser message.
        source: SyntaxError,
    },

    /// The rendered page could not be written.
    #[error("cannot write {}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Any other renderer-specific failure.
    #[error("{0}")]
    Failed(String),
}

//! Ontology renderer.
//!
//! Turns an RDF/Turtle ontology file into a single self-contained HTML
//! reference page: ontology metadata, a table of contents, and one section
//! per class, property and named individual with in-page cross references.
//!
//! Callers depend on the [`OntologyRenderer`] trait; [`OntPub`] is the
//! bundled implementation. Any `Fn(&Path, &Path) -> Result<(), RenderError>`
//! is also a renderer, which is how tests stand in for the real one.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use ontodoc_renderer::{OntPub, OntologyRenderer};
//!
//! OntPub::new()
//!     .render(Path::new("pizza.ttl"), Path::new("docs/pizza.html"))
//!     .expect("Rendering failed");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod extractor;
pub mod graph;
pub mod html;
pub mod linker;
pub mod model;
pub mod vocab;
pub mod writer;

use std::fs;
use std::path::Path;

pub use error::RenderError;
pub use html::escape_html;
pub use model::OntologyDoc;

use graph::Graph;

/// Renders one ontology file to one HTML file.
pub trait OntologyRenderer {
    /// Reads `input` and writes its rendering to `output`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] describing why no rendering was produced.
    fn render(&self, input: &Path, output: &Path) -> Result<(), RenderError>;
}

impl<F> OntologyRenderer for F
where
    F: Fn(&Path, &Path) -> Result<(), RenderError>,
{
    fn render(&self, input: &Path, output: &Path) -> Result<(), RenderError> {
        self(input, output)
    }
}

/// Single-page ontology publication renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OntPub;

impl OntPub {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }

    /// Parses `input` and builds its documentation model without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Read`] or [`RenderError::Parse`].
    pub fn document(&self, input: &Path) -> Result<OntologyDoc, RenderError> {
        let source = fs::read_to_string(input).map_err(|source| RenderError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let graph = Graph::from_turtle(&source).map_err(|source| RenderError::Parse {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            input = %input.display(),
            triples = graph.len(),
            "parsed ontology"
        );

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(extractor::extract(&graph, &stem))
    }
}

impl OntologyRenderer for OntPub {
    fn render(&self, input: &Path, output: &Path) -> Result<(), RenderError> {
        let doc = self.document(input)?;
        let page = html::render_page(&doc);
        writer::write_html(output, &page)?;
        tracing::debug!(
            output = %output.display(),
            classes = doc.classes.len(),
            properties = doc.properties.len(),
            individuals = doc.individuals.len(),
            "rendered ontology"
        );
        Ok(())
    }
}

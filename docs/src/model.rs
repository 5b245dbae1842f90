//! Input references and per-file outcomes.

use std::path::{Path, PathBuf};

/// An ontology file found in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path as discovered.
    pub path: PathBuf,
    /// File name including extension (e.g. `beta_one.ttl`).
    pub file_name: String,
    /// File name without extension (e.g. `beta_one`).
    pub stem: String,
}

impl InputFile {
    /// Builds a reference from a path; `None` if it has no UTF-8 file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_str()?.to_string();
        let stem = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            path,
            file_name,
            stem,
        })
    }

    /// Name of the rendered page (`<stem>.html`).
    pub fn html_name(&self) -> String {
        format!("{}.html", self.stem)
    }

    /// Rendered page path under `out_dir`.
    pub fn html_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.html_name())
    }

    /// Source copy path under `out_dir`.
    pub fn copy_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(&self.file_name)
    }
}

/// Outcome of processing one [`InputFile`].
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The processed input.
    pub input: InputFile,
    /// Where the rendering was (or would have been) written.
    pub output: PathBuf,
    /// Failure description; `None` on success.
    pub error: Option<String>,
}

impl ProcessingResult {
    /// A successful outcome.
    pub fn success(input: InputFile, output: PathBuf) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// A failed outcome.
    pub fn failure(input: InputFile, output: PathBuf, error: impl Into<String>) -> Self {
        Self {
            input,
            output,
            error: Some(error.into()),
        }
    }

    /// Returns true if the input was rendered and copied.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

//! Batch configuration.
//!
//! Values come from [`DocsConfig::default`], then an optional `ontodoc.toml`,
//! then whatever the caller overrides (the CLI applies its flags on top).
//!
//! ```toml
//! source_dir = "ontologies"
//! out_dir = "public/docs"
//! extension = "ttl"
//! index = true
//! title = "Ontology Documentation"
//! base_url = "https://example.org/docs/"
//! visualiser_url = "https://service.tib.eu/webvowl/#iri="
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DocsError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "ontodoc.toml";

/// Visualisation service the index page links to by default (WebVOWL).
pub const DEFAULT_VISUALISER_URL: &str = "https://service.tib.eu/webvowl/#iri=";

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Directory scanned (non-recursively) for ontology files.
    pub source_dir: PathBuf,
    /// Directory receiving renderings, source copies and the index page.
    pub out_dir: PathBuf,
    /// File extension of ontology files, without the leading dot.
    pub extension: String,
    /// Whether to write `index.html`.
    pub index: bool,
    /// Heading and `<title>` of the index page.
    pub title: String,
    /// Public URL the output directory is served from.
    ///
    /// When unset, the index page computes artifact URLs in the browser
    /// from its own location.
    pub base_url: Option<String>,
    /// Prefix the absolute source URL is appended to for the "Visualise" link.
    pub visualiser_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            out_dir: PathBuf::from("docs"),
            extension: "ttl".to_string(),
            index: true,
            title: "Ontology Documentation".to_string(),
            base_url: None,
            visualiser_url: DEFAULT_VISUALISER_URL.to_string(),
        }
    }
}

impl DocsConfig {
    /// Parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::ConfigRead`] or [`DocsError::ConfigParse`].
    pub fn from_file(path: &Path) -> Result<Self, DocsError> {
        let content = fs::read_to_string(path).map_err(|source| DocsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| DocsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads `explicit` if given; otherwise [`DEFAULT_CONFIG_FILE`] if it
    /// exists; otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed. An
    /// explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, DocsError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The extension without any leading dot.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// The base URL with exactly one trailing `/`, if configured and non-empty.
    pub fn normalized_base_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| format!("{}/", url.trim_end_matches('/')))
    }
}

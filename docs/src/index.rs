//! The `index.html` page linking every discovered ontology.
//!
//! Entries are built from the discovery list, not from the processing
//! results, so an input that failed to render still gets an entry.

use std::path::{Path, PathBuf};

use anyhow::Result;
use ontodoc_renderer::escape_html;

use crate::config::DocsConfig;
use crate::model::InputFile;
use crate::writer;

/// File name of the index page.
pub const INDEX_FILE: &str = "index.html";

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; line-height: 1.5; margin: 0; color: #1d2330; background: #f6f8fb; }
main { max-width: 48rem; margin: 0 auto; padding: 2rem 1.5rem 4rem; }
ul.ontologies { list-style: none; padding: 0; }
ul.ontologies li { background: #fff; border: 1px solid #e2e6ee; border-radius: 6px; padding: 0.75rem 1rem; margin: 0.75rem 0; display: flex; align-items: baseline; gap: 1rem; flex-wrap: wrap; }
ul.ontologies .title { font-weight: 600; flex: 1; }
ul.ontologies .actions a { margin-left: 0.75rem; font-size: 0.9em; }
a { color: #1a5fb4; }
"#;

/// Resolves each artifact's absolute URL at view time from the page's own
/// location (everything up to and including the last `/`).
const BASE_URL_SCRIPT: &str = r#"<script>
(function () {
  var page = window.location.href.split('#')[0].split('?')[0];
  var base = page.substring(0, page.lastIndexOf('/') + 1);
  document.querySelectorAll('a[data-artifact]').forEach(function (link) {
    link.href = link.getAttribute('data-visualiser') + base + link.getAttribute('data-artifact');
  });
})();
</script>
"#;

/// Human-readable title for a file stem.
///
/// Underscores become spaces, then the text is title-cased: a letter that
/// follows a non-letter is upper-cased and every other letter lower-cased
/// (`beta_one` → `Beta One`, `foaf2rdf` → `Foaf2Rdf`).
pub fn display_title(stem: &str) -> String {
    let mut title = String::with_capacity(stem.len());
    let mut after_letter = false;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            title.push(c);
            after_letter = false;
        }
    }
    title
}

/// Renders one `<li>` entry.
fn render_entry(input: &InputFile, config: &DocsConfig, base_url: Option<&str>) -> String {
    let html_name = input.html_name();
    let visualise = match base_url {
        Some(base) => format!(
            "<a class=\"visualise\" href=\"{}{}{}\">Visualise</a>",
            escape_html(&config.visualiser_url),
            escape_html(base),
            escape_html(&input.file_name),
        ),
        None => format!(
            "<a class=\"visualise\" href=\"{visualiser}\" data-visualiser=\"{visualiser}\" data-artifact=\"{artifact}\">Visualise</a>",
            visualiser = escape_html(&config.visualiser_url),
            artifact = escape_html(&input.file_name),
        ),
    };

    format!(
        "<li><span class=\"title\"><a href=\"{href}\">{title}</a></span><span class=\"actions\"><a href=\"{source}\">Source</a>{visualise}</span></li>\n",
        href = escape_html(&html_name),
        title = escape_html(&display_title(&input.stem)),
        source = escape_html(&input.file_name),
        visualise = visualise,
    )
}

/// Renders the index page listing every input.
pub fn render_index_page(inputs: &[InputFile], config: &DocsConfig) -> String {
    let base_url = config.normalized_base_url();
    let entries: String = inputs
        .iter()
        .map(|input| render_entry(input, config, base_url.as_deref()))
        .collect();
    let script = if base_url.is_some() { "" } else { BASE_URL_SCRIPT };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<main id="main-content">
<h1>{title}</h1>
<p>{count} ontolog{plural} documented.</p>
<ul class="ontologies">
{entries}</ul>
</main>
{script}</body>
</html>
"##,
        title = escape_html(&config.title),
        style = STYLE,
        count = inputs.len(),
        plural = if inputs.len() == 1 { "y" } else { "ies" },
        entries = entries,
        script = script,
    )
}

/// Writes `index.html` into `out_dir` and returns its path.
///
/// # Errors
///
/// Returns an error if the page cannot be written.
pub fn write_index(inputs: &[InputFile], config: &DocsConfig, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(INDEX_FILE);
    writer::write_html(&path, &render_index_page(inputs, config))?;
    tracing::info!(path = %path.display(), entries = inputs.len(), "wrote index page");
    Ok(path)
}

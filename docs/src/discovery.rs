//! Finds ontology files in the source directory.

use std::ffi::OsStr;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::DocsError;
use crate::model::InputFile;

/// Lists the files directly inside `dir` whose extension is `extension`,
/// sorted by file name.
///
/// Subdirectories are not descended into. Symlinks to files count as files.
/// An entry that cannot be inspected (such as a dangling symlink) is
/// skipped unless its name matches, in which case it is listed and fails
/// later on its own. An empty list is a valid result.
///
/// # Errors
///
/// Returns [`DocsError::SourceDir`] if `dir` is not a directory, or
/// [`DocsError::Scan`] if it cannot be listed.
pub fn find_inputs(dir: &Path, extension: &str) -> Result<Vec<InputFile>, DocsError> {
    if !dir.is_dir() {
        return Err(DocsError::SourceDir {
            dir: dir.to_path_buf(),
        });
    }

    let extension = extension.trim_start_matches('.');
    let mut inputs = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let path = match entry {
            Ok(entry) if entry.file_type().is_file() => entry.into_path(),
            Ok(_) => continue,
            Err(err) => {
                let path = err
                    .path()
                    .filter(|_| err.depth() > 0)
                    .map(Path::to_path_buf);
                let Some(path) = path else {
                    return Err(DocsError::Scan {
                        dir: dir.to_path_buf(),
                        source: err,
                    });
                };
                if path.extension() != Some(OsStr::new(extension)) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
                path
            }
        };
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        match InputFile::from_path(&path) {
            Some(input) => inputs.push(input),
            None => tracing::warn!(
                path = %path.display(),
                "skipping file with a non UTF-8 name"
            ),
        }
    }

    tracing::debug!(dir = %dir.display(), count = inputs.len(), "discovered inputs");
    Ok(inputs)
}

//! Renders and copies one input at a time.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use ontodoc_renderer::OntologyRenderer;

use crate::model::{InputFile, ProcessingResult};

/// Renders `input` into `out_dir` and copies the source next to it.
///
/// Never fails: any error is captured in the returned result. A failed
/// input leaves no rendering behind, even one written before the failure.
pub fn process_file<R>(renderer: &R, input: &InputFile, out_dir: &Path) -> ProcessingResult
where
    R: OntologyRenderer + ?Sized,
{
    let output = input.html_path(out_dir);
    tracing::info!(input = %input.file_name, "generating documentation");

    match render_and_copy(renderer, input, out_dir, &output) {
        Ok(()) => {
            tracing::info!(output = %output.display(), "generated");
            ProcessingResult::success(input.clone(), output)
        }
        Err(err) => {
            let message = format!("{:#}", err);
            tracing::error!(input = %input.file_name, error = %message, "failed");
            ProcessingResult::failure(input.clone(), output, message)
        }
    }
}

fn render_and_copy<R>(
    renderer: &R,
    input: &InputFile,
    out_dir: &Path,
    output: &Path,
) -> Result<()>
where
    R: OntologyRenderer + ?Sized,
{
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let copy = input.copy_path(out_dir);
    if let Err(err) = renderer.render(&input.path, output) {
        remove_artifacts(&input.path, output, &copy);
        return Err(err.into());
    }

    if let Err(err) = copy_unless_same(&input.path, &copy) {
        remove_artifacts(&input.path, output, &copy);
        return Err(err).with_context(|| {
            format!("Failed to copy {} to {}", input.path.display(), copy.display())
        });
    }
    Ok(())
}

/// Removes everything a failed input may have left in the output
/// directory, including artifacts from an earlier successful run. The
/// source itself is never touched.
fn remove_artifacts(source: &Path, output: &Path, copy: &Path) {
    remove_stale(output);
    if !same_file(source, copy) {
        remove_stale(copy);
    }
}

fn remove_stale(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(err) = fs::remove_file(path) {
        tracing::warn!(
            path = %path.display(),
            error = %err,
            "could not remove artifact of failed input"
        );
    }
}

/// True if both paths name the same file (source and output directories
/// may coincide).
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_unless_same(from: &Path, to: &Path) -> io::Result<()> {
    if same_file(from, to) {
        return Ok(());
    }
    // A copy of a read-only source from an earlier run cannot be opened for
    // writing, so it is replaced rather than overwritten.
    match fs::remove_file(to) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    copy_preserving_times(from, to)
}

/// Byte-for-byte copy that also carries over modification and access times.
///
/// Works for read-only sources: the copy inherits their permissions, and
/// setting times only needs ownership, not write access.
pub fn copy_preserving_times(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;

    let meta = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::open(to)?.set_times(times)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    use ontodoc_renderer::RenderError;

    use super::*;

    fn stub(input: &Path, output: &Path) -> Result<(), RenderError> {
        let text = fs::read_to_string(input).map_err(|source| RenderError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        fs::write(output, format!("<p>{}</p>", text)).map_err(|source| RenderError::Write {
            path: output.to_path_buf(),
            source,
        })
    }

    fn input_in(dir: &Path, name: &str, content: &str) -> InputFile {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        InputFile::from_path(path).unwrap()
    }

    #[test]
    fn renders_and_copies() {
        let src = tempfile::tempdir().unwrap();
        let out = src.path().join("out").join("docs");
        let input = input_in(src.path(), "alpha.ttl", "alpha");

        let result = process_file(&stub, &input, &out);

        assert!(result.succeeded(), "{:?}", result.error);
        assert_eq!(result.output, out.join("alpha.html"));
        assert_eq!(fs::read_to_string(out.join("alpha.html")).unwrap(), "<p>alpha</p>");
        assert_eq!(fs::read(out.join("alpha.ttl")).unwrap(), b"alpha");
    }

    #[test]
    fn renderer_failure_is_captured() {
        let src = tempfile::tempdir().unwrap();
        let out = src.path().join("docs");
        let input = input_in(src.path(), "broken.ttl", "");
        let failing = |_: &Path, _: &Path| -> Result<(), RenderError> {
            Err(RenderError::Failed("boom".to_string()))
        };

        let result = process_file(&failing, &input, &out);

        assert!(!result.succeeded());
        assert!(result.error.as_deref().unwrap().contains("boom"));
        assert!(!out.join("broken.html").exists());
        assert!(!out.join("broken.ttl").exists());
    }

    #[test]
    fn partial_rendering_is_removed_on_failure() {
        let src = tempfile::tempdir().unwrap();
        let out = src.path().join("docs");
        let input = input_in(src.path(), "half.ttl", "");
        let half_done = |_: &Path, output: &Path| -> Result<(), RenderError> {
            fs::write(output, "<p>partial").unwrap();
            Err(RenderError::Failed("gave up".to_string()))
        };

        let result = process_file(&half_done, &input, &out);

        assert!(!result.succeeded());
        assert!(!out.join("half.html").exists());
    }

    #[test]
    fn failure_after_earlier_success_leaves_no_artifacts() {
        let src = tempfile::tempdir().unwrap();
        let out = src.path().join("docs");
        let input = input_in(src.path(), "beta.ttl", "beta");
        assert!(process_file(&stub, &input, &out).succeeded());
        assert!(out.join("beta.ttl").exists());

        let failing = |_: &Path, _: &Path| -> Result<(), RenderError> {
            Err(RenderError::Failed("boom".to_string()))
        };
        let result = process_file(&failing, &input, &out);

        assert!(!result.succeeded());
        assert!(!out.join("beta.html").exists());
        assert!(!out.join("beta.ttl").exists());
        assert_eq!(fs::read_to_string(&input.path).unwrap(), "beta");
    }

    #[test]
    fn failure_in_shared_directory_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_in(dir.path(), "shared.ttl", "content");
        let failing = |_: &Path, _: &Path| -> Result<(), RenderError> {
            Err(RenderError::Failed("boom".to_string()))
        };

        let result = process_file(&failing, &input, dir.path());

        assert!(!result.succeeded());
        assert_eq!(fs::read_to_string(dir.path().join("shared.ttl")).unwrap(), "content");
    }

    #[cfg(unix)]
    #[test]
    fn read_only_source_is_copied_on_every_run() {
        use std::os::unix::fs::PermissionsExt;

        let src = tempfile::tempdir().unwrap();
        let out = src.path().join("docs");
        let input = input_in(src.path(), "ro.ttl", "read only");
        fs::set_permissions(&input.path, fs::Permissions::from_mode(0o444)).unwrap();

        assert!(process_file(&stub, &input, &out).succeeded());
        let result = process_file(&stub, &input, &out);

        assert!(result.succeeded(), "{:?}", result.error);
        assert_eq!(fs::read_to_string(out.join("ro.ttl")).unwrap(), "read only");
        let mode = fs::metadata(out.join("ro.ttl")).unwrap().permissions().mode();
        assert_eq!(mode & 0o222, 0);
        assert_eq!(
            fs::metadata(out.join("ro.ttl")).unwrap().modified().unwrap(),
            fs::metadata(&input.path).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn copy_keeps_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.ttl");
        let to = dir.path().join("b.ttl");
        fs::write(&from, "x").unwrap();
        let past = SystemTime::now() - Duration::from_secs(86_400);
        File::options()
            .write(true)
            .open(&from)
            .unwrap()
            .set_modified(past)
            .unwrap();

        copy_preserving_times(&from, &to).unwrap();

        let copied = fs::metadata(&to).unwrap().modified().unwrap();
        let original = fs::metadata(&from).unwrap().modified().unwrap();
        assert_eq!(copied, original);
    }

    #[test]
    fn same_source_and_output_directory_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_in(dir.path(), "same.ttl", "content");
        let out: PathBuf = dir.path().to_path_buf();

        let result = process_file(&stub, &input, &out);

        assert!(result.succeeded(), "{:?}", result.error);
        assert_eq!(fs::read_to_string(dir.path().join("same.ttl")).unwrap(), "content");
    }
}

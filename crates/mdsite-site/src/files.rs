//! Filesystem helpers: static asset copying and markdown discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> BuildError + '_ {
    move |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Replace `output_dir` with a fresh copy of `static_dir`.
///
/// Any existing `output_dir` is deleted first. A missing `static_dir` leaves
/// an empty `output_dir`. Hidden files are copied like any other.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// Returns [`BuildError::Io`] naming the path that could not be removed,
/// created, read or copied.
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize, BuildError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(io_error(output_dir))?;
        tracing::debug!(path = %output_dir.display(), "Deleted existing output directory");
    }

    if !static_dir.is_dir() {
        tracing::info!(path = %static_dir.display(), "Static directory not found, skipping copy");
        fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;
        return Ok(0);
    }

    let copied = copy_dir(static_dir, output_dir)?;
    tracing::info!(
        from = %static_dir.display(),
        to = %output_dir.display(),
        files = copied,
        "Copied static files"
    );
    Ok(copied)
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize, BuildError> {
    fs::create_dir_all(to).map_err(io_error(to))?;

    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(io_error(from))? {
        let entry = entry.map_err(io_error(from))?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let is_dir = entry.file_type().map_err(io_error(&src))?.is_dir();

        if is_dir {
            copied += copy_dir(&src, &dst)?;
        } else {
            fs::copy(&src, &dst).map_err(io_error(&src))?;
            tracing::trace!(path = %dst.display(), "Copied file");
            copied += 1;
        }
    }
    Ok(copied)
}

/// Find markdown files under `content_dir`.
///
/// Hidden files and directories are skipped. Returned paths are relative to
/// `content_dir` and sorted.
///
/// # Errors
///
/// Returns [`BuildError::Io`] if a directory cannot be read.
pub fn find_markdown(content_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut found = Vec::new();
    scan_directory(content_dir, Path::new(""), &mut found)?;
    found.sort();
    Ok(found)
}

fn scan_directory(dir: &Path, prefix: &Path, found: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let relative = prefix.join(&name);
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, &relative, found)?;
        } else if path.extension().is_some_and(|e| e == "md") {
            found.push(relative);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_static_nested() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        let output_dir = dir.path().join("public");
        write(&static_dir.join("index.css"), "body {}");
        write(&static_dir.join("images/logo.png"), "png");
        write(&static_dir.join(".well-known/security.txt"), "contact");

        let copied = copy_static(&static_dir, &output_dir).unwrap();

        assert_eq!(copied, 3);
        assert_eq!(
            fs::read_to_string(output_dir.join("images/logo.png")).unwrap(),
            "png"
        );
        assert!(output_dir.join(".well-known/security.txt").exists());
    }

    #[test]
    fn test_copy_static_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        let output_dir = dir.path().join("public");
        write(&static_dir.join("a.txt"), "a");
        write(&output_dir.join("stale/old.html"), "old");

        copy_static(&static_dir, &output_dir).unwrap();

        assert!(!output_dir.join("stale").exists());
        assert!(output_dir.join("a.txt").exists());
    }

    #[test]
    fn test_copy_static_missing_source_creates_empty_output() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("public");
        write(&output_dir.join("old.html"), "old");

        let copied = copy_static(&dir.path().join("missing"), &output_dir).unwrap();

        assert_eq!(copied, 0);
        assert!(output_dir.is_dir());
        assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_find_markdown_sorted_and_relative() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("index.md"), "");
        write(&dir.path().join("blog/z.md"), "");
        write(&dir.path().join("blog/a.md"), "");
        write(&dir.path().join("notes.txt"), "");

        let found = find_markdown(dir.path()).unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("blog/a.md"),
                PathBuf::from("blog/z.md"),
                PathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn test_find_markdown_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join(".drafts/wip.md"), "");
        write(&dir.path().join(".hidden.md"), "");
        write(&dir.path().join("page.md"), "");

        let found = find_markdown(dir.path()).unwrap();

        assert_eq!(found, vec![PathBuf::from("page.md")]);
    }

    #[test]
    fn test_find_markdown_missing_dir() {
        let err = find_markdown(Path::new("/nonexistent/content")).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}

//! Directory walker for generated pages.
//!
//! Enumerates `<dir>/*.html` and hands every page to a transformer.
//! The listing is read to the end before the first page is touched, so
//! pages rewritten in place (or created next to their source) never show
//! up a second time. The directory handle is a scoped `ReadDir`, released
//! when the listing ends or fails.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::debug;
use crate::logger::ProgressLine;
use crate::utils::path::has_html_suffix;

use super::PageError;

/// Counts reported after a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// Pages handed to the transformer.
    pub pages: usize,
    /// Entries left untouched (other suffix or not a regular file).
    pub skipped: usize,
}

/// Run `transform` on every `.html` file directly inside `dir`.
///
/// Pages are processed one at a time, or on the rayon pool with
/// `parallel`. Either way the first error aborts the remaining walk and
/// is returned with the page path attached.
pub fn walk_pages<F>(
    dir: &Path,
    module: &'static str,
    parallel: bool,
    transform: F,
) -> Result<WalkSummary>
where
    F: Fn(&Path) -> Result<(), PageError> + Sync,
{
    let (pages, skipped) = collect_pages(dir, module)?;
    debug!(module; "{} page(s) in {}", pages.len(), dir.display());

    let progress = ProgressLine::new(module, pages.len());
    let run = |path: &PathBuf| -> Result<()> {
        transform(path).with_context(|| format!("failed to process `{}`", path.display()))?;
        progress.inc();
        Ok(())
    };

    if parallel {
        pages.par_iter().try_for_each(run)?;
    } else {
        pages.iter().try_for_each(run)?;
    }
    progress.finish();

    Ok(WalkSummary {
        pages: pages.len(),
        skipped,
    })
}

/// Collect page paths; the directory is closed when this returns.
fn collect_pages(dir: &Path, module: &str) -> Result<(Vec<PathBuf>, usize)> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot open directory `{}`", dir.display()))?;

    let mut pages = Vec::new();
    let mut skipped = 0;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read `{}`", dir.display()))?;
        let path = entry.path();
        if has_html_suffix(&entry.file_name()) && path.is_file() {
            pages.push(path);
        } else {
            debug!(module; "skip {}", entry.file_name().to_string_lossy());
            skipped += 1;
        }
    }
    Ok((pages, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "a").unwrap();
        fs::write(dir.path().join("Overview.html"), "b").unwrap();
        fs::write(dir.path().join("manual.css"), "c").unwrap();
        fs::write(dir.path().join("notes.html.bak"), "d").unwrap();
        fs::create_dir(dir.path().join("images.html")).unwrap();
        dir
    }

    #[test]
    fn test_walk_only_html_files() {
        let dir = setup();
        let seen = Mutex::new(Vec::new());

        let summary = walk_pages(dir.path(), "test", false, |path| {
            seen.lock().push(path.file_name().unwrap().to_string_lossy().into_owned());
            Ok(())
        })
        .unwrap();

        let mut seen = seen.into_inner();
        seen.sort();
        assert_eq!(seen, vec!["Overview.html", "index.html"]);
        assert_eq!(summary, WalkSummary { pages: 2, skipped: 3 });
    }

    #[test]
    fn test_walk_parallel_matches_sequential() {
        let dir = setup();
        let count = AtomicUsize::new(0);

        let summary = walk_pages(dir.path(), "test", true, |path| {
            assert!(path.extension().is_some_and(|e| e == "html"));
            count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
        .unwrap();

        assert_eq!(count.into_inner(), 2);
        assert_eq!(summary, WalkSummary { pages: 2, skipped: 3 });
    }

    #[test]
    fn test_walk_fail_fast() {
        let dir = setup();
        let calls = AtomicUsize::new(0);

        let err = walk_pages(dir.path(), "test", false, |_| {
            calls.fetch_add(1, Ordering::Relaxed);
            Err(PageError::MissingBodyOpen)
        })
        .unwrap_err();

        assert_eq!(calls.into_inner(), 1);
        let message = format!("{err:#}");
        assert!(message.contains("failed to process"));
        assert!(message.contains(".html"));
        assert!(message.contains("no opening <body> tag"));
    }

    #[test]
    fn test_walk_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = walk_pages(&missing, "test", false, |_| Ok(())).unwrap_err();
        assert!(format!("{err}").contains("cannot open directory"));
    }

    #[test]
    fn test_walk_empty_dir() {
        let dir = TempDir::new().unwrap();
        let summary = walk_pages(dir.path(), "test", false, |_| Ok(())).unwrap();
        assert_eq!(summary, WalkSummary::default());
    }
}

//! Atomic page writes.
//!
//! Content goes to a hidden sibling first and is then published under the
//! target name, so a crash never leaves a truncated page behind.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::pipeline::PageError;

/// `manual/intro.html` -> `manual/.intro.html.tmp`
fn temp_sibling(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.tmp"))
}

/// Fill a temporary sibling of `target`, then hand it to `publish`.
///
/// The temporary file is removed again if any step fails.
fn write_through_temp(
    target: &Path,
    content: &str,
    publish: impl FnOnce(&Path) -> io::Result<()>,
) -> io::Result<()> {
    let temp = temp_sibling(target);

    let result = (|| {
        let mut file = fs::File::create(&temp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        publish(&temp)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

/// Write `content` to `target`, replacing whatever is there.
pub fn write_atomic(target: &Path, content: &str) -> Result<(), PageError> {
    write_through_temp(target, content, |temp| fs::rename(temp, target))
        .map_err(PageError::io(target))
}

/// Write `content` to `target`, failing if `target` exists when the page
/// is published.
///
/// Publishing is a hard link, which never replaces an existing entry.
pub fn write_new(target: &Path, content: &str) -> Result<(), PageError> {
    write_through_temp(target, content, |temp| {
        fs::hard_link(temp, target)?;
        fs::remove_file(temp)
    })
    .map_err(|err| match err.kind() {
        ErrorKind::AlreadyExists => PageError::OutputExists(target.to_path_buf()),
        _ => PageError::Io(target.to_path_buf(), err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_sibling() {
        assert_eq!(
            temp_sibling(Path::new("manual/intro.html")),
            PathBuf::from("manual/.intro.html.tmp")
        );
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.php");

        write_atomic(&path, "<?php ?>\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_new_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.php");

        write_new(&path, "<?php ?>\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php ?>\n");
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn test_write_new_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.php");
        fs::write(&path, "hand written").unwrap();

        let err = write_new(&path, "generated").unwrap_err();

        assert!(matches!(err, PageError::OutputExists(p) if p == path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand written");
        assert!(!temp_sibling(&path).exists());
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("page.php");

        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, PageError::Io(p, _) if p == path));
    }
}

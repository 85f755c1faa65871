//! Naming rules for generated manual pages.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix of pages produced by the documentation compiler.
pub const HTML_SUFFIX: &str = ".html";

/// Suffix of extracted website pages.
pub const PHP_SUFFIX: &str = ".php";

/// Check whether a directory entry name ends in `.html`.
///
/// Case-sensitive, like the compiler's own output names.
#[inline]
pub fn has_html_suffix(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| n.ends_with(HTML_SUFFIX))
}

/// `manual/intro.html` -> `manual/intro.php`
///
/// Returns `None` when the file name does not end in `.html`.
pub fn php_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(HTML_SUFFIX)?;
    Some(path.with_file_name(format!("{stem}{PHP_SUFFIX}")))
}

/// Derive a page title from an output path.
///
/// The base name loses its extension and hyphens become spaces:
/// `manual-intro.php` -> `manual intro`.
pub fn page_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('-', " "))
        .unwrap_or_default()
}

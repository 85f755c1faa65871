//! Per-page error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while transforming a single generated page.
///
/// Every variant aborts the whole batch: the walker stops at the first
/// failing page and nothing is written for it.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("no opening <body> tag")]
    MissingBodyOpen,

    #[error("no closing </body> tag")]
    MissingBodyClose,

    #[error("second opening <body> tag on line {line}")]
    DuplicateBodyOpen { line: usize },

    #[error("second closing </body> tag on line {line}")]
    DuplicateBodyClose { line: usize },

    #[error("closing </body> tag on line {line} before the opening tag")]
    BodyCloseBeforeOpen { line: usize },

    #[error("second stylesheet link on line {line} (page already injected?)")]
    DuplicateStylesheetLink { line: usize },

    #[error("output `{0}` already exists")]
    OutputExists(PathBuf),

    #[error("`{0}` does not end in .html")]
    NotHtml(PathBuf),
}

impl PageError {
    /// Attach a path to an IO error.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |err| Self::Io(path, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_page_error_display() {
        let err = PageError::io("manual/index.html")(Error::new(ErrorKind::NotFound, "gone"));
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("manual/index.html"));

        let err = PageError::DuplicateBodyOpen { line: 12 };
        assert!(format!("{err}").contains("line 12"));

        let err = PageError::OutputExists(PathBuf::from("page.php"));
        assert!(format!("{err}").contains("page.php"));
    }
}

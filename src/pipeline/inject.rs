//! Stylesheet injector: styles generated pages in place.
//!
//! ```text
//! <html>                              <!DOCTYPE HTML PUBLIC ...>
//! <head>                              <html>
//! <link rel="stylesheet" ...>  ->    <head>
//! </head>                             <link rel="stylesheet" ...>
//! <body>                              <link href="manual.css" rel="stylesheet" type="text/css">
//! ...                                 </head>
//! </body>                             <body>
//!                                     <div class="main">
//!                                     ...
//!                                     </div>
//!                                     </body>
//! ```

use std::fs;
use std::path::Path;

use crate::config::InjectConfig;
use crate::debug;
use crate::utils::write::write_atomic;

use super::{LineKind, MarkerCheck, PageError, PageTransform, push_line, segments};

/// Strict HTML 4.01 doctype, emitted once as the first line.
pub const DOCTYPE: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;

const WRAPPER_CLOSE: &str = "</div>";

/// Result of rewriting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injected {
    pub html: String,
    /// False when the page had no stylesheet link to anchor on.
    pub stylesheet_injected: bool,
}

/// Adds the manual stylesheet and a body wrapper to generated pages.
#[derive(Debug, Clone)]
pub struct StylesheetInjector {
    stylesheet_line: String,
    wrapper_open: String,
}

impl StylesheetInjector {
    pub fn new(config: &InjectConfig) -> Self {
        Self {
            stylesheet_line: format!(
                r#"<link href="{}" rel="stylesheet" type="{}">"#,
                config.stylesheet, config.stylesheet_type
            ),
            wrapper_open: format!(r#"<div class="{}">"#, config.wrapper_class),
        }
    }

    /// Rewrite page content.
    ///
    /// Fails without output on missing or repeated body tags and on a second
    /// stylesheet link, which is also what an already injected page looks like.
    pub fn rewrite(&self, content: &str) -> Result<Injected, PageError> {
        let mut out = String::with_capacity(content.len() + 256);
        let mut check = MarkerCheck::new(true);

        push_line(&mut out, DOCTYPE);

        for (idx, line) in content.lines().enumerate() {
            for segment in segments(line) {
                check.observe(segment.kind, idx + 1)?;
                match segment.kind {
                    LineKind::Other => push_line(&mut out, segment.text),
                    LineKind::StylesheetLink => {
                        push_line(&mut out, segment.text);
                        push_line(&mut out, &self.stylesheet_line);
                    }
                    LineKind::BodyOpen => {
                        push_line(&mut out, segment.text);
                        push_line(&mut out, &self.wrapper_open);
                    }
                    LineKind::BodyClose => {
                        push_line(&mut out, WRAPPER_CLOSE);
                        push_line(&mut out, segment.text);
                    }
                }
            }
        }
        check.finish()?;

        Ok(Injected {
            html: out,
            stylesheet_injected: check.links() == 1,
        })
    }

    /// Rewrite the page at `path` in place (temp file + rename).
    pub fn inject_page(&self, path: &Path, dry: bool) -> Result<(), PageError> {
        let content = fs::read_to_string(path).map_err(PageError::io(path))?;
        let injected = self.rewrite(&content)?;

        if !injected.stylesheet_injected {
            debug!("inject"; "no stylesheet link in {}, wrapper only", path.display());
        }
        if dry {
            debug!("inject"; "would rewrite {}", path.display());
            return Ok(());
        }

        write_atomic(path, &injected.html)
    }
}

impl PageTransform for StylesheetInjector {
    fn name(&self) -> &'static str {
        "inject"
    }

    fn apply(&self, path: &Path, dry: bool) -> Result<(), PageError> {
        self.inject_page(path, dry)
    }
}

// ============================================================================
// tests
// ============================================================================

//! Website page extractor: turns generated pages into PHP fragments.
//!
//! Only the body's inner content survives. It is framed by the site
//! header and footer includes and written next to the source as `.php`;
//! the source `.html` is removed once the new file is in place.
//!
//! ```text
//! Overview.html                      Overview.php
//! <html><head>...</head>             <?php
//! <body>                       ->    $page_title = 'Overview';
//! <p>See <a href="x.html">x</a>      $page_description = 'Online manual';
//! </body>                            require_once '../head.php';
//! </html>                            ?>
//!                                    <p>See <a href="x.php">x</a>
//!                                    <?php require_once '../foot.php'; ?>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExtractConfig;
use crate::debug;
use crate::embed::site::{FOOTER_PHP, FooterVars, HEADER_PHP, HeaderVars};
use crate::utils::path::{HTML_SUFFIX, PHP_SUFFIX, page_title, php_path};
use crate::utils::write::{write_atomic, write_new};

use super::{LineKind, MarkerCheck, PageError, PageTransform, push_line, segments};

/// Return the body's inner lines with `.html` references rewritten to `.php`.
///
/// The body tags themselves and everything outside them are dropped.
/// Missing, repeated or mis-ordered body tags fail the page.
pub fn extract_body(content: &str) -> Result<String, PageError> {
    let mut out = String::with_capacity(content.len());
    let mut check = MarkerCheck::new(false);
    let mut in_body = false;

    for (idx, line) in content.lines().enumerate() {
        for segment in segments(line) {
            check.observe(segment.kind, idx + 1)?;
            match segment.kind {
                LineKind::BodyOpen => in_body = true,
                LineKind::BodyClose => in_body = false,
                _ if in_body => {
                    push_line(&mut out, &segment.text.replace(HTML_SUFFIX, PHP_SUFFIX));
                }
                _ => {}
            }
        }
    }
    check.finish()?;

    Ok(out)
}

/// Converts generated pages into website-embeddable PHP pages.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    config: ExtractConfig,
}

impl PageExtractor {
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Frame extracted body content with the header and footer templates.
    pub fn render(&self, title: &str, body: &str) -> String {
        let header = HEADER_PHP.render(&HeaderVars {
            title,
            description: &self.config.description,
            include: &self.config.header,
        });
        let footer = FOOTER_PHP.render(&FooterVars {
            include: &self.config.footer,
        });

        let mut out = String::with_capacity(header.len() + body.len() + footer.len());
        out.push_str(&header);
        out.push_str(body);
        out.push_str(&footer);
        out
    }

    /// Convert the page at `path` and remove it.
    ///
    /// Returns the path of the `.php` page. The source is deleted only
    /// after the new page is completely written.
    pub fn extract_page(&self, path: &Path, dry: bool) -> Result<PathBuf, PageError> {
        let output = php_path(path).ok_or_else(|| PageError::NotHtml(path.to_path_buf()))?;
        if output.exists() && !self.config.overwrite {
            return Err(PageError::OutputExists(output));
        }

        let content = fs::read_to_string(path).map_err(PageError::io(path))?;
        let body = extract_body(&content)?;
        let page = self.render(&page_title(&output), &body);

        if dry {
            debug!("extract"; "would write {}", output.display());
            return Ok(output);
        }

        if self.config.overwrite {
            write_atomic(&output, &page)?;
        } else {
            // a `.php` created since the check above is still not replaced
            write_new(&output, &page)?;
        }
        fs::remove_file(path).map_err(PageError::io(path))?;
        debug!("extract"; "{} -> {}", path.display(), output.display());

        Ok(output)
    }
}

impl PageTransform for PageExtractor {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn apply(&self, path: &Path, dry: bool) -> Result<(), PageError> {
        self.extract_page(path, dry).map(|_| ())
    }
}

// ============================================================================
// tests
// ============================================================================

//! Page rewriting pipelines.
//!
//! Two independent pipelines share the same directory walk:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  walk: <dir>/*.html  (fail-fast, handle scoped)      │
//! └───────────────┬──────────────────────┬───────────────┘
//!                 │                      │
//!      ┌──────────▼─────────┐  ┌─────────▼──────────────┐
//!      │ inject (in place)  │  │ extract (.html → .php) │
//!      │ doctype + css link │  │ body only, templates   │
//!      │ + body wrapper     │  │ source removed         │
//!      └────────────────────┘  └────────────────────────┘
//! ```
//!
//! Both pipelines consume [`classify::segments`] and validate page
//! structure with [`classify::MarkerCheck`] before anything is written.

pub mod classify;
mod error;
pub mod extract;
pub mod inject;
pub mod walk;

use std::path::Path;

pub use classify::{LineKind, MarkerCheck, segments};
pub use error::PageError;
pub use extract::PageExtractor;
pub use inject::StylesheetInjector;
pub use walk::{WalkSummary, walk_pages};

/// A per-page transformation driven by the walker.
pub trait PageTransform: Sync {
    /// Log prefix for this pipeline.
    fn name(&self) -> &'static str;

    /// Transform one page. With `dry`, nothing is written.
    fn apply(&self, path: &Path, dry: bool) -> Result<(), PageError>;
}

/// Append a line and a `\n` terminator.
#[inline]
pub(crate) fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

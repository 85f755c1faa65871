//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_path`)
//! - [`page`]: Generated-page naming (`has_html_suffix`, `php_path`, `page_title`)

pub mod fs;
pub mod page;

pub use fs::{normalize_path, resolve_path};
pub use page::{HTML_SUFFIX, PHP_SUFFIX, has_html_suffix, page_title, php_path};

//! `[extract]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [extract]
//! description = "Online manual"   # $page_description in every page
//! header = "../head.php"          # require_once target before the body
//! footer = "../foot.php"          # require_once target after the body
//! overwrite = false               # replace existing .php files
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Website page extractor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Site description placeholder value.
    pub description: String,

    /// Header template include path, relative to the generated page.
    pub header: String,

    /// Footer template include path, relative to the generated page.
    pub footer: String,

    /// Replace `.php` files that already exist.
    pub overwrite: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            description: "Online manual".into(),
            header: "../head.php".into(),
            footer: "../foot.php".into(),
            overwrite: false,
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.header.trim().is_empty() {
            diag.error(FieldPath::new("extract.header"), "must not be empty");
        }
        if self.footer.trim().is_empty() {
            diag.error(FieldPath::new("extract.footer"), "must not be empty");
        }
    }
}

//! `[walk]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [walk]
//! dir = "manual"      # Directory of generated pages (relative to this file)
//! parallel = false    # Process pages on all cores
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Directory walk settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory holding the generated `.html` pages.
    pub dir: PathBuf,

    /// Run per-page transformations on the rayon pool.
    pub parallel: bool,

    /// Transform in memory only (set by `--dry`, never read from file).
    #[serde(skip)]
    pub dry: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("manual"),
            parallel: false,
            dry: false,
        }
    }
}

impl WalkConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.as_os_str().is_empty() {
            diag.error(FieldPath::new("walk.dir"), "must not be empty");
        }
    }
}

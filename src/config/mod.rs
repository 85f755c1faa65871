//! Configuration management for `manpost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [walk], [inject], [extract]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # ManualConfig (this file)
//! ```
//!
//! The config file is optional. Without one every field takes its default
//! and the current directory acts as the root.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ExtractConfig, InjectConfig, WalkConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::{normalize_path, resolve_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing manpost.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualConfig {
    /// Path of the loaded config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative config paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Directory walk settings
    #[serde(default)]
    pub walk: WalkConfig,

    /// Stylesheet injector settings
    #[serde(default)]
    pub inject: InjectConfig,

    /// Website page extractor settings
    #[serde(default)]
    pub extract: ExtractConfig,
}

impl ManualConfig {
    /// Load configuration and apply CLI overrides.
    ///
    /// Searches upward from cwd for the config file; its parent becomes the
    /// root. A `DIR` given on the command line is resolved against cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, root) = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (
                    Self {
                        config_path: Some(normalize_path(&path)),
                        ..config
                    },
                    root,
                )
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                (Self::default(), cwd.clone())
            }
        };

        // Validate raw values before paths are resolved
        config.validate()?;

        config.root = normalize_path(&root);
        config.apply_command_options(cli, &cwd);

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("invalid config `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Directory holding the generated pages.
    pub fn dir(&self) -> &Path {
        &self.walk.dir
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        let args = cli.command.run_args();

        self.walk.dir = match &args.dir {
            Some(dir) => resolve_path(dir, cwd),
            None => resolve_path(&self.walk.dir, &self.root),
        };
        Self::update_option(&mut self.walk.parallel, args.parallel.as_ref());
        self.walk.dry = args.dry;

        if let Commands::Extract { force, .. } = &cli.command {
            Self::update_option(&mut self.extract.overwrite, force.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.walk.validate(&mut diag);
        self.inject.validate(&mut diag);
        self.extract.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ManualConfig {
    let (parsed, ignored) = ManualConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

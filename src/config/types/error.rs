//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `manpost.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed config file")]
    Toml(#[from] toml::de::Error),

    // no #[from]: the list is the whole message, not a cause
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// Rejected values from every section, reported in one go.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    rejected: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.rejected.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "rejected config values:".red().bold())?;
        for (field, message) in &self.rejected {
            write!(f, "\n  {field} {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("manpost.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read `manpost.toml`");
    }

    #[test]
    fn test_diagnostics_list_every_field() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());
        diag.error(FieldPath::new("walk.dir"), "must not be empty");
        diag.error(FieldPath::new("inject.wrapper_class"), "cannot hold quotes");

        let display = ConfigError::Diagnostics(diag).to_string();
        assert!(display.contains("walk.dir"));
        assert!(display.contains("must not be empty"));
        assert!(display.contains("inject.wrapper_class"));
        assert_eq!(display.lines().count(), 3);
    }
}

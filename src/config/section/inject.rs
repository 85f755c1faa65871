//! `[inject]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [inject]
//! stylesheet = "manual.css"       # href of the injected <link>
//! stylesheet_type = "text/css"    # type attribute of the injected <link>
//! wrapper_class = "main"          # class of the <div> wrapping the body
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Stylesheet injector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectConfig {
    /// Relative path of the manual stylesheet, copied next to the pages.
    pub stylesheet: String,

    /// MIME type attribute of the injected link.
    pub stylesheet_type: String,

    /// Class of the container element around the page body.
    pub wrapper_class: String,
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            stylesheet: "manual.css".into(),
            stylesheet_type: "text/css".into(),
            wrapper_class: "main".into(),
        }
    }
}

impl InjectConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.stylesheet.trim().is_empty() {
            diag.error(FieldPath::new("inject.stylesheet"), "must not be empty");
        }
        for (field, value) in [
            (FieldPath::new("inject.stylesheet"), &self.stylesheet),
            (FieldPath::new("inject.stylesheet_type"), &self.stylesheet_type),
            (FieldPath::new("inject.wrapper_class"), &self.wrapper_class),
        ] {
            if value.contains(['"', '<', '>']) {
                diag.error(
                    field,
                    format!("`{value}` cannot hold quotes or angle brackets"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_inject_config() {
        let config = test_parse_config(
            "[inject]\nstylesheet = \"yafc.css\"\nwrapper_class = \"content\"",
        );
        assert_eq!(config.inject.stylesheet, "yafc.css");
        assert_eq!(config.inject.stylesheet_type, "text/css");
        assert_eq!(config.inject.wrapper_class, "content");
    }

    #[test]
    fn test_inject_config_validate() {
        let mut diag = ConfigDiagnostics::new();
        InjectConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let config = InjectConfig {
            stylesheet: String::new(),
            wrapper_class: "a\"b".into(),
            ..InjectConfig::default()
        };
        config.validate(&mut diag);
        let display = diag.to_string();
        assert!(display.contains("inject.stylesheet"));
        assert!(display.contains("inject.wrapper_class"));
        assert!(!display.contains("inject.stylesheet_type"));
    }
}

//! Embedded templates for extracted website pages.
//!
//! # Usage
//!
//! ```ignore
//! use embed::site::{HEADER_PHP, HeaderVars};
//!
//! let php = HEADER_PHP.render(&HeaderVars {
//!     title: "manual intro",
//!     description: "Online manual",
//!     include: "../head.php",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod site {
    use super::{Template, TemplateVars, fill};

    /// Escape a value for a single-quoted PHP string literal.
    ///
    /// Inside `'...'` only the backslash and the quote itself are special.
    pub fn php_quote(value: &str) -> String {
        value.replace('\\', "\\\\").replace('\'', "\\'")
    }

    /// Variables for header.php template.
    pub struct HeaderVars<'a> {
        pub title: &'a str,
        pub description: &'a str,
        pub include: &'a str,
    }

    impl TemplateVars for HeaderVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("__PAGE_TITLE__", php_quote(self.title).as_str()),
                    ("__PAGE_DESCRIPTION__", php_quote(self.description).as_str()),
                    ("__HEADER_INCLUDE__", php_quote(self.include).as_str()),
                ],
            )
        }
    }

    /// Preamble of every extracted page: placeholders, then the site header.
    pub const HEADER_PHP: Template<HeaderVars<'static>> =
        Template::new(include_str!("site/header.php"));

    /// Variables for footer.php template.
    pub struct FooterVars<'a> {
        pub include: &'a str,
    }

    impl TemplateVars for FooterVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(content, &[("__FOOTER_INCLUDE__", php_quote(self.include).as_str())])
        }
    }

    /// Trailer of every extracted page: the site footer include.
    pub const FOOTER_PHP: Template<FooterVars<'static>> =
        Template::new(include_str!("site/footer.php"));
}

//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace placeholders in one left-to-right pass.
///
/// Substituted values are never scanned again, so a value that happens to
/// spell another placeholder stays as it is.
pub fn fill(content: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some((pos, key, value)) = vars
        .iter()
        .filter_map(|&(key, value)| rest.find(key).map(|pos| (pos, key, value)))
        .min_by_key(|&(pos, ..)| pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + key.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_every_occurrence() {
        let out = fill("__A__ and __B__, __A__", &[("__A__", "x"), ("__B__", "y")]);
        assert_eq!(out, "x and y, x");
    }

    #[test]
    fn test_fill_does_not_rescan_values() {
        let out = fill("__A__|__B__", &[("__A__", "__B__"), ("__B__", "b")]);
        assert_eq!(out, "__B__|b");
    }
}

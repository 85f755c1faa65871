//! Line classification for generated pages.
//!
//! Both pipelines are driven by the same three markers:
//!
//! | Kind             | Matches                          |
//! |------------------|----------------------------------|
//! | `StylesheetLink` | `<link rel="stylesheet" ...>`    |
//! | `BodyOpen`       | `<body>` or `<body attrs...>`    |
//! | `BodyClose`      | `</body>`                        |
//!
//! A `<link>` is a stylesheet link when its `rel` lists `stylesheet` or
//! when it has no `rel` at all. Navigation links (`rel="next"`,
//! `rel="up"`, ...) are ordinary lines, whatever the attribute order.
//! Matching is case-insensitive.
//!
//! A line carrying a marker and other content is split at marker
//! boundaries by [`segments`], so every segment handed to a pipeline
//! carries at most one marker.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::PageError;

/// Classification of a single line (or line segment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Other,
    StylesheetLink,
    BodyOpen,
    BodyClose,
}

/// A piece of an input line together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<link><link\b[^>]*>)|(?P<open><body\b[^>]*>)|(?P<close></body\s*>)")
        .unwrap()
});

static REL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\srel\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

fn is_stylesheet_link(tag: &str) -> bool {
    let Some(caps) = REL.captures(tag) else {
        return true;
    };
    caps.iter().skip(1).flatten().next().is_some_and(|rel| {
        rel.as_str()
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}

/// `None` for `<link>` tags that are not stylesheet links.
fn kind_of(caps: &Captures<'_>) -> Option<LineKind> {
    if let Some(tag) = caps.name("link") {
        is_stylesheet_link(tag.as_str()).then_some(LineKind::StylesheetLink)
    } else if caps.name("open").is_some() {
        Some(LineKind::BodyOpen)
    } else {
        Some(LineKind::BodyClose)
    }
}

/// Kind of the first marker on a line.
#[cfg(test)]
pub(crate) fn classify(line: &str) -> LineKind {
    segments(line)
        .iter()
        .map(|s| s.kind)
        .find(|&kind| kind != LineKind::Other)
        .unwrap_or(LineKind::Other)
}

/// Split a line so that every segment holds at most one marker.
///
/// The line is cut after each link or body-open tag and before each
/// body-close tag. Pieces holding only whitespace stay attached to their
/// neighbour, so a line whose only non-blank content is one marker comes
/// back whole.
///
/// ```text
/// <body>See <a href="x.html">x</a></body>
/// -> [BodyOpen "<body>"] [Other "See <a ...>x</a>"] [BodyClose "</body>"]
/// ```
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let markers: Vec<(LineKind, usize, usize)> = MARKER
        .captures_iter(line)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            Some((kind_of(&caps)?, m.start(), m.end()))
        })
        .collect();

    if markers.is_empty() {
        return vec![Segment {
            kind: LineKind::Other,
            text: line,
        }];
    }

    let mut cuts = Vec::with_capacity(markers.len() + 1);
    for (i, &(kind, start, end)) in markers.iter().enumerate() {
        if kind == LineKind::BodyClose {
            cuts.push(start);
            // `</body><body>` must not share a segment
            if markers.get(i + 1).is_some_and(|next| next.0 != LineKind::BodyClose) {
                cuts.push(end);
            }
        } else {
            cuts.push(end);
        }
    }
    cuts.retain(|&c| c > 0 && c < line.len());
    cuts.sort_unstable();
    cuts.dedup();

    // Contiguous ranges, blank ones merged into a neighbour.
    let mut ranges: Vec<(usize, usize)> = Vec::with_capacity(cuts.len() + 1);
    let mut pending = None;
    let mut from = 0;
    for to in cuts.into_iter().chain(std::iter::once(line.len())) {
        if line[from..to].trim().is_empty() {
            match ranges.last_mut() {
                Some(last) => last.1 = to,
                None => pending = pending.or(Some(from)),
            }
        } else {
            ranges.push((pending.take().unwrap_or(from), to));
        }
        from = to;
    }

    ranges
        .into_iter()
        .map(|(from, to)| {
            let kind = markers
                .iter()
                .find(|&&(_, s, e)| s >= from && e <= to)
                .map_or(LineKind::Other, |&(kind, ..)| kind);
            Segment {
                kind,
                text: &line[from..to],
            }
        })
        .collect()
}

/// Tracks marker counts across a page and rejects malformed structure.
///
/// Feed every classified segment through [`MarkerCheck::observe`] with its
/// 1-based source line, then call [`MarkerCheck::finish`].
#[derive(Debug, Default)]
pub struct MarkerCheck {
    links: usize,
    opened: bool,
    closed: bool,
    /// Reject a second stylesheet link (the injector cares, the extractor does not).
    strict_links: bool,
}

impl MarkerCheck {
    pub fn new(strict_links: bool) -> Self {
        Self {
            strict_links,
            ..Self::default()
        }
    }

    pub fn observe(&mut self, kind: LineKind, line: usize) -> Result<(), PageError> {
        match kind {
            LineKind::Other => {}
            LineKind::StylesheetLink => {
                self.links += 1;
                if self.strict_links && self.links > 1 {
                    return Err(PageError::DuplicateStylesheetLink { line });
                }
            }
            LineKind::BodyOpen => {
                if self.opened {
                    return Err(PageError::DuplicateBodyOpen { line });
                }
                self.opened = true;
            }
            LineKind::BodyClose => {
                if !self.opened {
                    return Err(PageError::BodyCloseBeforeOpen { line });
                }
                if self.closed {
                    return Err(PageError::DuplicateBodyClose { line });
                }
                self.closed = true;
            }
        }
        Ok(())
    }

    pub fn finish(&self) -> Result<(), PageError> {
        if !self.opened {
            return Err(PageError::MissingBodyOpen);
        }
        if !self.closed {
            return Err(PageError::MissingBodyClose);
        }
        Ok(())
    }

    /// Number of stylesheet links seen so far.
    pub fn links(&self) -> usize {
        self.links
    }
}

// ============================================================================
// tests
// ============================================================================

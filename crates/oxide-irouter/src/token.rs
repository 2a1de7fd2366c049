//! Placeholder scanning shared by the compiler and the reverse generator.
//!
//! A placeholder is written `<prefix>[<type>:<name>]<optional>`:
//!
//! - `<prefix>` is an optional `/` or `.` directly before the bracket,
//! - `<type>` is a match-type key (empty when omitted),
//! - `<name>` is the capture name (empty for a positional capture),
//! - `<optional>` is a trailing `?`.
//!
//! `[i:id]`, `/[:slug]`, `.[:format]?` and `[*]` are all placeholders.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, RouterError};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(/|\.|)\[([^:\]]*)(?::([^:\]]*))?\](\??)").expect("placeholder grammar is valid")
});

/// One placeholder occurrence inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placeholder<'a> {
    /// Literal `/`, `.` or nothing.
    pub prefix: &'a str,
    /// Match-type key.
    pub type_key: &'a str,
    /// Capture name; empty for a positional capture.
    pub name: &'a str,
    /// Whether the placeholder ends in `?`.
    pub optional: bool,
}

impl Placeholder<'_> {
    pub(crate) fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A pattern split into literal text and placeholders, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder<'a>),
}

/// Scans `pattern` once, left to right.
///
/// Fails if a `[` or `]` is left over outside a well-formed placeholder.
pub(crate) fn tokenize(pattern: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(pattern) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_literal(&mut segments, pattern, &pattern[last..whole.start()])?;
        segments.push(Segment::Placeholder(Placeholder {
            prefix: caps.get(1).map_or("", |m| m.as_str()),
            type_key: caps.get(2).map_or("", |m| m.as_str()),
            name: caps.get(3).map_or("", |m| m.as_str()),
            optional: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
        }));
        last = whole.end();
    }
    push_literal(&mut segments, pattern, &pattern[last..])?;

    Ok(segments)
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, pattern: &str, text: &'a str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if text.contains(['[', ']']) {
        return Err(RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: format!("unbalanced bracket in '{text}'"),
        });
    }
    segments.push(Segment::Literal(text));
    Ok(())
}

/// Returns the literal text every match of `pattern` must start with, or
/// `None` if the pattern has no placeholder at all.
///
/// A `/` or `.` directly before the first bracket belongs to the
/// placeholder and may vanish with it, so it is not part of the prefix.
pub(crate) fn static_prefix(pattern: &str) -> Option<&str> {
    let position = pattern.find('[')?;
    let head = &pattern[..position];
    Some(
        head.strip_suffix('/')
            .or_else(|| head.strip_suffix('.'))
            .unwrap_or(head),
    )
}

//! Route pattern compilation.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, RouterError};
use crate::match_types::MatchTypes;
use crate::params::PathParams;
use crate::token::{self, Placeholder, Segment};

/// A route pattern compiled into an anchored regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The original pattern string.
    pattern: String,
    /// Compiled regex for matching.
    regex: Regex,
}

impl CompiledPattern {
    /// Compiles a placeholder pattern against a match-type table.
    ///
    /// Literal text is matched exactly. Each placeholder becomes a capture
    /// group holding its match-type fragment; an optional placeholder takes
    /// its `/` or `.` prefix with it when absent.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_irouter::{CompiledPattern, MatchTypes};
    ///
    /// let pattern = CompiledPattern::compile("/posts/[i:id]/[:slug]?", &MatchTypes::new()).unwrap();
    /// let params = pattern.match_path("/posts/12/hello").unwrap();
    /// assert_eq!(params.get("id"), Some("12"));
    /// assert_eq!(params.get("slug"), Some("hello"));
    ///
    /// let params = pattern.match_path("/posts/12").unwrap();
    /// assert_eq!(params.get("slug"), None);
    /// ```
    pub fn compile(pattern: &str, match_types: &MatchTypes) -> Result<Self> {
        let mut body = String::with_capacity(pattern.len() * 2);

        for segment in token::tokenize(pattern)? {
            match segment {
                Segment::Literal(text) => body.push_str(&regex::escape(text)),
                Segment::Placeholder(placeholder) => {
                    let fragment = match_types.get(placeholder.type_key).ok_or_else(|| {
                        RouterError::UnknownMatchType {
                            pattern: pattern.to_string(),
                            key: placeholder.type_key.to_string(),
                        }
                    })?;
                    push_placeholder(&mut body, &placeholder, fragment);
                }
            }
        }

        Self::build(pattern, &body)
    }

    /// Wraps a raw regex body (the part after `@`) without parsing
    /// placeholders.
    pub fn raw(pattern: &str, body: &str) -> Result<Self> {
        Self::build(pattern, &format!("(?:{body})"))
    }

    fn build(pattern: &str, body: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!("^{body}$"))
            .unicode(true)
            .case_insensitive(false)
            .build()
            .map_err(|e| RouterError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns the named captures that took part in the match. Positional
    /// captures are dropped.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        Some(
            self.regex
                .capture_names()
                .flatten()
                .filter_map(|name| caps.name(name).map(|m| (name, m.as_str())))
                .collect(),
        )
    }

    /// Returns the original pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the synthesized regex source.
    #[must_use]
    pub fn regex(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the names of all named captures, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }
}

fn push_placeholder(body: &mut String, placeholder: &Placeholder<'_>, fragment: &str) {
    let optional = if placeholder.optional { "?" } else { "" };

    body.push_str("(?:");
    body.push_str(&regex::escape(placeholder.prefix));
    body.push('(');
    if placeholder.is_named() {
        body.push_str("?P<");
        body.push_str(placeholder.name);
        body.push('>');
    }
    body.push_str(fragment);
    body.push(')');
    body.push_str(optional);
    body.push(')');
    body.push_str(optional);
}

//! HTTP method filters.

use std::fmt;

/// A set of HTTP methods a route answers to, written as a pipe-separated
/// list such as `GET|POST`.
///
/// Matching is an exact, case-insensitive comparison against each listed
/// verb. A `*` entry accepts every method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodFilter {
    source: String,
    methods: Vec<String>,
    any: bool,
}

impl MethodFilter {
    /// Parses a pipe-separated method list.
    pub fn new(filter: impl Into<String>) -> Self {
        let source = filter.into();
        let methods: Vec<String> = source
            .split('|')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_ascii_uppercase)
            .collect();
        let any = methods.iter().any(|m| m == "*");

        Self {
            source,
            methods,
            any,
        }
    }

    /// A filter accepting every method.
    #[must_use]
    pub fn any() -> Self {
        Self::new("*")
    }

    /// Returns whether `method` passes this filter.
    #[must_use]
    pub fn allows(&self, method: &str) -> bool {
        self.any || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method.trim()))
    }

    /// Returns the filter as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the individual verbs, upper-cased.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for MethodFilter {
    fn from(filter: &str) -> Self {
        Self::new(filter)
    }
}

impl From<String> for MethodFilter {
    fn from(filter: String) -> Self {
        Self::new(filter)
    }
}

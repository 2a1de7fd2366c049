//! Named regex fragments usable inside placeholders.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{Result, RouterError};

/// Built-in match types.
///
/// | key  | matches                      |
/// |------|------------------------------|
/// | `i`  | digits                       |
/// | `a`  | ASCII alphanumerics          |
/// | `h`  | hex digits                   |
/// | `*`  | anything, non-greedy         |
/// | `**` | anything, greedy             |
/// | (empty) | anything but `/` and `.` |
const BUILTIN: [(&str, &str); 6] = [
    ("i", "[0-9]+"),
    ("a", "[0-9A-Za-z]+"),
    ("h", "[0-9A-Fa-f]+"),
    ("*", ".+?"),
    ("**", ".+"),
    ("", "[^/.]+"),
];

/// Mapping from a short match-type key to the regex fragment it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTypes {
    types: HashMap<String, String>,
}

impl Default for MatchTypes {
    fn default() -> Self {
        Self {
            types: BUILTIN
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl MatchTypes {
    /// Creates a table holding only the built-in match types.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges caller-supplied match types into the table.
    ///
    /// Entries overwrite built-ins with the same key. Each fragment must be
    /// a valid regex on its own; nothing is merged if any fragment is not.
    pub fn merge<I, K, V>(&mut self, types: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut validated = Vec::new();
        for (key, fragment) in types {
            let key = key.into();
            let fragment = fragment.into();
            Regex::new(&fragment).map_err(|e| RouterError::InvalidMatchType {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            validated.push((key, fragment));
        }
        self.types.extend(validated);
        Ok(())
    }

    /// Looks up the fragment for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.types.get(key).map(String::as_str)
    }

    /// Returns the number of match types in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

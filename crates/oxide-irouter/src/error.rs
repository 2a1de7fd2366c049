//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
///
/// Every variant except [`RouterError::RouteNotFound`] is a configuration
/// error: it is raised while routes, match types or config files are being
/// registered, never while a request is being matched.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A route name was registered twice.
    #[error("can not redeclare route '{0}'")]
    DuplicateRouteName(String),

    /// Route name not found.
    #[error("route '{0}' does not exist")]
    RouteNotFound(String),

    /// Malformed placeholder syntax, or a pattern the regex engine rejects.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A placeholder references a match type that is not in the table.
    #[error("unknown match type '{key}' in route pattern '{pattern}'")]
    UnknownMatchType {
        /// The offending pattern.
        pattern: String,
        /// The unresolved match-type key.
        key: String,
    },

    /// A caller-supplied match-type fragment is not a valid regex.
    #[error("invalid match type '{key}': {reason}")]
    InvalidMatchType {
        /// Match-type key.
        key: String,
        /// Regex engine error.
        reason: String,
    },

    /// Reverse generation was requested for a raw-regex route.
    #[error("route '{0}' is a raw regex and can not be reversed")]
    NotReversible(String),

    /// Malformed route configuration.
    #[error("invalid router config: {0}")]
    Config(String),

    /// IO error while reading a route file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while decoding a route file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;

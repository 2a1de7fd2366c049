//! Route tables loaded from JSON.
//!
//! ```json
//! {
//!   "base_path": "/app",
//!   "match_types": { "slug": "[a-z0-9-]+" },
//!   "routes": [
//!     ["GET|POST", "/users/[i:id]", "users#show", "user_show"],
//!     ["GET", "/about", "pages#about"],
//!     { "method": "GET", "pattern": "/blog/[slug:slug]", "target": "blog#show" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, RouterError};
use crate::router::{Route, Router};

/// One route entry of a config file.
///
/// Accepts `[method, pattern, target, name]`, `[method, pattern, target]`
/// or an object with the same field names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RouteDef<T> {
    /// `[method, pattern, target, name]`; `name` may be `null`.
    Named(String, String, T, Option<String>),
    /// `[method, pattern, target]`.
    Unnamed(String, String, T),
    /// `{ "method": ..., "pattern": ..., "target": ..., "name": ... }`.
    Table {
        /// Method filter.
        method: String,
        /// Route pattern.
        pattern: String,
        /// Route target.
        target: T,
        /// Optional route name.
        #[serde(default)]
        name: Option<String>,
    },
}

impl<T> RouteDef<T> {
    fn method(&self) -> &str {
        match self {
            Self::Named(method, ..) | Self::Unnamed(method, ..) | Self::Table { method, .. } => method,
        }
    }
}

impl<T> From<RouteDef<T>> for Route<T> {
    fn from(def: RouteDef<T>) -> Self {
        match def {
            RouteDef::Named(method, pattern, target, name)
            | RouteDef::Table {
                method,
                pattern,
                target,
                name,
            } => Self {
                method: method.into(),
                pattern,
                target,
                name,
            },
            RouteDef::Unnamed(method, pattern, target) => Self::new(method, pattern, target),
        }
    }
}

/// Everything needed to build a [`Router`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig<T> {
    /// Prefix stripped from incoming URLs.
    #[serde(default)]
    pub base_path: String,
    /// Match types merged over the built-ins.
    #[serde(default)]
    pub match_types: BTreeMap<String, String>,
    /// Routes in priority order.
    #[serde(default = "Vec::new")]
    pub routes: Vec<RouteDef<T>>,
}

impl<T: DeserializeOwned> RouterConfig<T> {
    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading route file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl<T> RouterConfig<T> {
    /// Builds the router: match types first, then base path, then routes.
    pub fn into_router(self) -> Result<Router<T>> {
        if let Some(index) = self.routes.iter().position(|r| r.method().trim().is_empty()) {
            return Err(RouterError::Config(format!(
                "route #{index} has an empty method filter"
            )));
        }
        Router::with_config(
            self.routes.into_iter().map(Route::from),
            self.base_path,
            self.match_types,
        )
    }
}

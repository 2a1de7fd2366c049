//! Main router implementation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace, warn};

use crate::error::{Result, RouterError};
use crate::match_types::MatchTypes;
use crate::method::MethodFilter;
use crate::params::PathParams;
use crate::pattern::CompiledPattern;
use crate::token::{self, Segment};

/// Pattern that matches every path.
pub const CATCH_ALL: &str = "*";

/// Leading character marking a pattern as a raw regex body.
pub const RAW_REGEX_SIGIL: char = '@';

/// A single route definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<T> {
    /// Methods this route answers to.
    pub method: MethodFilter,
    /// Pattern, exactly as registered.
    pub pattern: String,
    /// Opaque value handed back on a match.
    pub target: T,
    /// Optional route name for reverse URL lookup.
    pub name: Option<String>,
}

impl<T> Route<T> {
    /// Creates a new unnamed route.
    pub fn new(method: impl Into<MethodFilter>, pattern: impl Into<String>, target: T) -> Self {
        Self {
            method: method.into(),
            pattern: pattern.into(),
            target,
            name: None,
        }
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, T> {
    /// Target of the matched route.
    pub target: &'a T,
    /// Named parameters captured from the path.
    pub params: PathParams,
    /// Name of the matched route, if it has one.
    pub name: Option<&'a str>,
}

/// An ordered route table.
///
/// Routes are tried in registration order and the first one whose method
/// filter and pattern both accept the request wins. Registration takes
/// `&mut self`; matching and generation take `&self` and may run from
/// several threads at once.
#[derive(Debug)]
pub struct Router<T> {
    /// Registered routes, in priority order.
    routes: Vec<Route<T>>,
    /// Named routes for reverse URL lookup, mapped to their raw pattern.
    named_routes: HashMap<String, String>,
    /// Prefix stripped from incoming URLs and prepended to generated ones.
    base_path: String,
    match_types: MatchTypes,
    /// Compiled patterns keyed by pattern string.
    compiled: RwLock<HashMap<String, Arc<CompiledPattern>>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a new empty router with the built-in match types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
            base_path: String::new(),
            match_types: MatchTypes::new(),
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a router in one call.
    ///
    /// Match types are merged before any route is registered, so routes may
    /// use them.
    pub fn with_config<R, M, K, V>(routes: R, base_path: impl Into<String>, match_types: M) -> Result<Self>
    where
        R: IntoIterator<Item = Route<T>>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut router = Self::new();
        router.add_match_types(match_types)?;
        router.set_base_path(base_path);
        router.add_routes(routes)?;
        Ok(router)
    }

    /// Returns all routes in priority order.
    #[must_use]
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// Returns the base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the match-type table.
    #[must_use]
    pub fn match_types(&self) -> &MatchTypes {
        &self.match_types
    }

    /// Sets the prefix ignored on incoming URLs, for apps living in a
    /// subdirectory.
    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.base_path = base_path.into();
        debug!(base_path = %self.base_path, "base path set");
    }

    /// Merges match types into the table.
    ///
    /// Every registered route is recompiled against the merged table first;
    /// if any of them fails, the router is left unchanged.
    pub fn add_match_types<M, K, V>(&mut self, match_types: M) -> Result<()>
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut merged = self.match_types.clone();
        merged.merge(match_types)?;

        let mut compiled = HashMap::new();
        for route in &self.routes {
            if let Some(pattern) = compile_route(&route.pattern, &merged)? {
                compiled.insert(route.pattern.clone(), Arc::new(pattern));
            }
        }

        debug!(count = merged.len(), "match types merged");
        self.match_types = merged;
        *self.compiled.get_mut().unwrap_or_else(PoisonError::into_inner) = compiled;
        Ok(())
    }

    /// Adds an unnamed route.
    pub fn add_route(&mut self, method: impl Into<MethodFilter>, pattern: impl Into<String>, target: T) -> Result<()> {
        self.push(Route::new(method, pattern, target))
    }

    /// Adds a named route.
    pub fn add_named_route(
        &mut self,
        name: impl Into<String>,
        method: impl Into<MethodFilter>,
        pattern: impl Into<String>,
        target: T,
    ) -> Result<()> {
        self.push(Route::new(method, pattern, target).name(name))
    }

    /// Adds routes in order, stopping at the first one that fails.
    pub fn add_routes(&mut self, routes: impl IntoIterator<Item = Route<T>>) -> Result<()> {
        routes.into_iter().try_for_each(|route| self.push(route))
    }

    /// Registers a route after validating its pattern and name.
    ///
    /// An empty name counts as no name.
    pub fn push(&mut self, mut route: Route<T>) -> Result<()> {
        if route.name.as_deref() == Some("") {
            route.name = None;
        }
        if let Some(name) = &route.name {
            if self.named_routes.contains_key(name) {
                return Err(RouterError::DuplicateRouteName(name.clone()));
            }
        }

        if let Some(pattern) = compile_route(&route.pattern, &self.match_types)? {
            self.compiled
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(route.pattern.clone(), Arc::new(pattern));
        }

        debug!(method = %route.method, pattern = %route.pattern, name = ?route.name, "route added");
        if let Some(name) = &route.name {
            self.named_routes.insert(name.clone(), route.pattern.clone());
        }
        self.routes.push(route);
        Ok(())
    }

    /// Matches a request against the route table.
    ///
    /// The base path and any query string are stripped from `url` first.
    /// Returns `None` when no route accepts the request, or when `url` lies
    /// outside the base path.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_irouter::Router;
    ///
    /// let mut router = Router::new();
    /// router.add_named_route("user", "GET|POST", "/users/[i:id]", "users#show").unwrap();
    ///
    /// let found = router.match_request("post", "/users/42?tab=info").unwrap();
    /// assert_eq!(*found.target, "users#show");
    /// assert_eq!(found.params.get("id"), Some("42"));
    /// assert_eq!(found.name, Some("user"));
    ///
    /// assert!(router.match_request("GET", "/users/abc").is_none());
    /// ```
    pub fn match_request(&self, method: &str, url: &str) -> Option<RouteMatch<'_, T>> {
        let Some(path) = self.request_path(url) else {
            debug!(url, base_path = %self.base_path, "url outside base path");
            return None;
        };

        for route in &self.routes {
            if let Some(params) = self.match_route(route, method, path) {
                debug!(method, path, pattern = %route.pattern, "route matched");
                return Some(RouteMatch {
                    target: &route.target,
                    params,
                    name: route.name.as_deref(),
                });
            }
        }

        debug!(method, path, "no route matched");
        None
    }

    /// Generates the URL of a named route.
    ///
    /// Placeholders with a supplied value are replaced by it. A missing
    /// optional placeholder is dropped along with its `/` or `.` prefix,
    /// except for the first placeholder of the pattern, which keeps its
    /// prefix so a route rooted at `/` still generates `/`. A missing
    /// required placeholder is dropped but keeps its prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_irouter::{PathParams, Router};
    ///
    /// let mut router = Router::new();
    /// router.add_named_route("user", "GET", "/users/[i:id]/[:action]?", ()).unwrap();
    ///
    /// let url = router.generate("user", &PathParams::from([("id", "5")])).unwrap();
    /// assert_eq!(url, "/users/5");
    /// ```
    pub fn generate(&self, name: &str, params: &PathParams) -> Result<String> {
        let pattern = self
            .named_routes
            .get(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;
        if pattern.starts_with(RAW_REGEX_SIGIL) {
            return Err(RouterError::NotReversible(name.to_string()));
        }

        let mut url = self.base_path.clone();
        let mut index = 0;

        for segment in token::tokenize(pattern)? {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = placeholder
                        .is_named()
                        .then(|| params.get(placeholder.name))
                        .flatten();
                    match value {
                        Some(value) => {
                            url.push_str(placeholder.prefix);
                            url.push_str(value);
                        }
                        None if placeholder.optional && index != 0 => {}
                        None => url.push_str(placeholder.prefix),
                    }
                    index += 1;
                }
            }
        }

        Ok(url)
    }

    fn request_path<'u>(&self, url: &'u str) -> Option<&'u str> {
        let path = url.strip_prefix(self.base_path.as_str())?;
        Some(path.split_once('?').map_or(path, |(path, _)| path))
    }

    fn match_route(&self, route: &Route<T>, method: &str, path: &str) -> Option<PathParams> {
        if !route.method.allows(method) {
            trace!(method, filter = %route.method, "method filtered out");
            return None;
        }

        if route.pattern == CATCH_ALL {
            return Some(PathParams::new());
        }

        if !route.pattern.starts_with(RAW_REGEX_SIGIL) {
            match token::static_prefix(&route.pattern) {
                None => return (path == route.pattern).then(PathParams::new),
                Some(prefix) if !path.starts_with(prefix) => {
                    trace!(path, prefix, "fast reject");
                    return None;
                }
                Some(_) => {}
            }
        }

        match self.compiled(&route.pattern) {
            Ok(compiled) => compiled.match_path(path),
            Err(e) => {
                warn!(pattern = %route.pattern, error = %e, "skipping route that failed to compile");
                None
            }
        }
    }

    fn compiled(&self, pattern: &str) -> Result<Arc<CompiledPattern>> {
        let cached = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
            .cloned();
        if let Some(compiled) = cached {
            trace!(pattern, "compiled pattern cache hit");
            return Ok(compiled);
        }

        // Registration and add_match_types fill the cache for every route
        // that needs a regex; this only covers an entry that is missing.
        trace!(pattern, "compiling pattern");
        let compiled = match pattern.strip_prefix(RAW_REGEX_SIGIL) {
            Some(body) => CompiledPattern::raw(pattern, body)?,
            None => CompiledPattern::compile(pattern, &self.match_types)?,
        };
        let compiled = Arc::new(compiled);
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(pattern.to_string())
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(compiled)
    }
}

/// Compiles a route pattern if it needs a regex at all.
///
/// The catch-all and placeholder-free patterns are matched without one, but
/// a placeholder-free pattern is still checked for stray brackets.
fn compile_route(pattern: &str, match_types: &MatchTypes) -> Result<Option<CompiledPattern>> {
    if pattern == CATCH_ALL {
        return Ok(None);
    }
    if let Some(body) = pattern.strip_prefix(RAW_REGEX_SIGIL) {
        return CompiledPattern::raw(pattern, body).map(Some);
    }
    token::tokenize(pattern)?;
    if token::static_prefix(pattern).is_none() {
        return Ok(None);
    }
    CompiledPattern::compile(pattern, match_types).map(Some)
}

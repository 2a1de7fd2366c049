//! # oxide-irouter
//!
//! An ordered request router with bracket placeholders and reverse routing.
//!
//! This crate provides:
//! - Route patterns with typed placeholders (`/users/[i:id]`)
//! - Optional segments (`/feed.[:format]?`) and raw regex routes (`@...`)
//! - Pipe-separated HTTP method filters (`GET|POST`)
//! - First-match-wins matching in declaration order
//! - Named routes for reverse URL generation
//! - JSON route files
//!
//! ## Quick Start
//!
//! ```
//! use oxide_irouter::{PathParams, Router};
//!
//! let mut router = Router::new();
//! router.add_route("GET", "/", "home#index").unwrap();
//! router.add_named_route("user", "GET|POST", "/users/[i:id]", "users#show").unwrap();
//!
//! let found = router.match_request("GET", "/users/42").unwrap();
//! assert_eq!(*found.target, "users#show");
//! assert_eq!(found.params.get("id"), Some("42"));
//!
//! let url = router.generate("user", &PathParams::from([("id", "7")])).unwrap();
//! assert_eq!(url, "/users/7");
//! ```
//!
//! ## Placeholders
//!
//! A placeholder is `[type:name]`, optionally preceded by `/` or `.` and
//! followed by `?`. The type picks a regex fragment from the match-type
//! table:
//!
//! | type | matches                  |
//! |------|--------------------------|
//! | `i`  | `[0-9]+`                 |
//! | `a`  | `[0-9A-Za-z]+`           |
//! | `h`  | `[0-9A-Fa-f]+`           |
//! | `*`  | `.+?`                    |
//! | `**` | `.+`                     |
//! | none | `[^/.]+`                 |
//!
//! Custom types are added with [`Router::add_match_types`]. Placeholders
//! without a name still have to match but do not show up in the params.
//!
//! ## Special patterns
//!
//! - `*` matches every path.
//! - `@<regex>` uses the rest of the pattern as a regex, anchored at both
//!   ends. Named groups become params.

mod config;
mod error;
mod match_types;
mod method;
mod params;
mod pattern;
mod router;
mod token;

pub use config::{RouteDef, RouterConfig};
pub use error::{Result, RouterError};
pub use match_types::MatchTypes;
pub use method::MethodFilter;
pub use params::PathParams;
pub use pattern::CompiledPattern;
pub use router::{CATCH_ALL, RAW_REGEX_SIGIL, Route, RouteMatch, Router};

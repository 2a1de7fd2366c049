#![allow(dead_code)]

use oxide_irouter::{PathParams, Route, Router};

/// A small blog-shaped route table used across the integration tests.
pub fn blog_router() -> Router<&'static str> {
    let mut router = Router::new();
    router
        .add_routes([
            Route::new("GET", "/", "home#index").name("home"),
            Route::new("GET", "/posts", "posts#index").name("posts"),
            Route::new("GET", "/posts/[i:id]", "posts#show").name("post"),
            Route::new("GET|POST", "/posts/[i:id]/[:action]?", "posts#action").name("post_action"),
            Route::new("GET", "/feed.[:format]?", "feed#show").name("feed"),
            Route::new("GET", "/archive/[i:year]/[i:month]", "archive#month").name("archive"),
            Route::new("GET", "/files/[**:path]", "files#show").name("file"),
            Route::new("DELETE", "/posts/[i:id]", "posts#destroy"),
        ])
        .unwrap_or_else(|e| panic!("blog routes should register: {e}"));
    router
}

pub fn params(pairs: &[(&str, &str)]) -> PathParams {
    pairs.iter().copied().collect()
}

pub fn matched<'a>(router: &'a Router<&'static str>, method: &str, url: &str) -> Option<&'a str> {
    router.match_request(method, url).map(|m| *m.target)
}

//! Matching behavior over a full route table.

mod common;
use common::*;

use oxide_irouter::{Router, RouterError};

#[test]
fn empty_table_never_matches() {
    let router: Router<()> = Router::new();
    for url in ["", "/", "/posts", "/a/b/c?x=1"] {
        assert!(router.match_request("GET", url).is_none());
    }
}

#[test]
fn first_match_wins() {
    let mut router = Router::new();
    router.add_route("GET", "/a", "T1").unwrap();
    router.add_route("GET", "/a", "T2").unwrap();
    assert_eq!(matched(&router, "GET", "/a"), Some("T1"));
}

#[test]
fn earlier_placeholder_route_shadows_later_literal() {
    let mut router = Router::new();
    router.add_route("GET", "/users/[:name]", "by_name").unwrap();
    router.add_route("GET", "/users/me", "me").unwrap();
    assert_eq!(matched(&router, "GET", "/users/me"), Some("by_name"));
}

#[test]
fn literal_route_is_exact() {
    let router = blog_router();
    assert_eq!(matched(&router, "GET", "/posts"), Some("posts#index"));
    assert_eq!(matched(&router, "GET", "/posts/"), None);
    assert_eq!(matched(&router, "GET", "/Posts"), None);
}

#[test]
fn typed_placeholder() {
    let router = blog_router();
    let found = router.match_request("GET", "/posts/42").unwrap();
    assert_eq!(*found.target, "posts#show");
    assert_eq!(found.params, params(&[("id", "42")]));
    assert_eq!(found.name, Some("post"));

    assert_eq!(matched(&router, "GET", "/posts/abc"), None);
}

#[test]
fn optional_segment() {
    let router = blog_router();

    let found = router.match_request("POST", "/posts/42").unwrap();
    assert_eq!(*found.target, "posts#action");
    assert_eq!(found.params, params(&[("id", "42")]));

    let found = router.match_request("GET", "/posts/42/edit").unwrap();
    assert_eq!(found.params, params(&[("id", "42"), ("action", "edit")]));
}

#[test]
fn optional_format_suffix() {
    let router = blog_router();

    let found = router.match_request("GET", "/feed").unwrap();
    assert!(found.params.get("format").is_none());

    let found = router.match_request("GET", "/feed.json").unwrap();
    assert_eq!(found.params.get("format"), Some("json"));
}

#[test]
fn separator_inside_brackets_is_a_match_type_key() {
    let mut router = Router::new();
    let err = router.add_route("GET", "/feed[.:format]", "feed").unwrap_err();
    assert!(matches!(err, RouterError::UnknownMatchType { ref key, .. } if key == "."));
    assert!(router.routes().is_empty());
}

#[test]
fn greedy_wildcard_spans_slashes() {
    let router = blog_router();
    let found = router.match_request("GET", "/files/2024/img/cat.png").unwrap();
    assert_eq!(found.params.get("path"), Some("2024/img/cat.png"));
}

#[test]
fn method_filter_is_case_insensitive_and_exact() {
    let router = blog_router();
    assert_eq!(matched(&router, "post", "/posts/1/edit"), Some("posts#action"));
    assert_eq!(matched(&router, "delete", "/posts/1"), Some("posts#destroy"));
    assert_eq!(matched(&router, "PUT", "/posts/1"), None);
    assert_eq!(matched(&router, "GE", "/posts"), None);
}

#[test]
fn catch_all_after_specific_routes() {
    let mut router = blog_router();
    router.add_route("GET|POST", "*", "errors#not_found").unwrap();

    assert_eq!(matched(&router, "GET", "/posts"), Some("posts#index"));
    assert_eq!(matched(&router, "GET", "/no/such/page"), Some("errors#not_found"));
    assert_eq!(matched(&router, "POST", ""), Some("errors#not_found"));
    assert_eq!(matched(&router, "PATCH", "/no/such/page"), None);
}

#[test]
fn query_string_and_base_path() {
    let mut router = blog_router();
    router.set_base_path("/blog");

    assert_eq!(matched(&router, "GET", "/blog/posts?page=2"), Some("posts#index"));
    assert_eq!(matched(&router, "GET", "/blog/"), Some("home#index"));
    assert_eq!(matched(&router, "GET", "/posts"), None);
    assert_eq!(matched(&router, "GET", ""), None);
}

#[test]
fn concurrent_matching() {
    let router = blog_router();
    std::thread::scope(|scope| {
        for id in 0..8 {
            let router = &router;
            scope.spawn(move || {
                let url = format!("/archive/20{id:02}/0{}", id + 1);
                let found = router.match_request("GET", &url).unwrap();
                assert_eq!(found.params.get("month"), Some(format!("0{}", id + 1).as_str()));
            });
        }
    });
}

#[test]
fn configuration_errors_surface_at_registration() {
    let mut router = Router::new();
    router.add_named_route("a", "GET", "/a", 1).unwrap();

    assert!(matches!(
        router.add_named_route("a", "GET", "/b", 2),
        Err(RouterError::DuplicateRouteName(_))
    ));
    assert!(matches!(
        router.add_route("GET", "/c/[i:id", 3),
        Err(RouterError::InvalidPattern { .. })
    ));
    assert!(matches!(
        router.add_route("GET", "/c/[uuid:id]", 3),
        Err(RouterError::UnknownMatchType { .. })
    ));
    assert_eq!(router.routes().len(), 1);
}

//! Reverse URL generation.

mod common;
use common::*;

use oxide_irouter::{PathParams, Router, RouterError};

#[test]
fn generate_with_params() {
    let router = blog_router();
    assert_eq!(router.generate("post", &params(&[("id", "5")])).unwrap(), "/posts/5");
    assert_eq!(
        router
            .generate("archive", &params(&[("year", "2024"), ("month", "06")]))
            .unwrap(),
        "/archive/2024/06"
    );
}

#[test]
fn generate_without_params_keeps_literal_structure() {
    let router = blog_router();
    let empty = PathParams::new();

    assert_eq!(router.generate("home", &empty).unwrap(), "/");
    assert_eq!(router.generate("posts", &empty).unwrap(), "/posts");
    assert_eq!(router.generate("post", &empty).unwrap(), "/posts/");
    assert_eq!(router.generate("post_action", &empty).unwrap(), "/posts/");
    assert_eq!(router.generate("archive", &empty).unwrap(), "/archive//");
    assert_eq!(router.generate("feed", &empty).unwrap(), "/feed.");
}

#[test]
fn optional_segment_dropped_with_separator() {
    let router = blog_router();
    assert_eq!(
        router.generate("post_action", &params(&[("id", "3")])).unwrap(),
        "/posts/3"
    );
    assert_eq!(
        router
            .generate("post_action", &params(&[("id", "3"), ("action", "edit")]))
            .unwrap(),
        "/posts/3/edit"
    );
}

#[test]
fn extra_params_are_ignored() {
    let router = blog_router();
    assert_eq!(
        router.generate("post", &params(&[("id", "1"), ("utm", "x")])).unwrap(),
        "/posts/1"
    );
}

#[test]
fn unknown_route_name() {
    let router = blog_router();
    assert!(matches!(
        router.generate("missing", &PathParams::new()),
        Err(RouterError::RouteNotFound(_))
    ));
}

#[test]
fn round_trip_recovers_params() {
    let router = blog_router();
    let cases = [
        ("post", params(&[("id", "99")])),
        ("archive", params(&[("year", "1999"), ("month", "12")])),
        ("file", params(&[("path", "a/b/c.txt")])),
        ("feed", params(&[("format", "rss")])),
        ("post_action", params(&[("id", "4"), ("action", "publish")])),
    ];

    for (name, expected) in cases {
        let url = router.generate(name, &expected).unwrap();
        let found = router
            .match_request("GET", &url)
            .unwrap_or_else(|| panic!("generated url {url} should match"));
        assert_eq!(found.name, Some(name));
        assert_eq!(found.params, expected);
    }
}

#[test]
fn round_trip_under_base_path() {
    let mut router = Router::new();
    router.set_base_path("/shop");
    router
        .add_named_route("item", "GET", "/items/[a:sku]/[i:qty]", "items#show")
        .unwrap();

    let expected = params(&[("sku", "AB12"), ("qty", "3")]);
    let url = router.generate("item", &expected).unwrap();
    assert_eq!(url, "/shop/items/AB12/3");
    assert_eq!(router.match_request("GET", &url).unwrap().params, expected);
}

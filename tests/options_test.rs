//! Tests for RequestOptions cookie initialization.

use chromenet_cookies::base::neterror::NetError;
use chromenet_cookies::cookies::CanonicalCookie;
use chromenet_cookies::urlrequest::{CookieField, RequestOptions};
use http::Method;
use std::time::Duration;

#[test]
fn test_options_builder() {
    let opts = RequestOptions::new("https://example.com/path")
        .unwrap()
        .method(Method::POST)
        .timeout(Duration::from_secs(30));

    assert_eq!(opts.url.host_str(), Some("example.com"));
    assert_eq!(opts.method, Method::POST);
    assert_eq!(opts.timeout, Some(Duration::from_secs(30)));
    assert!(opts.cookies.is_unset());
}

#[test]
fn test_absent_cookies_hook_is_noop() {
    let mut opts = RequestOptions::new("https://example.com").unwrap();
    assert!(opts.init_cookies().is_ok());
    assert!(opts.prepare().is_ok());
    assert_eq!(opts.cookies, CookieField::Unset);
    assert!(opts.resolved_cookies().is_none());
    assert!(opts.cookie_header().is_none());
}

#[test]
fn test_prepare_normalizes_request_cookies() {
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies("sid=abc; theme=dark");
    opts.prepare().unwrap();

    let cookies = opts.resolved_cookies().unwrap();
    assert_eq!(cookies.len(), 2);
    assert_eq!(cookies.get("theme").unwrap().value, "dark");
    assert_eq!(opts.cookie_header().unwrap(), "sid=abc; theme=dark");
}

#[test]
fn test_prepare_uses_request_grammar() {
    // The hook always uses the request direction: attributes become cookies.
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies("sid=abc; Secure");
    opts.prepare().unwrap();

    let cookies = opts.resolved_cookies().unwrap();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| !c.secure));
}

#[test]
fn test_prepare_keeps_existing_list() {
    let cookie = CanonicalCookie::new("a", "1").with_domain("example.com");
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies(vec![cookie.clone()]);
    opts.prepare().unwrap();

    assert_eq!(
        opts.resolved_cookies().unwrap().as_slice(),
        std::slice::from_ref(&cookie)
    );
}

#[test]
fn test_prepare_propagates_errors() {
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies(serde_json::json!([1, 2, 3]));

    let err = opts.prepare().unwrap_err();
    assert!(matches!(err, NetError::CookieUnsupportedShape { .. }));
    assert!(opts.cookies.is_unset());

    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies(b"{broken".to_vec());
    assert!(matches!(
        opts.prepare(),
        Err(NetError::CookieDecodeFailed { .. })
    ));
}

#[test]
fn test_empty_cookie_list_has_no_header() {
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies(" ; ");
    opts.prepare().unwrap();

    assert!(opts.resolved_cookies().unwrap().is_empty());
    assert!(opts.cookie_header().is_none());
    assert!(matches!(opts.cookies, CookieField::Resolved(_)));
}

#[test]
fn test_cookies_replaced_after_prepare() {
    let mut opts = RequestOptions::new("https://example.com")
        .unwrap()
        .cookies("old=1");
    opts.prepare().unwrap();
    assert_eq!(opts.cookie_header().unwrap(), "old=1");

    // A new setting replaces the resolved list and waits for the next prepare.
    let mut opts = opts.cookies("a=1; b=2");
    assert!(opts.cookies.is_pending());
    assert!(opts.cookie_header().is_none());

    opts.prepare().unwrap();
    let cookies = opts.resolved_cookies().unwrap();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.get("old").is_none());
    assert_eq!(opts.cookie_header().unwrap(), "a=1; b=2");
}

#[test]
fn test_raw_field_assignment_is_resolved() {
    let mut opts = RequestOptions::new("https://example.com").unwrap();
    opts.prepare().unwrap();

    opts.cookies = CookieField::Raw("sid=abc".into());
    opts.prepare().unwrap();
    assert_eq!(
        opts.resolved_cookies().unwrap().as_slice(),
        &[CanonicalCookie::new("sid", "abc")]
    );
}

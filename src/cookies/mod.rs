//! Cookie parsing and normalization.
//!
//! This module turns cookie input of many shapes into one ordered
//! [`CookieList`](cookielist::CookieList):
//!
//! - **Request headers**: `Cookie: a=1; b=2` ([`header::parse_cookie_lines`])
//! - **Response headers**: `Set-Cookie: sid=abc; Path=/; Secure` ([`header::parse_set_cookie_lines`])
//! - **Structured input**: maps and JSON objects ([`structured`])
//! - **Anything else**: the [`CookieInput`](input::CookieInput) union, resolved by
//!   [`normalize::read_cookies`] / [`normalize::read_set_cookies`]
//!
//! # Architecture
//!
//! | Chromium (C++) | chromenet (Rust) | Responsibility |
//! |----------------|------------------|----------------|
//! | `net::CanonicalCookie` | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | Single cookie representation |
//! | `net::CookieList` | [`CookieList`](cookielist::CookieList) | Ordered cookies, duplicates kept |
//! | `cookie_util::ParseRequestCookieLine` | [`header::parse_cookie_line`] | `Cookie` grammar |
//! | `net::ParsedCookie` | [`header::parse_set_cookie_line`] | `Set-Cookie` grammar |
//!
//! Unlike Chromium's `ParsedCookie`, only `Domain`, `Path`, `Secure` and `HttpOnly`
//! are read from `Set-Cookie`; other attributes are ignored.
//!
//! # Example
//!
//! ```rust
//! use chromenet_cookies::cookies::normalize::read_cookies;
//! use std::collections::HashMap;
//!
//! let mut map = HashMap::new();
//! map.insert("session".to_string(), vec!["a".to_string(), "b".to_string()]);
//!
//! let cookies = read_cookies(map)?;
//! assert_eq!(cookies.to_header_value(), "session=a; session=b");
//! # Ok::<(), chromenet_cookies::base::neterror::NetError>(())
//! ```

pub mod canonicalcookie;
pub mod cookielist;
pub mod header;
pub mod input;
pub mod normalize;
pub mod structured;

pub use canonicalcookie::CanonicalCookie;
pub use cookielist::CookieList;
pub use input::CookieInput;
pub use normalize::{read_cookies, read_set_cookies, Direction};

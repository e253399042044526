//! Cookie normalization entry points.
//!
//! [`read_cookies`] treats text as request `Cookie` lines, [`read_set_cookies`] as
//! response `Set-Cookie` lines. Both accept every [`CookieInput`] shape:
//!
//! | Shape | Handling |
//! |-------|----------|
//! | `Cookie`, `List` | passed through unchanged |
//! | `Text`, `Lines` | header grammar of the direction |
//! | `Headers` | `Cookie` / `Set-Cookie` values, then header grammar |
//! | `Map`, `MultiMap`, `Json` | [`structured`](crate::cookies::structured) |
//! | `Bytes` | JSON decode, then `structured` |
//!
//! ```
//! use chromenet_cookies::cookies::normalize::{read_cookies, read_set_cookies};
//!
//! let cookies = read_cookies("a=1; b=2")?;
//! assert_eq!(cookies.to_header_value(), "a=1; b=2");
//!
//! let cookies = read_set_cookies("sid=abc; Path=/; HttpOnly")?;
//! assert!(cookies.get("sid").unwrap().http_only);
//! # Ok::<(), chromenet_cookies::base::neterror::NetError>(())
//! ```

use crate::base::neterror::NetError;
use crate::cookies::cookielist::CookieList;
use crate::cookies::header;
use crate::cookies::input::CookieInput;
use crate::cookies::structured;
use http::header::{HeaderName, COOKIE, SET_COOKIE};
use http::HeaderMap;
use std::borrow::Cow;

/// Which header grammar text input is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `Cookie` header sent by a client.
    Request,
    /// `Set-Cookie` header sent by a server.
    Response,
}

impl Direction {
    pub fn header_name(self) -> HeaderName {
        match self {
            Direction::Request => COOKIE,
            Direction::Response => SET_COOKIE,
        }
    }

    fn parse_lines<I, S>(self, lines: I) -> CookieList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Direction::Request => header::parse_cookie_lines(lines),
            Direction::Response => header::parse_set_cookie_lines(lines),
        }
    }
}

/// Normalize request-direction cookie input.
pub fn read_cookies(input: impl Into<CookieInput>) -> Result<CookieList, NetError> {
    normalize(input.into(), Direction::Request)
}

/// Normalize response-direction cookie input.
pub fn read_set_cookies(input: impl Into<CookieInput>) -> Result<CookieList, NetError> {
    normalize(input.into(), Direction::Response)
}

/// Resolve any [`CookieInput`] into a [`CookieList`].
///
/// Only JSON-shaped input can fail: `CookieDecodeFailed` when bytes are not JSON,
/// `CookieUnsupportedShape` when the top level is not an object.
pub fn normalize(input: CookieInput, direction: Direction) -> Result<CookieList, NetError> {
    let shape = input.shape();
    tracing::trace!(shape, ?direction, "normalizing cookie input");

    let result = match input {
        CookieInput::Cookie(cookie) => Ok(CookieList::from(vec![cookie])),
        CookieInput::List(list) => Ok(list),
        CookieInput::Text(line) => Ok(direction.parse_lines([line])),
        CookieInput::Lines(lines) => Ok(direction.parse_lines(lines)),
        CookieInput::Headers(headers) => {
            Ok(direction.parse_lines(header_values(&headers, direction)))
        }
        CookieInput::Map(map) => Ok(structured::cookies_from_map(map)),
        CookieInput::MultiMap(map) => Ok(structured::cookies_from_multimap(map)),
        CookieInput::Json(value) => structured::cookies_from_json(&value),
        CookieInput::Bytes(bytes) => structured::cookies_from_json_slice(&bytes),
    };

    match &result {
        Ok(cookies) => tracing::debug!(shape, count = cookies.len(), "cookie input normalized"),
        Err(e) => tracing::debug!(shape, error = %e, "cookie input rejected"),
    }

    result
}

/// Values of the direction's header, in insertion order.
/// Non-UTF-8 bytes are replaced rather than dropping the whole value.
fn header_values(headers: &HeaderMap, direction: Direction) -> Vec<Cow<'_, str>> {
    headers
        .get_all(direction.header_name())
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect()
}

//! The closed set of shapes cookie input can arrive in.

use crate::base::context::JsonResultExt;
use crate::base::neterror::NetError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::cookielist::CookieList;
use bytes::Bytes;
use http::HeaderMap;
use serde::Serialize;
use std::collections::HashMap;

/// Cookie input before normalization.
///
/// Build one with `From`/`Into` and hand it to
/// [`read_cookies`](crate::cookies::normalize::read_cookies) or
/// [`read_set_cookies`](crate::cookies::normalize::read_set_cookies).
#[derive(Debug, Clone, PartialEq)]
pub enum CookieInput {
    /// A single cookie, passed through.
    Cookie(CanonicalCookie),
    /// An already normalized list, passed through.
    List(CookieList),
    /// One header line.
    Text(String),
    /// Header map; the `Cookie` or `Set-Cookie` values are read.
    Headers(HeaderMap),
    /// Several header lines.
    Lines(Vec<String>),
    /// `name -> value`.
    Map(HashMap<String, String>),
    /// `name -> [value, ...]`.
    MultiMap(HashMap<String, Vec<String>>),
    /// Decoded JSON; must be an object.
    Json(serde_json::Value),
    /// Raw JSON text to decode.
    Bytes(Bytes),
}

impl CookieInput {
    /// Convert any serializable value into the `Json` shape.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, NetError> {
        let value = serde_json::to_value(value).decode_context("serialize")?;
        Ok(CookieInput::Json(value))
    }

    pub fn shape(&self) -> &'static str {
        match self {
            CookieInput::Cookie(_) => "cookie",
            CookieInput::List(_) => "cookie list",
            CookieInput::Text(_) => "text",
            CookieInput::Headers(_) => "headers",
            CookieInput::Lines(_) => "lines",
            CookieInput::Map(_) => "map",
            CookieInput::MultiMap(_) => "multimap",
            CookieInput::Json(_) => "json",
            CookieInput::Bytes(_) => "bytes",
        }
    }
}

impl From<CanonicalCookie> for CookieInput {
    fn from(cookie: CanonicalCookie) -> Self {
        CookieInput::Cookie(cookie)
    }
}

impl From<&CanonicalCookie> for CookieInput {
    fn from(cookie: &CanonicalCookie) -> Self {
        CookieInput::Cookie(cookie.clone())
    }
}

impl<'c> From<cookie::Cookie<'c>> for CookieInput {
    fn from(cookie: cookie::Cookie<'c>) -> Self {
        CookieInput::Cookie(cookie.into())
    }
}

impl From<CookieList> for CookieInput {
    fn from(list: CookieList) -> Self {
        CookieInput::List(list)
    }
}

impl From<Vec<CanonicalCookie>> for CookieInput {
    fn from(cookies: Vec<CanonicalCookie>) -> Self {
        CookieInput::List(cookies.into())
    }
}

impl From<String> for CookieInput {
    fn from(text: String) -> Self {
        CookieInput::Text(text)
    }
}

impl From<&str> for CookieInput {
    fn from(text: &str) -> Self {
        CookieInput::Text(text.to_string())
    }
}

impl From<HeaderMap> for CookieInput {
    fn from(headers: HeaderMap) -> Self {
        CookieInput::Headers(headers)
    }
}

impl From<Vec<String>> for CookieInput {
    fn from(lines: Vec<String>) -> Self {
        CookieInput::Lines(lines)
    }
}

impl From<Vec<&str>> for CookieInput {
    fn from(lines: Vec<&str>) -> Self {
        CookieInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<HashMap<String, String>> for CookieInput {
    fn from(map: HashMap<String, String>) -> Self {
        CookieInput::Map(map)
    }
}

impl From<HashMap<String, Vec<String>>> for CookieInput {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        CookieInput::MultiMap(map)
    }
}

impl From<serde_json::Value> for CookieInput {
    fn from(value: serde_json::Value) -> Self {
        CookieInput::Json(value)
    }
}

impl From<Bytes> for CookieInput {
    fn from(bytes: Bytes) -> Self {
        CookieInput::Bytes(bytes)
    }
}

impl From<Vec<u8>> for CookieInput {
    fn from(bytes: Vec<u8>) -> Self {
        CookieInput::Bytes(bytes.into())
    }
}

impl From<&[u8]> for CookieInput {
    fn from(bytes: &[u8]) -> Self {
        CookieInput::Bytes(Bytes::copy_from_slice(bytes))
    }
}

//! Cookies from key/value associations.
//!
//! Covers native maps (`name -> value`, `name -> [values]`) and JSON objects,
//! including raw JSON text that must be decoded first. A JSON object preserves
//! document order; native `HashMap` iteration order is unspecified.

use crate::base::context::JsonResultExt;
use crate::base::neterror::NetError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::cookielist::CookieList;
use serde_json::Value;

/// One cookie per `(name, value)` entry.
pub fn cookies_from_map<I, K, V>(entries: I) -> CookieList
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| CanonicalCookie::new(name, value))
        .collect()
}

/// One cookie per value, values of a name kept in list order.
pub fn cookies_from_multimap<I, K, L, V>(entries: I) -> CookieList
where
    I: IntoIterator<Item = (K, L)>,
    K: Into<String>,
    L: IntoIterator<Item = V>,
    V: Into<String>,
{
    let mut cookies = CookieList::new();
    for (name, values) in entries {
        let name = name.into();
        if name.is_empty() {
            continue;
        }
        cookies.extend(
            values
                .into_iter()
                .map(|value| CanonicalCookie::new(name.clone(), value)),
        );
    }
    cookies
}

/// Cookies from a decoded JSON value. The top level must be an object.
///
/// An array member yields one cookie per element; any other member yields one cookie.
pub fn cookies_from_json(value: &Value) -> Result<CookieList, NetError> {
    let Value::Object(object) = value else {
        return Err(NetError::unsupported_shape(json_kind(value)));
    };

    let mut cookies = CookieList::with_capacity(object.len());
    for (name, member) in object {
        if name.is_empty() {
            continue;
        }
        match member {
            Value::Array(items) => cookies.extend(
                items
                    .iter()
                    .map(|item| CanonicalCookie::new(name.as_str(), json_to_string(item))),
            ),
            other => cookies.push(CanonicalCookie::new(name.as_str(), json_to_string(other))),
        }
    }
    Ok(cookies)
}

/// Decode JSON text, then read cookies from the resulting object.
/// Nothing is produced when decoding fails.
pub fn cookies_from_json_slice(bytes: &[u8]) -> Result<CookieList, NetError> {
    let value: Value = serde_json::from_slice(bytes).decode_context("bytes")?;
    cookies_from_json(&value)
}

/// String form of a JSON value used as a cookie value.
///
/// Strings are unquoted, `null` is empty, everything else is compact JSON.
/// Numbers keep the digits they were written with.
pub fn json_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "json null",
        Value::Bool(_) => "json bool",
        Value::Number(_) => "json number",
        Value::String(_) => "json string",
        Value::Array(_) => "json array",
        Value::Object(_) => "json object",
    }
}

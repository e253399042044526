//! `Cookie` and `Set-Cookie` header line parsing.
//!
//! The two directions use different grammars:
//!
//! - Request (`Cookie: a=1; b=2`): every `;`-separated segment is its own cookie.
//!   A segment without `=` becomes a cookie with an empty value.
//! - Response (`Set-Cookie: sid=abc; Path=/; Secure`): one cookie per line, the first
//!   segment is `name=value` and the rest are attributes. A line whose first segment has
//!   no `=` is dropped.
//!
//! Neither parser fails. Malformed input yields fewer cookies, never an error.
//! Similar to Chromium's `cookie_util::ParseRequestCookieLine` and `ParsedCookie`.

use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::cookielist::CookieList;

/// Parse one or more request `Cookie` header lines.
pub fn parse_cookie_lines<I, S>(lines: I) -> CookieList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cookies = CookieList::new();
    for line in lines {
        append_cookie_line(&mut cookies, line.as_ref());
    }
    cookies
}

/// Parse a single request `Cookie` header line.
pub fn parse_cookie_line(line: &str) -> CookieList {
    let mut cookies = CookieList::new();
    append_cookie_line(&mut cookies, line);
    cookies
}

fn append_cookie_line(cookies: &mut CookieList, line: &str) {
    for segment in line.trim().split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        // No '=' means the whole segment is the name.
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        let name = name.trim();
        if name.is_empty() {
            tracing::trace!(segment = %segment, "skipping cookie segment with empty name");
            continue;
        }

        cookies.push(CanonicalCookie::new(name, value.trim()));
    }
}

/// Parse one or more response `Set-Cookie` header lines, one cookie per line.
pub fn parse_set_cookie_lines<I, S>(lines: I) -> CookieList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_set_cookie_line(line.as_ref()))
        .collect()
}

/// Parse a single `Set-Cookie` header line.
///
/// Returns `None` when the leading `name=value` segment has no `=` or an empty name.
/// Only `Domain`, `Path`, `Secure` and `HttpOnly` are understood; attribute names
/// are case-insensitive and anything else is ignored.
pub fn parse_set_cookie_line(line: &str) -> Option<CanonicalCookie> {
    let (identity, attrs) = line.split_once(';').unwrap_or((line, ""));
    let identity = identity.trim();

    let Some((name, value)) = identity.split_once('=') else {
        tracing::trace!(line = %line, "dropping Set-Cookie line without name=value");
        return None;
    };

    let name = name.trim();
    if name.is_empty() {
        tracing::trace!(line = %line, "dropping Set-Cookie line with empty name");
        return None;
    }

    let mut cookie = CanonicalCookie::new(name, value.trim());

    for attr in attrs.split(';') {
        let attr = attr.trim();
        if attr.is_empty() {
            continue;
        }

        let (key, value) = match attr.split_once('=') {
            Some((key, value)) => (key, Some(value.trim())),
            None => (attr, None),
        };

        match key.trim().to_ascii_lowercase().as_str() {
            "domain" => {
                if let Some(domain) = value {
                    cookie.domain = domain.to_string();
                }
            }
            "path" => {
                if let Some(path) = value {
                    cookie.path = path.to_string();
                }
            }
            "secure" => cookie.secure = true,
            "httponly" => cookie.http_only = true,
            _ => {}
        }
    }

    Some(cookie)
}

//! Per-request configuration.
//!
//! Cookies may be supplied in any [`CookieInput`] shape. They are normalized by
//! [`RequestOptions::prepare`] before the options are used to issue a request.

use crate::base::neterror::NetError;
use crate::cookies::cookielist::CookieList;
use crate::cookies::input::CookieInput;
use crate::cookies::normalize::read_cookies;
use http::{HeaderMap, HeaderValue, Method};
use std::time::Duration;
use url::Url;

/// State of the cookie setting on [`RequestOptions`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CookieField {
    /// No cookies configured.
    #[default]
    Unset,
    /// Cookies as supplied, not yet normalized.
    Raw(CookieInput),
    /// Normalized request cookies.
    Resolved(CookieList),
}

impl CookieField {
    pub fn is_unset(&self) -> bool {
        matches!(self, CookieField::Unset)
    }

    /// True while raw input is waiting to be normalized.
    pub fn is_pending(&self) -> bool {
        matches!(self, CookieField::Raw(_))
    }

    pub fn resolved(&self) -> Option<&CookieList> {
        match self {
            CookieField::Resolved(list) => Some(list),
            _ => None,
        }
    }
}

/// Configuration options for a single request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Target URL.
    pub url: Url,

    /// HTTP method (default: GET).
    pub method: Method,

    /// Extra request headers.
    pub headers: HeaderMap,

    /// Cookies to send.
    pub cookies: CookieField,

    /// Request timeout.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(url: &str) -> Result<Self, NetError> {
        let url = Url::parse(url).map_err(|_| NetError::InvalidUrl)?;
        Ok(Self {
            url,
            method: Method::GET,
            headers: HeaderMap::new(),
            cookies: CookieField::Unset,
            timeout: None,
        })
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header. Invalid values are ignored.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: http::header::IntoHeaderName,
        V: TryInto<HeaderValue>,
    {
        if let Ok(val) = value.try_into() {
            self.headers.append(key, val);
        }
        self
    }

    /// Set cookies in any supported shape, replacing any earlier setting.
    pub fn cookies(mut self, cookies: impl Into<CookieInput>) -> Self {
        self.cookies = CookieField::Raw(cookies.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace raw cookie input with its normalized form.
    ///
    /// A no-op when cookies are unset or already resolved. On failure the field is
    /// left unset and the error is returned unchanged.
    pub fn init_cookies(&mut self) -> Result<(), NetError> {
        match std::mem::take(&mut self.cookies) {
            CookieField::Raw(input) => {
                let cookies = read_cookies(input)?;
                tracing::debug!(count = cookies.len(), "request cookies initialized");
                self.cookies = CookieField::Resolved(cookies);
            }
            other => self.cookies = other,
        }
        Ok(())
    }

    /// Prepare the options for use. Already resolved settings are left as they are.
    pub fn prepare(&mut self) -> Result<(), NetError> {
        self.init_cookies()
    }

    /// The normalized cookies, once [`prepare`](Self::prepare) has run.
    pub fn resolved_cookies(&self) -> Option<&CookieList> {
        self.cookies.resolved()
    }

    /// `Cookie` header value for the resolved cookies.
    pub fn cookie_header(&self) -> Option<HeaderValue> {
        let cookies = self.resolved_cookies()?;
        if cookies.is_empty() {
            return None;
        }
        HeaderValue::from_str(&cookies.to_header_value()).ok()
    }
}

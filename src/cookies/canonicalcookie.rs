use std::fmt;

/// Represents a cookie.
/// Modeled after Chromium's `net::CanonicalCookie`, reduced to the fields the
/// `Cookie` and `Set-Cookie` grammars here understand.
///
/// An empty `domain` or `path` means the attribute was not set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
}

impl CanonicalCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// `name=value`, as sent in a request `Cookie` header.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// Serialize as a `Set-Cookie` header value.
    /// Unset domain/path and false flags are omitted.
    pub fn to_set_cookie_string(&self) -> String {
        let mut line = self.pair();
        if !self.domain.is_empty() {
            line.push_str("; Domain=");
            line.push_str(&self.domain);
        }
        if !self.path.is_empty() {
            line.push_str("; Path=");
            line.push_str(&self.path);
        }
        if self.secure {
            line.push_str("; Secure");
        }
        if self.http_only {
            line.push_str("; HttpOnly");
        }
        line
    }
}

impl fmt::Display for CanonicalCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_set_cookie_string())
    }
}

impl<'c> From<&cookie::Cookie<'c>> for CanonicalCookie {
    fn from(c: &cookie::Cookie<'c>) -> Self {
        Self {
            name: c.name().to_string(),
            value: c.value().to_string(),
            domain: c.domain().unwrap_or_default().to_string(),
            path: c.path().unwrap_or_default().to_string(),
            secure: c.secure().unwrap_or(false),
            http_only: c.http_only().unwrap_or(false),
        }
    }
}

impl<'c> From<cookie::Cookie<'c>> for CanonicalCookie {
    fn from(c: cookie::Cookie<'c>) -> Self {
        Self::from(&c)
    }
}

impl From<&CanonicalCookie> for cookie::Cookie<'static> {
    fn from(c: &CanonicalCookie) -> Self {
        let mut builder = cookie::Cookie::build((c.name.clone(), c.value.clone()));
        if !c.domain.is_empty() {
            builder = builder.domain(c.domain.clone());
        }
        if !c.path.is_empty() {
            builder = builder.path(c.path.clone());
        }
        if c.secure {
            builder = builder.secure(true);
        }
        if c.http_only {
            builder = builder.http_only(true);
        }
        builder.build()
    }
}

impl From<CanonicalCookie> for cookie::Cookie<'static> {
    fn from(c: CanonicalCookie) -> Self {
        Self::from(&c)
    }
}

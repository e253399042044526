use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    // URL / request configuration errors
    #[error("Invalid URL")]
    InvalidUrl,

    // Cookie normalization errors
    #[error("Unsupported cookie input shape: {shape}")]
    CookieUnsupportedShape { shape: &'static str },
    #[error("Cookie input could not be decoded: {message}")]
    CookieDecodeFailed { message: String },
}

impl NetError {
    /// Cookie input was decoded, but its top level is not a key/value association.
    pub fn unsupported_shape(shape: &'static str) -> Self {
        NetError::CookieUnsupportedShape { shape }
    }

    /// Cookie input could not be decoded as structured data.
    pub fn cookie_decode_failed(shape: &str, reason: impl std::fmt::Display) -> Self {
        NetError::CookieDecodeFailed {
            message: format!("{}: {}", shape, reason),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::InvalidUrl => -300,
            // Custom codes start at -10000 to stay clear of Chromium's ranges
            NetError::CookieUnsupportedShape { .. } => -10001,
            NetError::CookieDecodeFailed { .. } => -10002,
        }
    }

    /// True for the two failures the cookie normalizer can report.
    pub fn is_cookie_error(&self) -> bool {
        matches!(
            self,
            NetError::CookieUnsupportedShape { .. } | NetError::CookieDecodeFailed { .. }
        )
    }
}

//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting JSON errors into context-rich `NetError` variants.

use crate::base::neterror::NetError;

/// Extension trait for adding context to `serde_json` Results.
pub trait JsonResultExt<T> {
    /// Convert a JSON error into [`NetError::CookieDecodeFailed`], naming the input shape.
    ///
    /// # Example
    /// ```ignore
    /// use chromenet_cookies::base::context::JsonResultExt;
    ///
    /// let value: serde_json::Value = serde_json::from_slice(bytes)
    ///     .decode_context("bytes")?;
    /// // Error: "Cookie input could not be decoded: bytes: expected value at line 1 column 1"
    /// ```
    fn decode_context(self, shape: &str) -> Result<T, NetError>;
}

impl<T> JsonResultExt<T> for Result<T, serde_json::Error> {
    fn decode_context(self, shape: &str) -> Result<T, NetError> {
        self.map_err(|e| NetError::cookie_decode_failed(shape, e))
    }
}

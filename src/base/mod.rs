//! Base types and error handling.
//!
//! Provides foundational types mirroring Chromium's `net/base/`:
//! - [`NetError`](neterror::NetError): error codes, with cookie normalization failures
//!   in a custom range
//! - [`JsonResultExt`](context::JsonResultExt): context helpers for decode failures

pub mod context;
pub mod neterror;

#[cfg(test)]
mod tests;

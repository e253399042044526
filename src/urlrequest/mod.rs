//! Request configuration.
//!
//! [`RequestOptions`](options::RequestOptions) carries per-request settings and
//! resolves its cookie field during preparation.

pub mod options;

pub use options::{CookieField, RequestOptions};

//! # chromenet-cookies
//!
//! Cookie normalization for the chromenet HTTP stack.
//!
//! `chromenet-cookies` turns heterogeneous cookie input (raw header text, header
//! maps, lists of header lines, key/value maps and JSON) into one ordered list of
//! cookies, using the request `Cookie` grammar or the response `Set-Cookie` grammar.
//!
//! ## Features
//!
//! - **Two grammars**: permissive `Cookie` parsing, attribute-aware `Set-Cookie` parsing
//! - **Many input shapes**: a closed [`CookieInput`](cookies::CookieInput) union
//! - **JSON fallback**: objects (and raw JSON bytes) become cookies, in document order
//! - **Request options**: cookie fields resolved once during request preparation
//!
//! ## Quick Start
//!
//! ```rust
//! use chromenet_cookies::cookies::{read_cookies, read_set_cookies};
//!
//! let sent = read_cookies("a=1; b=2")?;
//! assert_eq!(sent.len(), 2);
//!
//! let received = read_set_cookies("sid=abc123; Domain=example.com; Path=/; Secure; HttpOnly")?;
//! let sid = received.get("sid").unwrap();
//! assert_eq!(sid.domain, "example.com");
//! assert!(sid.secure && sid.http_only);
//! # Ok::<(), chromenet_cookies::base::neterror::NetError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions and context helpers
//! - [`cookies`] - Cookie records, header parsers and normalization
//! - [`urlrequest`] - Request options and cookie initialization
//!
//! Parsing never performs I/O and holds no shared state; every call is independent.

pub mod base;
pub mod cookies;
pub mod urlrequest;

//! API key authentication.
//!
//! The News API authenticates every request with a single static header. The key is held as a
//! [`SecretString`] and the header value is flagged as sensitive so neither shows up in debug
//! output or logs.

use reqwest::header::{HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Conventional environment variable for the API key. The SDK never reads it; it exists so
/// callers and demos agree on a name.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Returns the headers needed to authenticate a request.
///
/// Fails with [`crate::error::Kind::Validation`] when the key contains bytes that are not
/// allowed in a header value.
pub(crate) fn create_headers(api_key: &SecretString) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(api_key.expose_secret())?;
    value.set_sensitive(true);

    let mut map = HeaderMap::new();
    map.insert(API_KEY_HEADER, value);

    Ok(map)
}

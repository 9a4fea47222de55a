//! The canonical string-to-sign.
//!
//! Sender and receiver must build this string bit-for-bit identically. Any
//! divergence (method case, trailing slash, digest case, query string) only
//! ever shows up as a signature mismatch, so no field is normalized here.

use std::fmt;

use super::digest::body_digest_hex;

/// Field separator of the string-to-sign.
pub const SEPARATOR: char = ':';

/// Joins the four signed fields as `method:path:digest:timestamp`.
#[must_use]
pub fn canonicalize(method: &str, path: &str, body_digest_hex: &str, timestamp: &str) -> String {
    let mut out = String::with_capacity(
        method.len() + path.len() + body_digest_hex.len() + timestamp.len() + 3,
    );
    out.push_str(method);
    out.push(SEPARATOR);
    out.push_str(path);
    out.push(SEPARATOR);
    out.push_str(body_digest_hex);
    out.push(SEPARATOR);
    out.push_str(timestamp);
    out
}

/// The fields covered by a request signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePayload {
    /// HTTP verb, uppercase.
    pub method: String,
    /// Request path as it appears on the wire.
    pub path: String,
    /// Lowercase hex SHA-256 of the body.
    pub body_digest_hex: String,
    /// ISO-8601 timestamp with numeric offset.
    pub timestamp: String,
}

impl SignaturePayload {
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        body_digest_hex: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_digest_hex: body_digest_hex.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Builds a payload from raw body bytes, hashing them with
    /// [`body_digest_hex`].
    #[must_use]
    pub fn from_body(
        method: impl Into<String>,
        path: impl Into<String>,
        body: &[u8],
        timestamp: impl Into<String>,
    ) -> Self {
        Self::new(method, path, body_digest_hex(body), timestamp)
    }

    #[must_use]
    pub fn canonical_string(&self) -> String {
        canonicalize(
            &self.method,
            &self.path,
            &self.body_digest_hex,
            &self.timestamp,
        )
    }
}

impl fmt::Display for SignaturePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.method, self.path, self.body_digest_hex, self.timestamp
        )
    }
}

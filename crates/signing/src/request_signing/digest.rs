//! Body digest for the string-to-sign.

use sha2::{Digest, Sha256};

/// Computes the lowercase hex SHA-256 of the request body exactly as sent.
///
/// The bytes are hashed as-is: no re-encoding and no whitespace or line
/// ending normalization. An empty body yields the SHA-256 of zero bytes.
#[must_use]
pub fn body_digest_hex(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

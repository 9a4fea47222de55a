//! Error types for request signing and verification.
//!
//! Every fallible operation returns `Report<SignatureError>`, so callers can
//! inspect [`Report::current_context`](error_stack::Report::current_context)
//! and branch on the failure category instead of matching error text.

use derive_more::{Display, Error};

/// Failure categories of request signing and verification.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Key material is malformed, in the wrong container, not RSA, or too small.
    #[display("Key parse error: {message}")]
    KeyParse { message: String },

    /// The transported signature is not valid standard base64.
    #[display("Signature decode error: {message}")]
    SignatureDecode { message: String },

    /// The signature is well formed but does not validate against the key.
    #[display("Signature mismatch")]
    SignatureMismatch,

    /// The RSA signing primitive failed.
    #[display("Signing error: {message}")]
    Signing { message: String },

    /// A request is missing the headers needed to sign or verify it.
    #[display("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Settings could not be loaded or failed validation.
    #[display("Configuration error: {message}")]
    Configuration { message: String },
}

impl SignatureError {
    /// Returns `true` for failures caused by local setup (keys, settings, the
    /// RSA primitive). These are not fixed by retrying.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::KeyParse { .. } | Self::Signing { .. } | Self::Configuration { .. }
        )
    }

    /// Returns `true` for failures that mean the incoming request should be
    /// rejected: corrupted, tampered, or signed by another key.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::SignatureDecode { .. } | Self::SignatureMismatch | Self::InvalidRequest { .. }
        )
    }
}

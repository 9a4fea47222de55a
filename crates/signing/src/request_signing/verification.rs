//! Request signature verification.
//!
//! The verifier recomputes the digest of the canonical string on its own and
//! checks the transported signature with RSA PKCS#1 v1.5 / SHA-256. It is
//! deterministic and performs no I/O.

use base64::{engine::general_purpose, Engine};
use error_stack::Report;
use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::error::SignatureError;

use super::keys::PublicKey;
use super::payload::SignaturePayload;

fn decode_signature(signature_b64: &str) -> Result<Vec<u8>, Report<SignatureError>> {
    general_purpose::STANDARD
        .decode(signature_b64)
        .map_err(|e| {
            Report::new(SignatureError::SignatureDecode {
                message: format!("Failed to decode signature: {e}"),
            })
        })
}

fn verify_decoded(
    canonical: &str,
    signature: &[u8],
    key: &PublicKey,
) -> Result<(), Report<SignatureError>> {
    if signature.len() != key.signature_len() {
        return Err(Report::new(SignatureError::SignatureMismatch).attach(format!(
            "Signature is {} bytes, expected {} for a {}-bit key",
            signature.len(),
            key.signature_len(),
            key.bits()
        )));
    }

    let digest = Sha256::digest(canonical.as_bytes());
    key.as_rsa()
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest.as_slice(), signature)
        .map_err(|_| Report::new(SignatureError::SignatureMismatch))
}

/// Verifies a base64 signature over `canonical` with a parsed public key.
///
/// # Errors
///
/// Returns [`SignatureError::SignatureDecode`] if `signature_b64` is not
/// standard base64, or [`SignatureError::SignatureMismatch`] if the signature
/// does not validate for this exact string and key.
pub fn verify_string(
    canonical: &str,
    signature_b64: &str,
    key: &PublicKey,
) -> Result<(), Report<SignatureError>> {
    let signature = decode_signature(signature_b64)?;
    verify_decoded(canonical, &signature, key)
}

/// Parses `public_key_pem` and verifies `signature_b64` in one call.
///
/// Prefer [`SignatureVerifier`] when verifying more than once with the same key.
///
/// # Errors
///
/// Returns [`SignatureError::SignatureDecode`] for malformed base64,
/// [`SignatureError::KeyParse`] if the PEM cannot be parsed as a PKIX RSA
/// key, or [`SignatureError::SignatureMismatch`] if verification fails.
pub fn verify_with_pem(
    canonical: &str,
    signature_b64: &str,
    public_key_pem: &str,
) -> Result<(), Report<SignatureError>> {
    // Malformed base64 is reported before any key error.
    let signature = decode_signature(signature_b64)?;
    let key = PublicKey::from_pem(public_key_pem)?;
    verify_decoded(canonical, &signature, &key)
}

/// Verifies request signatures with a parsed public key.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: PublicKey,
}

impl SignatureVerifier {
    #[must_use]
    pub fn new(key: PublicKey) -> Self {
        Self { key }
    }

    /// Creates a verifier from PKIX PEM text.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::KeyParse`] if the key cannot be parsed.
    pub fn from_pem(public_key_pem: &str) -> Result<Self, Report<SignatureError>> {
        PublicKey::from_pem(public_key_pem).map(Self::new)
    }

    #[must_use]
    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    /// Verifies `signature_b64` against the canonical form of `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::SignatureDecode`] or
    /// [`SignatureError::SignatureMismatch`].
    pub fn verify(
        &self,
        payload: &SignaturePayload,
        signature_b64: &str,
    ) -> Result<(), Report<SignatureError>> {
        self.verify_canonical(&payload.canonical_string(), signature_b64)
    }

    /// Verifies `signature_b64` against a string the caller already canonicalized.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::SignatureDecode`] or
    /// [`SignatureError::SignatureMismatch`].
    pub fn verify_canonical(
        &self,
        canonical: &str,
        signature_b64: &str,
    ) -> Result<(), Report<SignatureError>> {
        verify_string(canonical, signature_b64, &self.key)
    }
}

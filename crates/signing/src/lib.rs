//! Asymmetric request signing for payment gateway webhooks and API calls.
//!
//! The sender hashes the request body, joins method, path, body digest and
//! timestamp into a canonical string and signs it with an RSA private key.
//! The receiver rebuilds the same string and verifies the signature with the
//! matching public key.
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy shared by every operation
//! - [`request_signing`]: Body digest, canonical string, key parsing, signing and verification
//! - [`settings`]: Header-name configuration for the HTTP helpers
//! - [`test_support`]: Key fixtures for tests
//! - [`timestamp`]: Request timestamp formatting and parsing

pub mod error;
pub mod request_signing;
pub mod settings;
pub mod test_support;
pub mod timestamp;

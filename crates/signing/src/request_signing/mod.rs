//! Request signing utilities for gateway to merchant callbacks.
//!
//! This module provides RSA PKCS#1 v1.5 / SHA-256 signing and verification of
//! a canonical `method:path:body-digest:timestamp` string, plus helpers for
//! applying it to HTTP requests.

pub mod digest;
pub mod http_util;
pub mod keys;
pub mod payload;
pub mod signing;
pub mod verification;

pub use digest::*;
pub use http_util::*;
pub use keys::*;
pub use payload::*;
pub use signing::*;
pub use verification::*;

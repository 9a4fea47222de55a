//! Glue between [`http::Request`] and the signing primitives.
//!
//! The signed path is the request target as it appears on the wire: path plus
//! query string when one is present. Both parties must build requests the
//! same way or verification fails.

use error_stack::{Report, ResultExt};
use http::header::{HeaderName, HeaderValue};
use http::uri::PathAndQuery;
use http::Request;

use crate::error::SignatureError;
use crate::settings::SigningHeaders;

use super::payload::SignaturePayload;
use super::signing::RequestSigner;
use super::verification::SignatureVerifier;

fn header_name(name: &str) -> Result<HeaderName, Report<SignatureError>> {
    HeaderName::from_bytes(name.as_bytes()).change_context(SignatureError::Configuration {
        message: format!("Invalid header name '{name}'"),
    })
}

fn required_header<'a, B>(
    req: &'a Request<B>,
    name: &str,
) -> Result<&'a str, Report<SignatureError>> {
    let value = req.headers().get(header_name(name)?).ok_or_else(|| {
        Report::new(SignatureError::InvalidRequest {
            message: format!("Missing {name} header"),
        })
    })?;

    value.to_str().change_context(SignatureError::InvalidRequest {
        message: format!("{name} header is not visible ASCII"),
    })
}

/// Builds the signature payload for `req` stamped with `timestamp`.
#[must_use]
pub fn payload_from_request<B: AsRef<[u8]>>(req: &Request<B>, timestamp: &str) -> SignaturePayload {
    let uri = req.uri();
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path(), PathAndQuery::as_str);

    SignaturePayload::from_body(req.method().as_str(), path, req.body().as_ref(), timestamp)
}

/// Signs `req` and sets the timestamp and signature headers on it.
///
/// Returns the signature that was attached.
///
/// # Errors
///
/// Returns [`SignatureError::InvalidRequest`] if `timestamp` cannot be used
/// as a header value, [`SignatureError::Configuration`] for an invalid header
/// name, or [`SignatureError::Signing`] if the RSA operation fails.
pub fn sign_request<B: AsRef<[u8]>>(
    req: &mut Request<B>,
    signer: &RequestSigner,
    timestamp: &str,
    headers: &SigningHeaders,
) -> Result<String, Report<SignatureError>> {
    let timestamp_value =
        HeaderValue::from_str(timestamp).change_context(SignatureError::InvalidRequest {
            message: format!("Timestamp '{timestamp}' is not a valid header value"),
        })?;
    let timestamp_header = header_name(&headers.timestamp)?;
    let signature_header = header_name(&headers.signature)?;

    let signature = signer.sign(&payload_from_request(req, timestamp))?;
    let signature_value =
        HeaderValue::from_str(&signature).change_context(SignatureError::Signing {
            message: "Signature is not a valid header value".into(),
        })?;

    let req_headers = req.headers_mut();
    req_headers.insert(timestamp_header, timestamp_value);
    req_headers.insert(signature_header, signature_value);

    Ok(signature)
}

/// Verifies the signature headers of an incoming request.
///
/// Returns the verified payload so the caller can apply its own timestamp
/// policy.
///
/// # Errors
///
/// Returns [`SignatureError::InvalidRequest`] if either header is missing or
/// not ASCII, [`SignatureError::SignatureDecode`] for a malformed signature,
/// or [`SignatureError::SignatureMismatch`] if verification fails.
pub fn verify_request<B: AsRef<[u8]>>(
    req: &Request<B>,
    verifier: &SignatureVerifier,
    headers: &SigningHeaders,
) -> Result<SignaturePayload, Report<SignatureError>> {
    let timestamp = required_header(req, &headers.timestamp)?;
    let signature = required_header(req, &headers.signature)?;

    let payload = payload_from_request(req, timestamp);
    verifier.verify(&payload, signature)?;

    Ok(payload)
}

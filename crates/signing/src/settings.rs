//! Header-name configuration for the HTTP helpers.
//!
//! ```toml
//! [headers]
//! timestamp = "X-TIMESTAMP"
//! signature = "X-SIGNATURE"
//! ```

use config::{Config, File, FileFormat};
use error_stack::{Report, ResultExt};
use http::header::HeaderName;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::SignatureError;

/// Default header carrying the signed timestamp.
pub const DEFAULT_TIMESTAMP_HEADER: &str = "X-TIMESTAMP";
/// Default header carrying the base64 signature.
pub const DEFAULT_SIGNATURE_HEADER: &str = "X-SIGNATURE";

fn default_timestamp_header() -> String {
    DEFAULT_TIMESTAMP_HEADER.to_string()
}

fn default_signature_header() -> String {
    DEFAULT_SIGNATURE_HEADER.to_string()
}

fn validate_header_name(name: &str) -> Result<(), ValidationError> {
    HeaderName::from_bytes(name.as_bytes())
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_header_name"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct SigningHeaders {
    #[serde(default = "default_timestamp_header")]
    #[validate(length(min = 1), custom(function = "validate_header_name"))]
    pub timestamp: String,
    #[serde(default = "default_signature_header")]
    #[validate(length(min = 1), custom(function = "validate_header_name"))]
    pub signature: String,
}

impl Default for SigningHeaders {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp_header(),
            signature: default_signature_header(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub headers: SigningHeaders,
}

impl Settings {
    /// Loads and validates settings from a TOML document. Missing keys fall
    /// back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Configuration`] if the TOML cannot be parsed
    /// or a header name is empty or not a valid HTTP header name.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<SignatureError>> {
        let config = Config::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()
            .change_context(SignatureError::Configuration {
                message: "Failed to parse settings TOML".into(),
            })?;

        let settings: Self =
            config
                .try_deserialize()
                .change_context(SignatureError::Configuration {
                    message: "Failed to deserialize settings".into(),
                })?;

        settings
            .validate()
            .change_context(SignatureError::Configuration {
                message: "Settings validation failed".into(),
            })?;

        log::debug!(
            "Loaded signing settings: timestamp header '{}', signature header '{}'",
            settings.headers.timestamp,
            settings.headers.signature
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.headers.timestamp, "X-TIMESTAMP");
        assert_eq!(settings.headers.signature, "X-SIGNATURE");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = Settings::from_toml(
            r#"
            [headers]
            timestamp = "X-Request-Timestamp"
            signature = "Signature"
            "#,
        )
        .expect("should load settings");

        assert_eq!(settings.headers.timestamp, "X-Request-Timestamp");
        assert_eq!(settings.headers.signature, "Signature");
    }

    #[test]
    fn test_settings_partial_toml_uses_defaults() {
        let settings = Settings::from_toml(
            r#"
            [headers]
            signature = "Signature"
            "#,
        )
        .expect("should load settings");

        assert_eq!(settings.headers.timestamp, DEFAULT_TIMESTAMP_HEADER);
        assert_eq!(settings.headers.signature, "Signature");

        let empty = Settings::from_toml("").expect("should load empty settings");
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_settings_rejects_empty_header_name() {
        let err = Settings::from_toml(
            r#"
            [headers]
            timestamp = ""
            "#,
        )
        .expect_err("should reject empty header name");

        assert!(matches!(
            err.current_context(),
            SignatureError::Configuration { .. }
        ));
    }

    #[test]
    fn test_settings_rejects_invalid_header_name() {
        let err = Settings::from_toml(
            r#"
            [headers]
            signature = "X SIGNATURE"
            "#,
        )
        .expect_err("should reject header name with a space");

        assert!(err.current_context().is_configuration());
    }

    #[test]
    fn test_settings_rejects_malformed_toml() {
        let result = Settings::from_toml("[headers\ntimestamp = ");
        assert!(result.is_err());
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated onOffice API token.
///
/// This newtype ensures the token is non-empty and provides type safety
/// to prevent accidental misuse of raw strings. The token identifies the
/// API account and is transmitted in every request envelope.
///
/// # Example
///
/// ```rust
/// use onoffice_api::ApiToken;
///
/// let token = ApiToken::new("my-api-token").unwrap();
/// assert_eq!(token.as_ref(), "my-api-token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated onOffice API secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs. The secret
/// is never transmitted; it is only used as the HMAC key when signing
/// requests.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiSecret(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use onoffice_api::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_accepts_non_empty_value() {
        let token = ApiToken::new("token-value").unwrap();
        assert_eq!(token.as_ref(), "token-value");
    }

    #[test]
    fn test_api_token_rejects_empty_value() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_secret_rejects_empty_value() {
        assert!(matches!(
            ApiSecret::new(""),
            Err(ConfigError::EmptyApiSecret)
        ));
    }

    #[test]
    fn test_api_secret_debug_is_masked() {
        let secret = ApiSecret::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "ApiSecret(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_api_secret_as_ref_exposes_value() {
        let secret = ApiSecret::new("super-secret").unwrap();
        assert_eq!(secret.as_ref(), "super-secret");
    }
}

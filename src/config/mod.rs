//! Configuration types for the onOffice API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with onOffice.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`OnOfficeConfig`]: The main configuration struct holding the API credentials
//! - [`OnOfficeConfigBuilder`]: A builder for constructing [`OnOfficeConfig`] instances
//! - [`ApiToken`]: A validated API token newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use onoffice_api::{OnOfficeConfig, ApiToken, ApiSecret};
//!
//! let config = OnOfficeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiSecret, ApiToken};

use crate::error::ConfigError;

/// The stable onOffice API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.onoffice.de/api/stable/api.php";

/// Configuration for the onOffice API SDK.
///
/// This struct is the credential provider for all API operations: it holds
/// the token transmitted with every envelope, the secret used as the HMAC
/// signing key, and the optional extended API claim.
///
/// # Thread Safety
///
/// `OnOfficeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is immutable after construction.
///
/// # Example
///
/// ```rust
/// use onoffice_api::{OnOfficeConfig, ApiToken, ApiSecret};
///
/// let config = OnOfficeConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .secret(ApiSecret::new("my-secret").unwrap())
///     .api_claim("my-claim")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_claim(), Some("my-claim"));
/// ```
#[derive(Clone, Debug)]
pub struct OnOfficeConfig {
    token: ApiToken,
    secret: ApiSecret,
    api_claim: Option<String>,
    api_url: String,
}

impl OnOfficeConfig {
    /// Creates a new builder for constructing an `OnOfficeConfig`.
    #[must_use]
    pub fn builder() -> OnOfficeConfigBuilder {
        OnOfficeConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn secret(&self) -> &ApiSecret {
        &self.secret
    }

    /// Returns the extended API claim, if configured.
    #[must_use]
    pub fn api_claim(&self) -> Option<&str> {
        self.api_claim.as_deref()
    }

    /// Returns the API endpoint URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

// Verify OnOfficeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OnOfficeConfig>();
};

/// Builder for constructing [`OnOfficeConfig`] instances.
///
/// Required fields are `token` and `secret`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `api_claim`: `None`
/// - `api_url`: [`DEFAULT_API_URL`]
///
/// # Example
///
/// ```rust
/// use onoffice_api::{OnOfficeConfig, ApiToken, ApiSecret};
///
/// let config = OnOfficeConfig::builder()
///     .token(ApiToken::new("token").unwrap())
///     .secret(ApiSecret::new("secret").unwrap())
///     .api_url("https://api.onoffice.de/api/latest/api.php")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct OnOfficeConfigBuilder {
    token: Option<ApiToken>,
    secret: Option<ApiSecret>,
    api_claim: Option<String>,
    api_url: Option<String>,
}

impl OnOfficeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn secret(mut self, secret: ApiSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the extended API claim.
    ///
    /// When configured, the claim is injected into every request's
    /// parameters under the `extendedclaim` key unless the caller supplies
    /// its own value for that key.
    #[must_use]
    pub fn api_claim(mut self, claim: impl Into<String>) -> Self {
        self.api_claim = Some(claim.into());
        self
    }

    /// Sets the API endpoint URL.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Builds the [`OnOfficeConfig`], validating that required fields are set.
    ///
    /// An empty `api_claim` is treated as unconfigured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` or `secret`
    /// are not set, or [`ConfigError::InvalidApiUrl`] if a custom API URL
    /// does not carry an `http(s)` scheme.
    pub fn build(self) -> Result<OnOfficeConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;
        let secret = self
            .secret
            .ok_or(ConfigError::MissingRequiredField { field: "secret" })?;

        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl { url: api_url });
        }

        let api_claim = self.api_claim.filter(|claim| !claim.is_empty());

        Ok(OnOfficeConfig {
            token,
            secret,
            api_claim,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = OnOfficeConfigBuilder::new()
            .secret(ApiSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_requires_secret() {
        let result = OnOfficeConfigBuilder::new()
            .token(ApiToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "secret" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = OnOfficeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert!(config.api_claim().is_none());
    }

    #[test]
    fn test_empty_api_claim_is_unconfigured() {
        let config = OnOfficeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .api_claim("")
            .build()
            .unwrap();

        assert!(config.api_claim().is_none());
    }

    #[test]
    fn test_builder_rejects_url_without_scheme() {
        let result = OnOfficeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .secret(ApiSecret::new("secret").unwrap())
            .api_url("api.onoffice.de/api.php")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OnOfficeConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_secret() {
        let config = OnOfficeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .secret(ApiSecret::new("hunter2").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.token(), config.token());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("OnOfficeConfig"));
        assert!(!debug_str.contains("hunter2"));
    }
}

//! Error types for SDK configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the [`OnOfficeConfigBuilder`](crate::OnOfficeConfigBuilder).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use onoffice_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid onOffice API token.")]
    EmptyApiToken,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid onOffice API secret.")]
    EmptyApiSecret,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.onoffice.de/api/stable/api.php').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let error = ConfigError::EmptyApiToken;
        let message = error.to_string();
        assert!(message.contains("API token cannot be empty"));
        assert!(message.contains("valid onOffice API token"));
    }

    #[test]
    fn test_invalid_api_url_error_message() {
        let error = ConfigError::InvalidApiUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "token" };
        let message = error.to_string();
        assert!(message.contains("token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &error;
    }
}

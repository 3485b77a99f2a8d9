//! Error types for onOffice API requests.
//!
//! The onOffice response envelope carries status information on two levels:
//! a top-level `status` object and a per-result `status` object inside
//! `response.results`. The client classifies failures into distinct error
//! kinds so callers can tell an envelope-level failure from a structured
//! business error.
//!
//! # Error Handling
//!
//! - [`TransportError`]: HTTP/envelope-level failure without a semantic API code
//! - [`ResponseError`]: The API returned a structured business error
//! - [`UnsupportedOperationError`]: The operation is not implemented for the
//!   targeted resource type
//! - [`StrayRequestError`]: A request reached the fake transport without a
//!   pre-registered response (test harness only)
//! - [`OnOfficeError`]: Unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! match client.send(request).await {
//!     Ok(response) => println!("records: {:?}", response.records_at(paths::RECORDS)),
//!     Err(OnOfficeError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(OnOfficeError::Transport(e)) => println!("envelope failure {}: {}", e.code, e.message),
//!     Err(err) => println!("request failed: {err}"),
//! }
//! ```

use thiserror::Error;

use crate::client::action::{Action, ResourceType};

/// Error returned when the API reports a structured business error.
///
/// Carries the API's own error code, taken either from `status.errorcode`
/// or from the first result's `status.errorcode`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseError {
    /// The API error code.
    pub code: i64,
    /// The API error message, or `"Status code: {code}"` if the API sent none.
    pub message: String,
}

/// Error returned when the request fails on the HTTP/envelope level.
///
/// Raised when the top-level status code is 300 or above without a semantic
/// API error code. The code field holds the top-level status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    /// The top-level status code of the response.
    pub code: i64,
    /// The status message, or `"Status code: {code}"` if the API sent none.
    pub message: String,
}

/// Error returned when an operation is not implemented for a resource type.
///
/// Relation-style resources such as `idsfromrelation` resolve ids through
/// their parameters and reject direct lookup by id. Callers can check
/// [`ResourceType::supports_lookup`] in advance to branch on capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} is not implemented in onOffice for resource type '{resource_type}'")]
pub struct UnsupportedOperationError {
    /// The operation that was attempted.
    pub operation: &'static str,
    /// The resource type that does not support it.
    pub resource_type: ResourceType,
}

impl UnsupportedOperationError {
    /// Creates an error for a direct lookup against a resource type that
    /// does not support it.
    #[must_use]
    pub const fn lookup(resource_type: ResourceType) -> Self {
        Self {
            operation: "Lookup by id",
            resource_type,
        }
    }
}

/// Error returned when a request was not pre-registered with the fake
/// transport.
///
/// This error is only ever produced by
/// [`testing::FakeTransport`](crate::testing::FakeTransport); no runtime
/// code path raises it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Received a stray {action} request for resource type '{resource_type}'. Register a response with FakeTransport::push_response before sending.")]
pub struct StrayRequestError {
    /// The action of the stray request.
    pub action: Action,
    /// The resource type of the stray request.
    pub resource_type: ResourceType,
}

/// Unified error type for all onOffice API request failures.
///
/// The client always raises on failure and never returns a partially-valid
/// response. The pagination functions are the single place that catches
/// these errors; they degrade a run to a logged partial result instead of
/// re-raising.
#[derive(Debug, Error)]
pub enum OnOfficeError {
    /// The API returned a structured business error.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// HTTP/envelope-level failure without a semantic API code.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The operation is not implemented for the targeted resource type.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),

    /// A request was not pre-registered with the fake transport (test only).
    #[error(transparent)]
    Stray(#[from] StrayRequestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message_passthrough() {
        let error = ResponseError {
            code: 137,
            message: "estate not found".to_string(),
        };
        assert_eq!(error.to_string(), "estate not found");
    }

    #[test]
    fn test_transport_error_fallback_message_shape() {
        let error = TransportError {
            code: 500,
            message: "Status code: 500".to_string(),
        };
        assert_eq!(error.to_string(), "Status code: 500");
    }

    #[test]
    fn test_unsupported_lookup_error_names_resource_type() {
        let error = UnsupportedOperationError::lookup(ResourceType::IdsFromRelation);
        let message = error.to_string();
        assert!(message.contains("not implemented"));
        assert!(message.contains("idsfromrelation"));
    }

    #[test]
    fn test_stray_request_error_names_action() {
        let error = StrayRequestError {
            action: Action::Read,
            resource_type: ResourceType::Estate,
        };
        let message = error.to_string();
        assert!(message.contains("stray"));
        assert!(message.contains("estate"));
        assert!(message.contains("push_response"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &ResponseError {
            code: 1,
            message: "x".to_string(),
        };
        let _ = response;

        let transport: &dyn std::error::Error = &TransportError {
            code: 500,
            message: "x".to_string(),
        };
        let _ = transport;
    }
}

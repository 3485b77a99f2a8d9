//! The onOffice API client.
//!
//! [`OnOfficeClient`] is the request executor: it merges the configured API
//! claim into the parameters, stamps and signs the action, sends the
//! envelope through the transport, and classifies the response before
//! handing it back.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::auth::hmac::sign_action;
use crate::client::errors::{OnOfficeError, ResponseError, TransportError};
use crate::client::params;
use crate::client::request::{ApiEnvelope, ApiRequest, SignedAction};
use crate::client::response::ApiResponse;
use crate::client::transport::{HttpTransport, Transport};
use crate::config::OnOfficeConfig;

/// Client for making signed requests to the onOffice API.
///
/// The client is stateless across calls: every [`send`](Self::send) builds a
/// fresh signed action and nothing persists but the configuration and the
/// shared transport.
///
/// # Thread Safety
///
/// `OnOfficeClient` is `Send + Sync` and cheap to clone; independent
/// pagination runs may share one client concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use onoffice_api::{Action, ApiRequest, OnOfficeClient, OnOfficeConfig, ResourceType};
/// use onoffice_api::{ApiSecret, ApiToken};
///
/// let config = OnOfficeConfig::builder()
///     .token(ApiToken::new("token")?)
///     .secret(ApiSecret::new("secret")?)
///     .build()?;
///
/// let client = OnOfficeClient::with_http(config);
/// let request = ApiRequest::builder(Action::Read, ResourceType::Estate).build();
/// let response = client.send(request).await?;
/// ```
#[derive(Clone)]
pub struct OnOfficeClient {
    config: OnOfficeConfig,
    transport: Arc<dyn Transport>,
}

// Verify OnOfficeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OnOfficeClient>();
};

impl std::fmt::Debug for OnOfficeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnOfficeClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OnOfficeClient {
    /// Creates a client with an explicit transport.
    #[must_use]
    pub fn new(config: OnOfficeConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Creates a client backed by [`HttpTransport`] against the configured
    /// endpoint.
    #[must_use]
    pub fn with_http(config: OnOfficeConfig) -> Self {
        let transport = Arc::new(HttpTransport::from_config(&config));
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &OnOfficeConfig {
        &self.config
    }

    /// Sends one signed action to the API.
    ///
    /// The configured API claim, if any, is merged into the parameters under
    /// `extendedclaim`; a caller-supplied value for that key wins. The
    /// timestamp is captured once and used both for the signature and the
    /// transmitted action.
    ///
    /// # Errors
    ///
    /// Returns [`OnOfficeError::Response`] for structured API errors,
    /// [`OnOfficeError::Transport`] for envelope-level failures and
    /// [`OnOfficeError::Network`] when the transport cannot deliver the
    /// request. On success the response is returned unchanged.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, OnOfficeError> {
        let ApiRequest {
            action,
            resource_type,
            resource_id,
            identifier,
            mut parameters,
        } = request;

        if let Some(claim) = self.config.api_claim() {
            parameters
                .entry(params::EXTENDED_CLAIM.to_string())
                .or_insert_with(|| Value::String(claim.to_string()));
        }

        let timestamp = Utc::now().timestamp();
        let hmac = sign_action(
            self.config.secret().as_ref(),
            timestamp,
            self.config.token().as_ref(),
            resource_type.as_str(),
            action.as_str(),
        );

        let envelope = ApiEnvelope::single(
            self.config.token().as_ref(),
            SignedAction {
                actionid: action,
                resourceid: resource_id,
                resourcetype: resource_type,
                identifier,
                timestamp,
                hmac,
                hmac_version: 2,
                parameters,
            },
        );

        tracing::debug!(action = %action, resource_type = %resource_type, "sending onOffice request");

        let response = self.transport.send(&envelope).await?;
        ensure_success(&response)?;

        Ok(response)
    }
}

/// Classifies a response envelope, raising the matching error kind.
///
/// Decision order (first match wins):
/// 1. status code >= 300 with an API error code: response-level error
/// 2. status code >= 300 without one: transport-level error
/// 3. first result carries an error code: response-level error
///
/// A top-level failure always outranks a result-level error, even when both
/// are present.
fn ensure_success(response: &ApiResponse) -> Result<(), OnOfficeError> {
    let status_code = response.status_code();
    let status_error_code = response.status_error_code();
    let result_error_code = response.result_error_code();

    let mut status_message = response.status_message();
    if status_message.is_empty() {
        status_message = format!("Status code: {status_code}");
    }
    let mut result_message = response.result_message();
    if result_message.is_empty() {
        result_message = format!("Status code: {result_error_code}");
    }

    if status_code >= 300 && status_error_code > 0 {
        return Err(ResponseError {
            code: status_error_code,
            message: status_message,
        }
        .into());
    }
    if status_code >= 300 {
        return Err(TransportError {
            code: status_code,
            message: status_message,
        }
        .into());
    }
    if result_error_code > 0 {
        return Err(ResponseError {
            code: result_error_code,
            message: result_message,
        }
        .into());
    }

    Ok(())
}

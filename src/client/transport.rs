//! Transport seam for onOffice API communication.
//!
//! The client is transport-agnostic: anything implementing [`Transport`]
//! can carry an [`ApiEnvelope`] to the API and hand back the decoded body.
//! [`HttpTransport`] is the production implementation, a single POST to the
//! fixed onOffice endpoint. The
//! [`testing::FakeTransport`](crate::testing::FakeTransport) implementation
//! serves pre-registered responses in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::errors::OnOfficeError;
use crate::client::request::ApiEnvelope;
use crate::client::response::ApiResponse;
use crate::config::OnOfficeConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A pluggable request/response channel to the onOffice API.
///
/// One call to [`Transport::send`] corresponds to exactly one API round
/// trip. Timeouts and cancellation are the transport's concern; they
/// surface to callers as [`OnOfficeError::Network`] or a transport-level
/// classification error.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one envelope and returns the decoded response body.
    ///
    /// # Errors
    ///
    /// Returns [`OnOfficeError`] when the request cannot be delivered.
    /// Implementations do not classify the response envelope; that is the
    /// client's job.
    async fn send(&self, envelope: &ApiEnvelope) -> Result<ApiResponse, OnOfficeError>;
}

/// HTTP transport posting envelopes to the onOffice endpoint.
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`, making it safe to share across async
/// tasks.
#[derive(Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The fixed endpoint URL.
    api_url: String,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport for the given endpoint URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        let user_agent = format!("onOffice API Library v{SDK_VERSION} | Rust");
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Creates a transport for the endpoint configured in `config`.
    #[must_use]
    pub fn from_config(config: &OnOfficeConfig) -> Self {
        Self::new(config.api_url())
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, envelope: &ApiEnvelope) -> Result<ApiResponse, OnOfficeError> {
        let res = self
            .client
            .post(&self.api_url)
            .json(envelope)
            .send()
            .await?;

        // A non-JSON body decodes to null; the classifier then reads the
        // default status code 500 and reports a transport-level error.
        let text = res.text().await?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);

        Ok(ApiResponse::new(body))
    }
}

//! Test doubles for the onOffice API client.
//!
//! [`FakeTransport`] replaces the HTTP transport in tests: responses are
//! pre-registered and served in order, every sent envelope is recorded for
//! assertion, and an unregistered request fails with
//! [`StrayRequestError`](crate::client::StrayRequestError) instead of
//! reaching the network.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use onoffice_api::testing::FakeTransport;
//! use onoffice_api::{ApiSecret, ApiToken, OnOfficeClient, OnOfficeConfig};
//! use serde_json::json;
//!
//! let transport = Arc::new(FakeTransport::new());
//! transport.push_response(FakeTransport::response_body(vec![json!({"id": 1})], 1));
//!
//! let config = OnOfficeConfig::builder()
//!     .token(ApiToken::new("token").unwrap())
//!     .secret(ApiSecret::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//! let client = OnOfficeClient::new(config, transport.clone());
//! // ... exercise the client, then assert on transport.sent()
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{
    ApiEnvelope, ApiResponse, OnOfficeError, StrayRequestError, Transport,
};

/// A transport serving pre-registered responses.
///
/// Responses are consumed first-in-first-out, one per [`Transport::send`]
/// call. Sending without a registered response is a stray request and
/// fails; prior successful sends keep their recorded envelopes.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Value>>,
    sent: Mutex<Vec<ApiEnvelope>>,
}

impl FakeTransport {
    /// Creates an empty fake transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response body to be served by the next unanswered send.
    pub fn push_response(&self, body: Value) {
        self.responses
            .lock()
            .expect("fake transport lock poisoned")
            .push_back(body);
    }

    /// Returns clones of every envelope sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<ApiEnvelope> {
        self.sent
            .lock()
            .expect("fake transport lock poisoned")
            .clone()
    }

    /// Returns how many envelopes have been sent.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.sent
            .lock()
            .expect("fake transport lock poisoned")
            .len()
    }

    /// Builds a canonical success body with the given records and absolute
    /// count.
    #[must_use]
    pub fn response_body(records: Vec<Value>, cnt_absolute: i64) -> Value {
        json!({
            "status": {"code": 200, "errorcode": 0, "message": "OK"},
            "response": {"results": [{
                "status": {"errorcode": 0, "message": ""},
                "data": {
                    "meta": {"cntabsolute": cnt_absolute},
                    "records": records
                }
            }]}
        })
    }

    /// Builds a body that classifies as a top-level failure.
    #[must_use]
    pub fn error_body(status_code: i64, error_code: i64, message: &str) -> Value {
        json!({
            "status": {"code": status_code, "errorcode": error_code, "message": message}
        })
    }

    /// Builds a body that classifies as a result-level business error.
    #[must_use]
    pub fn result_error_body(error_code: i64, message: &str) -> Value {
        json!({
            "status": {"code": 200, "errorcode": 0},
            "response": {"results": [{
                "status": {"errorcode": error_code, "message": message}
            }]}
        })
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, envelope: &ApiEnvelope) -> Result<ApiResponse, OnOfficeError> {
        self.sent
            .lock()
            .expect("fake transport lock poisoned")
            .push(envelope.clone());

        let body = self
            .responses
            .lock()
            .expect("fake transport lock poisoned")
            .pop_front();

        match body {
            Some(body) => Ok(ApiResponse::new(body)),
            None => {
                let action = envelope.action();
                Err(StrayRequestError {
                    action: action.actionid,
                    resource_type: action.resourcetype,
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Action, ResourceId, ResourceType, SignedAction};
    use serde_json::Map;

    fn envelope() -> ApiEnvelope {
        ApiEnvelope::single(
            "token",
            SignedAction {
                actionid: Action::Read,
                resourcetype: ResourceType::Estate,
                resourceid: ResourceId::None,
                identifier: String::new(),
                timestamp: 1_700_000_000,
                hmac: "sig".to_string(),
                hmac_version: 2,
                parameters: Map::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_responses_are_served_in_order() {
        let transport = FakeTransport::new();
        transport.push_response(json!({"status": {"code": 200}, "first": true}));
        transport.push_response(json!({"status": {"code": 200}, "first": false}));

        let first = transport.send(&envelope()).await.unwrap();
        let second = transport.send(&envelope()).await.unwrap();

        assert_eq!(first.body()["first"], json!(true));
        assert_eq!(second.body()["first"], json!(false));
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_unregistered_send_is_a_stray_request() {
        let transport = FakeTransport::new();

        let result = transport.send(&envelope()).await;
        match result {
            Err(OnOfficeError::Stray(stray)) => {
                assert_eq!(stray.action, Action::Read);
                assert_eq!(stray.resource_type, ResourceType::Estate);
            }
            other => panic!("expected stray request error, got {other:?}"),
        }

        // The stray envelope is still recorded.
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_response_body_matches_envelope_shape() {
        let body = FakeTransport::response_body(vec![json!({"id": 7})], 42);
        let response = ApiResponse::new(body);

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.int_at(crate::client::paths::COUNT_ABSOLUTE, 0), 42);
        assert_eq!(
            response
                .records_at(crate::client::paths::RECORDS)
                .unwrap()
                .len(),
            1
        );
    }
}

//! Request types for the onOffice API.
//!
//! An [`ApiRequest`] describes one action before it is signed: the verb, the
//! resource identity and the caller's parameters. The client turns it into a
//! [`SignedAction`] (timestamp + HMAC added) and wraps exactly one signed
//! action per [`ApiEnvelope`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::action::{Action, ResourceId, ResourceType};
use crate::client::errors::{OnOfficeError, UnsupportedOperationError};

/// One unsigned action against the onOffice API.
///
/// Build one with [`ApiRequest::builder`] and send it through
/// [`OnOfficeClient::send`](crate::OnOfficeClient::send).
///
/// # Example
///
/// ```rust
/// use onoffice_api::{Action, ApiRequest, ResourceType};
/// use onoffice_api::client::params;
/// use serde_json::json;
///
/// let request = ApiRequest::builder(Action::Read, ResourceType::Estate)
///     .parameter(params::LIST_LIMIT, 100)
///     .parameter(params::FILTER, json!({"status": [{"op": "=", "val": 1}]}))
///     .build();
///
/// assert_eq!(request.action, Action::Read);
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The action verb.
    pub action: Action,
    /// The resource type the action targets.
    pub resource_type: ResourceType,
    /// The resource id; [`ResourceId::None`] when the action targets no
    /// specific resource.
    pub resource_id: ResourceId,
    /// Free-form identifier echoed back by the API; empty by default.
    pub identifier: String,
    /// The action parameters; insertion order is preserved on the wire.
    pub parameters: Map<String, Value>,
}

impl ApiRequest {
    /// Creates a new request with default identity fields.
    #[must_use]
    pub fn new(action: Action, resource_type: ResourceType) -> Self {
        Self {
            action,
            resource_type,
            resource_id: ResourceId::None,
            identifier: String::new(),
            parameters: Map::new(),
        }
    }

    /// Creates a builder for a request with the given action and resource
    /// type.
    #[must_use]
    pub fn builder(action: Action, resource_type: ResourceType) -> ApiRequestBuilder {
        ApiRequestBuilder {
            request: Self::new(action, resource_type),
        }
    }

    /// Creates a read request targeting a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`OnOfficeError::Unsupported`] when the resource type does
    /// not support direct lookup (see [`ResourceType::supports_lookup`]).
    pub fn lookup(resource_type: ResourceType, id: i64) -> Result<Self, OnOfficeError> {
        if !resource_type.supports_lookup() {
            return Err(UnsupportedOperationError::lookup(resource_type).into());
        }
        Ok(Self::builder(Action::Read, resource_type)
            .resource_id(id)
            .build())
    }
}

/// Builder for [`ApiRequest`] instances.
///
/// All fields beyond the action and resource type are optional; building
/// never fails.
#[derive(Clone, Debug)]
pub struct ApiRequestBuilder {
    request: ApiRequest,
}

impl ApiRequestBuilder {
    /// Sets the resource id.
    #[must_use]
    pub fn resource_id(mut self, id: impl Into<ResourceId>) -> Self {
        self.request.resource_id = id.into();
        self
    }

    /// Sets the request identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.request.identifier = identifier.into();
        self
    }

    /// Adds a single parameter, replacing any previous value for the key.
    #[must_use]
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.request.parameters.insert(key.into(), value.into());
        self
    }

    /// Replaces all parameters with the given map.
    #[must_use]
    pub fn parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.request.parameters = parameters;
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> ApiRequest {
        self.request
    }
}

/// One signed action as transmitted on the wire.
///
/// The `timestamp` field must hold the same value that went into the HMAC
/// computation; the API rejects the signature otherwise.
#[derive(Clone, Debug, Serialize)]
pub struct SignedAction {
    /// The action URN.
    pub actionid: Action,
    /// The resource id (`""` when absent).
    pub resourceid: ResourceId,
    /// The resource type wire value.
    pub resourcetype: ResourceType,
    /// Free-form identifier echoed back by the API.
    pub identifier: String,
    /// Unix timestamp; identical to the value signed into `hmac`.
    pub timestamp: i64,
    /// Base64-encoded HMAC-SHA256 signature.
    pub hmac: String,
    /// Signature scheme version; always 2.
    pub hmac_version: u8,
    /// The action parameters.
    pub parameters: Map<String, Value>,
}

/// The full request envelope: the token plus a single-element action list.
#[derive(Clone, Debug, Serialize)]
pub struct ApiEnvelope {
    /// The API token.
    pub token: String,
    /// The request body holding the action list.
    pub request: ActionList,
}

/// The `request` object of the envelope.
#[derive(Clone, Debug, Serialize)]
pub struct ActionList {
    /// The signed actions; exactly one per envelope in this client.
    pub actions: Vec<SignedAction>,
}

impl ApiEnvelope {
    /// Wraps a single signed action in an envelope.
    #[must_use]
    pub fn single(token: impl Into<String>, action: SignedAction) -> Self {
        Self {
            token: token.into(),
            request: ActionList {
                actions: vec![action],
            },
        }
    }

    /// Returns the envelope's only action.
    ///
    /// # Panics
    ///
    /// Never panics for envelopes built with [`ApiEnvelope::single`].
    #[must_use]
    pub fn action(&self) -> &SignedAction {
        &self.request.actions[0]
    }
}

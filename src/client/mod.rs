//! Client types for onOffice API communication.
//!
//! This module provides the request/authentication/pagination layer for the
//! onOffice API: signed single requests through [`OnOfficeClient`], response
//! classification into typed errors, and the pagination loops in
//! [`pagination`].
//!
//! # Overview
//!
//! - [`OnOfficeClient`]: signs and executes one action per call
//! - [`ApiRequest`]: an unsigned action description with a builder
//! - [`ApiEnvelope`] / [`SignedAction`]: the wire request format
//! - [`ApiResponse`]: decoded response body with dotted-path access
//! - [`Transport`] / [`HttpTransport`]: pluggable request channel
//! - [`pagination`]: accumulating and streaming fetch loops
//! - [`params`]: reserved parameter keys
//!
//! # Example
//!
//! ```rust,ignore
//! use onoffice_api::{Action, ApiRequest, OnOfficeClient, ResourceType};
//! use onoffice_api::client::params;
//!
//! let client = OnOfficeClient::with_http(config);
//!
//! let response = client
//!     .send(
//!         ApiRequest::builder(Action::Read, ResourceType::Address)
//!             .parameter(params::LIST_LIMIT, 20)
//!             .build(),
//!     )
//!     .await?;
//! ```

mod action;
#[allow(clippy::module_inception)]
mod client;
mod errors;
pub mod pagination;
pub mod params;
mod request;
mod response;
mod transport;

pub use action::{Action, ResourceId, ResourceType};
pub use client::OnOfficeClient;
pub use errors::{
    OnOfficeError, ResponseError, StrayRequestError, TransportError, UnsupportedOperationError,
};
pub use pagination::{fetch_all, fetch_all_chunked, FetchOptions, DEFAULT_PAGE_SIZE};
pub use request::{ActionList, ApiEnvelope, ApiRequest, ApiRequestBuilder, SignedAction};
pub use response::{paths, ApiResponse};
pub use transport::{HttpTransport, Transport, SDK_VERSION};

//! # onOffice API Rust SDK
//!
//! A Rust client for the onOffice API, providing signed request execution,
//! multi-level error classification, and pagination over listing resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OnOfficeConfig`] and [`OnOfficeConfigBuilder`]
//! - Validated newtypes for the API credentials ([`ApiToken`], [`ApiSecret`])
//! - Per-request HMAC-SHA256 signing via [`auth::hmac`]
//! - A request executor that classifies the nested response envelope into
//!   typed errors ([`OnOfficeClient`])
//! - Accumulating and streaming pagination loops ([`client::pagination`])
//! - A pluggable transport seam with a production HTTP implementation
//!   ([`client::HttpTransport`]) and a test fake ([`testing::FakeTransport`])
//!
//! ## Quick Start
//!
//! ```rust
//! use onoffice_api::{ApiSecret, ApiToken, OnOfficeConfig};
//!
//! let config = OnOfficeConfig::builder()
//!     .token(ApiToken::new("your-token").unwrap())
//!     .secret(ApiSecret::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use onoffice_api::{Action, ApiRequest, OnOfficeClient, ResourceType};
//! use onoffice_api::client::params;
//!
//! let client = OnOfficeClient::with_http(config);
//!
//! let response = client
//!     .send(
//!         ApiRequest::builder(Action::Read, ResourceType::Estate)
//!             .parameter(params::LIST_LIMIT, 20)
//!             .build(),
//!     )
//!     .await?;
//! ```
//!
//! ## Pagination
//!
//! Listing resources report their absolute record count in the first
//! response; the pagination loops derive the page count from it and fetch
//! sequentially. A failing page never aborts the run: the error is logged
//! and the records fetched so far are returned.
//!
//! ```rust,ignore
//! use onoffice_api::client::pagination::{fetch_all, FetchOptions};
//! use onoffice_api::client::params;
//! use onoffice_api::{Action, ApiRequest, ResourceType};
//!
//! let estates = fetch_all(
//!     |page_size, offset| {
//!         client.send(
//!             ApiRequest::builder(Action::Read, ResourceType::Estate)
//!                 .parameter(params::LIST_LIMIT, page_size)
//!                 .parameter(params::LIST_OFFSET, offset)
//!                 .build(),
//!         )
//!     },
//!     FetchOptions::default().take(1000),
//! )
//! .await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Single-request calls always raise**: Only the pagination loops
//!   convert failures into logged partial results

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod testing;

// Re-export public types at crate root for convenience
pub use config::{ApiSecret, ApiToken, OnOfficeConfig, OnOfficeConfigBuilder, DEFAULT_API_URL};
pub use error::ConfigError;

// Re-export client types
pub use client::{
    fetch_all, fetch_all_chunked, Action, ApiEnvelope, ApiRequest, ApiRequestBuilder, ApiResponse,
    FetchOptions, HttpTransport, OnOfficeClient, OnOfficeError, ResourceId, ResourceType,
    ResponseError, SignedAction, StrayRequestError, Transport, TransportError,
    UnsupportedOperationError,
};

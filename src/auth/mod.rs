//! Authentication support for the onOffice API SDK.
//!
//! Every onOffice action is individually signed: the request carries an
//! HMAC-SHA256 signature derived from the shared secret and the identity
//! fields of the action. This module provides the signing primitive; the
//! [`OnOfficeClient`](crate::OnOfficeClient) applies it automatically when
//! sending requests.
//!
//! # Example
//!
//! ```rust
//! use onoffice_api::auth::hmac::sign_action;
//!
//! let hmac = sign_action("secret", 1_700_000_000, "token", "estate",
//!     "urn:onoffice-de-ns:smart:2.5:smartml:action:read");
//! assert_eq!(hmac.len(), 44); // Base64 of a 32-byte digest
//! ```

pub mod hmac;

pub use hmac::sign_action;

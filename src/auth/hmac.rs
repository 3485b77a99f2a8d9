//! HMAC signing for onOffice API requests.
//!
//! onOffice authenticates each action with an HMAC-SHA256 signature (the
//! version 2 scheme). The signature is computed over the concatenated values
//! of the `timestamp`, `token`, `resourcetype` and `actionid` fields, in
//! exactly that order and without separators, keyed by the API secret. The
//! raw binary digest is then base64 encoded.
//!
//! The concatenation order is load-bearing: the historical association with
//! field names is irrelevant, only the positional order of the values
//! matters. The implementation therefore feeds the values to the MAC in an
//! explicit sequence rather than iterating any keyed mapping.
//!
//! # Example
//!
//! ```rust
//! use onoffice_api::auth::hmac::sign_action;
//!
//! let sig = sign_action("secret", 1_700_000_000, "token", "estate",
//!     "urn:onoffice-de-ns:smart:2.5:smartml:action:read");
//!
//! // Identical inputs always produce the identical signature
//! let again = sign_action("secret", 1_700_000_000, "token", "estate",
//!     "urn:onoffice-de-ns:smart:2.5:smartml:action:read");
//! assert_eq!(sig, again);
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 signature for an onOffice action.
///
/// # Arguments
///
/// * `secret` - The API secret used as the MAC key
/// * `timestamp` - Unix timestamp of the request; must be the same value
///   that is transmitted in the action's `timestamp` field
/// * `token` - The API token
/// * `resource_type` - The wire value of the action's resource type
/// * `action_id` - The wire value of the action id (URN)
///
/// # Returns
///
/// A base64-encoded HMAC-SHA256 signature (RFC 4648 standard alphabet).
///
/// # Note
///
/// This function uses `expect()` internally but this will never panic because
/// HMAC-SHA256 accepts keys of any length.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn sign_action(
    secret: &str,
    timestamp: i64,
    token: &str,
    resource_type: &str,
    action_id: &str,
) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    // Positional order: timestamp, token, resourcetype, actionid.
    mac.update(timestamp.to_string().as_bytes());
    mac.update(token.as_bytes());
    mac.update(resource_type.as_bytes());
    mac.update(action_id.as_bytes());
    let result = mac.finalize();
    BASE64.encode(result.into_bytes())
}

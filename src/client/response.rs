//! Response types for the onOffice API.
//!
//! The onOffice response envelope is a deeply nested JSON structure whose
//! interesting fields live behind fixed dotted paths. [`ApiResponse`] owns
//! the decoded body and exposes dotted-path accessors; every field is
//! optional and reads fall back to documented defaults.

use serde_json::Value;

/// Dotted paths into the response envelope consumed by this crate.
///
/// These must stay bit-exact for compatibility with the onOffice API.
pub mod paths {
    /// Top-level status code.
    pub const STATUS_CODE: &str = "status.code";
    /// Top-level API error code.
    pub const STATUS_ERROR_CODE: &str = "status.errorcode";
    /// Top-level status message.
    pub const STATUS_MESSAGE: &str = "status.message";
    /// Error code of the first result.
    pub const RESULT_ERROR_CODE: &str = "response.results.0.status.errorcode";
    /// Status message of the first result.
    pub const RESULT_MESSAGE: &str = "response.results.0.status.message";
    /// Absolute record count of the first result.
    pub const COUNT_ABSOLUTE: &str = "response.results.0.data.meta.cntabsolute";
    /// Record list of the first result.
    pub const RECORDS: &str = "response.results.0.data.records";
}

/// A decoded onOffice API response.
///
/// Wraps the raw JSON body received from the transport. Accessors walk
/// dotted paths where a numeric segment indexes into arrays, mirroring the
/// envelope layout (`response.results.0.data.records`).
///
/// # Example
///
/// ```rust
/// use onoffice_api::client::{paths, ApiResponse};
/// use serde_json::json;
///
/// let response = ApiResponse::new(json!({
///     "status": {"code": 200},
///     "response": {"results": [
///         {"data": {"meta": {"cntabsolute": 1300}, "records": [{"id": 1}]}}
///     ]}
/// }));
///
/// assert_eq!(response.int_at(paths::STATUS_CODE, 500), 200);
/// assert_eq!(response.int_at(paths::COUNT_ABSOLUTE, 0), 1300);
/// assert_eq!(response.records_at(paths::RECORDS).unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    body: Value,
}

impl ApiResponse {
    /// Wraps a decoded response body.
    #[must_use]
    pub const fn new(body: Value) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Returns the value at a dotted path, if present.
    ///
    /// Numeric path segments index into arrays; all other segments access
    /// object keys.
    #[must_use]
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.body, |value, segment| {
            match segment.parse::<usize>() {
                Ok(index) => value.as_array()?.get(index),
                Err(_) => value.as_object()?.get(segment),
            }
        })
    }

    /// Returns the integer at a dotted path, or `default` when the path is
    /// absent or not a number.
    #[must_use]
    pub fn int_at(&self, path: &str, default: i64) -> i64 {
        self.value_at(path)
            .and_then(Value::as_i64)
            .unwrap_or(default)
    }

    /// Returns the string at a dotted path, or `default` when the path is
    /// absent or not a string.
    #[must_use]
    pub fn str_at(&self, path: &str, default: &str) -> String {
        self.value_at(path)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// Returns the array at a dotted path, if present and array-shaped.
    #[must_use]
    pub fn records_at(&self, path: &str) -> Option<&Vec<Value>> {
        self.value_at(path).and_then(Value::as_array)
    }

    /// Returns the top-level status code (default 500).
    #[must_use]
    pub fn status_code(&self) -> i64 {
        self.int_at(paths::STATUS_CODE, 500)
    }

    /// Returns the top-level API error code (default 0).
    #[must_use]
    pub fn status_error_code(&self) -> i64 {
        self.int_at(paths::STATUS_ERROR_CODE, 0)
    }

    /// Returns the top-level status message (default empty).
    #[must_use]
    pub fn status_message(&self) -> String {
        self.str_at(paths::STATUS_MESSAGE, "")
    }

    /// Returns the first result's error code (default 0).
    #[must_use]
    pub fn result_error_code(&self) -> i64 {
        self.int_at(paths::RESULT_ERROR_CODE, 0)
    }

    /// Returns the first result's status message (default empty).
    #[must_use]
    pub fn result_message(&self) -> String {
        self.str_at(paths::RESULT_MESSAGE, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope() -> ApiResponse {
        ApiResponse::new(json!({
            "status": {"code": 200, "errorcode": 0, "message": "OK"},
            "response": {"results": [{
                "status": {"errorcode": 0, "message": ""},
                "data": {
                    "meta": {"cntabsolute": 1300},
                    "records": [{"id": 1}, {"id": 2}]
                }
            }]}
        }))
    }

    #[test]
    fn test_value_at_walks_objects_and_arrays() {
        let response = envelope();
        assert_eq!(
            response.value_at("response.results.0.data.records.1.id"),
            Some(&json!(2))
        );
    }

    #[test]
    fn test_value_at_missing_path_is_none() {
        let response = envelope();
        assert!(response.value_at("response.results.5.data").is_none());
        assert!(response.value_at("nope.nested").is_none());
    }

    #[test]
    fn test_int_at_uses_default_for_missing_or_non_numeric() {
        let response = ApiResponse::new(json!({"status": {"code": "weird"}}));
        assert_eq!(response.int_at(paths::STATUS_CODE, 500), 500);
        assert_eq!(response.int_at("status.errorcode", 0), 0);
    }

    #[test]
    fn test_default_status_code_is_500() {
        let response = ApiResponse::new(json!({}));
        assert_eq!(response.status_code(), 500);
        assert_eq!(response.status_error_code(), 0);
        assert_eq!(response.result_error_code(), 0);
        assert_eq!(response.status_message(), "");
        assert_eq!(response.result_message(), "");
    }

    #[test]
    fn test_records_at_requires_array_shape() {
        let response = envelope();
        assert_eq!(response.records_at(paths::RECORDS).unwrap().len(), 2);

        let scalar = ApiResponse::new(json!({
            "response": {"results": [{"data": {"records": "oops"}}]}
        }));
        assert!(scalar.records_at(paths::RECORDS).is_none());
    }

    #[test]
    fn test_null_body_yields_defaults() {
        let response = ApiResponse::new(Value::Null);
        assert_eq!(response.status_code(), 500);
        assert!(response.records_at(paths::RECORDS).is_none());
    }
}

//! Pagination over onOffice listing requests.
//!
//! The API reports the absolute record count of a listing in the first
//! response (`cntabsolute`); the page count is derived from it exactly once
//! and drives a sequential fetch loop. Two variants exist:
//!
//! - [`fetch_all`] accumulates every record and returns them in one vector
//! - [`fetch_all_chunked`] hands each page to a callback without
//!   accumulating
//!
//! Both take a caller-supplied page factory: a closure receiving
//! `(page_size, offset)` and performing one client request with whatever
//! resource-specific parameters it needs. A factory failure never
//! propagates; the run logs the error and ends with whatever was fetched so
//! far. Single-request callers see every failure through
//! [`OnOfficeClient::send`](crate::OnOfficeClient::send); bulk callers get
//! best-effort partial data instead of an aborted operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use onoffice_api::client::pagination::{fetch_all, FetchOptions};
//! use onoffice_api::client::params;
//! use onoffice_api::{Action, ApiRequest, ResourceType};
//!
//! let records = fetch_all(
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

use std::future::Future;

use serde_json::Value;

use crate::client::errors::OnOfficeError;
use crate::client::response::{paths, ApiResponse};

/// Default page size of a pagination run.
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// Options for a pagination run.
///
/// The defaults match the canonical onOffice listing envelope; the result
/// and count paths only need changing for non-standard resources.
///
/// # Example
///
/// ```rust
/// use onoffice_api::client::pagination::FetchOptions;
///
/// let options = FetchOptions::default().page_size(100).take(250);
/// ```
#[derive(Clone, Debug)]
pub struct FetchOptions {
    result_path: String,
    count_path: String,
    page_size: usize,
    offset: usize,
    take: Option<usize>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            result_path: paths::RECORDS.to_string(),
            count_path: paths::COUNT_ABSOLUTE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
            take: None,
        }
    }
}

impl FetchOptions {
    /// Sets the dotted path to the page's record list.
    #[must_use]
    pub fn result_path(mut self, path: impl Into<String>) -> Self {
        self.result_path = path.into();
        self
    }

    /// Sets the dotted path to the absolute record count.
    #[must_use]
    pub fn count_path(mut self, path: impl Into<String>) -> Self {
        self.count_path = path.into();
        self
    }

    /// Sets the page size. Clamped to a minimum of 1.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Sets the starting offset.
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Caps the total number of records the run may produce.
    #[must_use]
    pub const fn take(mut self, take: usize) -> Self {
        self.take = Some(take);
        self
    }
}

/// Fetches every page of a listing and accumulates the records.
///
/// The page count is derived from the first response as
/// `ceil(cntabsolute / page_size)` and never recomputed, even if later
/// pages report a different total. When a `take` cap is set and the
/// accumulation exceeds it, the result is truncated to exactly `take`
/// records and the run stops.
///
/// A page-factory failure logs the error and returns the records
/// accumulated so far; it is never propagated.
pub async fn fetch_all<F, Fut>(mut page_factory: F, options: FetchOptions) -> Vec<Value>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<ApiResponse, OnOfficeError>>,
{
    let FetchOptions {
        result_path,
        count_path,
        page_size,
        mut offset,
        take,
    } = options;

    let mut max_page = 0_usize;
    let mut records: Vec<Value> = Vec::new();

    loop {
        let response = match page_factory(page_size, offset).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("onOffice page request failed: {err}");
                return records;
            }
        };

        // The page count is derived exactly once, from the first response.
        if max_page == 0 {
            let total = usize::try_from(response.int_at(&count_path, 0)).unwrap_or(0);
            max_page = total.div_ceil(page_size);
        }

        if let Some(page_records) = response.records_at(&result_path) {
            records.extend(page_records.iter().cloned());
        }

        if let Some(take) = take {
            if records.len() > take {
                records.truncate(take);
                break;
            }
        }

        offset += page_size;
        let current_page = offset / page_size;
        if max_page <= current_page {
            break;
        }
    }

    records
}

/// Fetches every page of a listing, delivering each page to a callback.
///
/// Unlike [`fetch_all`], records are never accumulated internally. When a
/// `take` cap is set, the count used for the page-count derivation is
/// clamped to it (no pages beyond the cap are requested) and the final page
/// is truncated before delivery so the cumulative delivered count never
/// exceeds `take`.
///
/// A page-factory failure logs the error and returns without invoking the
/// callback for that page; pages already delivered are not retracted.
///
/// Page sizes are assumed uniform except possibly for the last page; the
/// behavior when the API returns a different page size than requested is
/// undefined.
pub async fn fetch_all_chunked<F, Fut, C>(
    mut page_factory: F,
    mut on_page: C,
    options: FetchOptions,
) where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<ApiResponse, OnOfficeError>>,
    C: FnMut(Vec<Value>),
{
    let FetchOptions {
        result_path,
        count_path,
        page_size,
        mut offset,
        take,
    } = options;

    let mut max_page = 0_usize;
    let mut element_count = 0_usize;

    loop {
        let response = match page_factory(page_size, offset).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("onOffice page request failed: {err}");
                return;
            }
        };

        if max_page == 0 {
            let mut total = usize::try_from(response.int_at(&count_path, 0)).unwrap_or(0);
            // Clamp to the cap so no pages beyond it are requested.
            if let Some(take) = take {
                total = total.min(take);
            }
            max_page = total.div_ceil(page_size);
        }

        let mut elements: Vec<Value> = response
            .records_at(&result_path)
            .cloned()
            .unwrap_or_default();
        element_count += elements.len();

        if let Some(take) = take {
            if element_count > take {
                let keep = take.saturating_sub(element_count - elements.len());
                elements.truncate(keep);
            }
        }

        on_page(elements);

        offset += page_size;
        let current_page = offset / page_size;
        if max_page <= current_page {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    fn page_body(ids: std::ops::Range<usize>, total: i64) -> ApiResponse {
        let records: Vec<Value> = ids.map(|id| json!({"id": id})).collect();
        ApiResponse::new(json!({
            "status": {"code": 200},
            "response": {"results": [{
                "data": {"meta": {"cntabsolute": total}, "records": records}
            }]}
        }))
    }

    #[tokio::test]
    async fn test_page_count_derivation_visits_expected_offsets() {
        let offsets = RefCell::new(Vec::new());

        let records = fetch_all(
            |page_size, offset| {
                offsets.borrow_mut().push(offset);
                let body = page_body(offset..offset + page_size, 1300);
                async move { Ok(body) }
            },
            FetchOptions::default(),
        )
        .await;

        assert_eq!(*offsets.borrow(), vec![0, 500, 1000]);
        assert_eq!(records.len(), 1500);
    }

    #[tokio::test]
    async fn test_take_truncates_and_stops_early() {
        let calls = RefCell::new(0);

        let records = fetch_all(
            |page_size, offset| {
                *calls.borrow_mut() += 1;
                let body = page_body(offset..offset + page_size, 30);
                async move { Ok(body) }
            },
            FetchOptions::default().page_size(10).take(15),
        )
        .await;

        assert_eq!(records.len(), 15);
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test]
    async fn test_take_equal_to_page_total_does_not_truncate_early() {
        // 20 > 15 triggers truncation; an exact match keeps looping.
        let records = fetch_all(
            |page_size, offset| {
                let body = page_body(offset..offset + page_size, 20);
                async move { Ok(body) }
            },
            FetchOptions::default().page_size(10).take(20),
        )
        .await;

        assert_eq!(records.len(), 20);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_partial_result() {
        let records = fetch_all(
            |page_size, offset| {
                let result = if offset == 0 {
                    Ok(page_body(0..page_size, 1000))
                } else {
                    Err(OnOfficeError::Transport(
                        crate::client::errors::TransportError {
                            code: 500,
                            message: "Status code: 500".to_string(),
                        },
                    ))
                };
                async move { result }
            },
            FetchOptions::default().page_size(10),
        )
        .await;

        assert_eq!(records.len(), 10);
    }

    #[tokio::test]
    async fn test_missing_records_contribute_nothing() {
        let records = fetch_all(
            |_page_size, _offset| async move {
                Ok(ApiResponse::new(json!({
                    "status": {"code": 200},
                    "response": {"results": [{"data": {"meta": {"cntabsolute": 5}}}]}
                })))
            },
            FetchOptions::default(),
        )
        .await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_chunked_take_clamps_page_count_and_last_chunk() {
        let chunks = RefCell::new(Vec::new());
        let requests = RefCell::new(0);

        fetch_all_chunked(
            |page_size, offset| {
                *requests.borrow_mut() += 1;
                let body = page_body(offset..offset + page_size, 30);
                async move { Ok(body) }
            },
            |page| chunks.borrow_mut().push(page.len()),
            FetchOptions::default().page_size(10).take(12),
        )
        .await;

        // ceil(12 / 10) = 2 pages, not ceil(30 / 10) = 3.
        assert_eq!(*requests.borrow(), 2);
        assert_eq!(*chunks.borrow(), vec![10, 2]);
    }

    #[tokio::test]
    async fn test_chunked_failure_skips_callback_for_failed_page() {
        let chunks = RefCell::new(Vec::new());

        fetch_all_chunked(
            |page_size, offset| {
                let result = if offset == 0 {
                    Ok(page_body(0..page_size, 100))
                } else {
                    Err(OnOfficeError::Transport(
                        crate::client::errors::TransportError {
                            code: 500,
                            message: "Status code: 500".to_string(),
                        },
                    ))
                };
                async move { result }
            },
            |page| chunks.borrow_mut().push(page.len()),
            FetchOptions::default().page_size(10),
        )
        .await;

        assert_eq!(*chunks.borrow(), vec![10]);
    }

    #[tokio::test]
    async fn test_chunked_missing_records_deliver_empty_page() {
        let chunks = RefCell::new(Vec::new());

        fetch_all_chunked(
            |_page_size, _offset| async move {
                Ok(ApiResponse::new(json!({
                    "status": {"code": 200},
                    "response": {"results": [{"data": {"meta": {"cntabsolute": 0}}}]}
                })))
            },
            |page: Vec<Value>| chunks.borrow_mut().push(page.len()),
            FetchOptions::default(),
        )
        .await;

        assert_eq!(*chunks.borrow(), vec![0]);
    }

    #[tokio::test]
    async fn test_zero_count_still_fetches_first_page() {
        let calls = RefCell::new(0);

        let records = fetch_all(
            |_page_size, _offset| {
                *calls.borrow_mut() += 1;
                async move {
                    Ok(ApiResponse::new(json!({
                        "status": {"code": 200},
                        "response": {"results": [{
                            "data": {"meta": {"cntabsolute": 0}, "records": []}
                        }]}
                    })))
                }
            },
            FetchOptions::default(),
        )
        .await;

        assert_eq!(*calls.borrow(), 1);
        assert!(records.is_empty());
    }
}

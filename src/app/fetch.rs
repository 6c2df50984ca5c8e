// HookLog - app/fetch.rs
//
// Page fetch lifecycle. Each page request runs on a background thread and
// its outcome is sent to the UI thread via an mpsc channel.
//
// Architecture:
//   - `FetchManager` lives on the UI thread; `run_fetch` runs on a worker thread.
//   - Every outcome carries the `request_id` of the request that produced it.
//     The browser state compares it with the latest issued id and drops
//     superseded outcomes, so no cancellation primitive is needed.
//   - Failures are reported once. There is no retry; the user refreshes.

use crate::core::model::{PageRequest, PageResult};
use crate::util::error::FetchError;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

/// Something that can produce one page of records.
///
/// Implemented by the HTTP client and by in-memory sources in tests.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, FetchError>;
}

/// Result of one page request, tagged with the id of that request.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub result: Result<PageResult, FetchError>,
}

/// Dispatches page requests to worker threads and collects their outcomes.
pub struct FetchManager {
    source: Arc<dyn PageSource>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
}

impl FetchManager {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            source,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Run `request` on a new background thread.
    ///
    /// Earlier requests keep running; their outcomes are discarded by the
    /// browser state when they arrive.
    pub fn dispatch(&self, request: PageRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();

        tracing::debug!(
            request_id = request.request_id,
            page = request.page,
            per_page = request.per_page,
            filter = request.filter.gateway().unwrap_or(""),
            "Dispatching page request"
        );

        std::thread::spawn(move || run_fetch(source.as_ref(), request, tx));
    }

    /// Poll for outcomes without blocking. Returns all pending outcomes.
    pub fn poll(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Block until the outcome for `request_id` arrives or `timeout` elapses.
    ///
    /// Outcomes for other requests received while waiting are returned too,
    /// in arrival order, so the caller can feed them through the same path
    /// as `poll`.
    pub fn wait_for(&self, request_id: u64, timeout: Duration) -> Vec<FetchOutcome> {
        let deadline = Instant::now() + timeout;
        let mut outcomes = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.outcome_rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    let done = outcome.request_id == request_id;
                    outcomes.push(outcome);
                    if done {
                        return outcomes;
                    }
                }
                Err(_) => return outcomes,
            }
        }
    }
}

/// Worker body: fetch one page and report the outcome.
fn run_fetch(source: &dyn PageSource, request: PageRequest, tx: mpsc::Sender<FetchOutcome>) {
    let started = Instant::now();
    let result = source.fetch_page(&request);

    match &result {
        Ok(page) => tracing::info!(
            request_id = request.request_id,
            page = request.page,
            records = page.records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Page fetched"
        ),
        Err(e) => tracing::warn!(
            request_id = request.request_id,
            page = request.page,
            error = %e,
            "Page fetch failed"
        ),
    }

    // Receiver dropped means the UI has closed; nothing to report to.
    let _ = tx.send(FetchOutcome {
        request_id: request.request_id,
        result,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterState;
    use crate::core::model::Pagination;

    struct EchoSource;

    impl PageSource for EchoSource {
        fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, FetchError> {
            if request.page == 99 {
                return Err(FetchError::Status {
                    url: "http://test/webhooks".to_string(),
                    status: 500,
                });
            }
            Ok(PageResult {
                records: Vec::new(),
                pagination: Some(Pagination {
                    current_page: request.page,
                    per_page: Some(request.per_page),
                    total: 0,
                    last_page: 1,
                    from: None,
                    to: None,
                }),
            })
        }
    }

    fn request(request_id: u64, page: u32) -> PageRequest {
        PageRequest {
            request_id,
            page,
            per_page: 25,
            filter: FilterState::default(),
        }
    }

    #[test]
    fn test_outcome_carries_request_id() {
        let manager = FetchManager::new(Arc::new(EchoSource));
        manager.dispatch(request(7, 3));
        let outcomes = manager.wait_for(7, Duration::from_secs(5));
        let outcome = outcomes.last().expect("outcome");
        assert_eq!(outcome.request_id, 7);
        let page = outcome.result.as_ref().unwrap();
        assert_eq!(page.pagination.unwrap().current_page, 3);
    }

    #[test]
    fn test_error_is_delivered() {
        let manager = FetchManager::new(Arc::new(EchoSource));
        manager.dispatch(request(1, 99));
        let outcomes = manager.wait_for(1, Duration::from_secs(5));
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_poll_is_empty_without_requests() {
        let manager = FetchManager::new(Arc::new(EchoSource));
        assert!(manager.poll().is_empty());
    }
}

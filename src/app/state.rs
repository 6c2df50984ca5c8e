// HookLog - app/state.rs
//
// Browser state: the paginated, filterable record list with a single
// detail overlay. Owned by the eframe::App implementation.
//
// Every operation that needs data returns the `PageRequest` to dispatch and
// records its id as the latest one. Outcomes with any other id are stale and
// are ignored, so a slow response can never overwrite newer state.
//
// Failure policy: a failed fetch switches the view to the failure state and
// closes the detail overlay, but the last good page stays in memory (its
// pagination still bounds `set_page`). It is shown again only after a
// successful fetch replaces it.

use crate::app::fetch::FetchOutcome;
use crate::core::filter::FilterState;
use crate::core::model::{LogRecord, PageRequest, PageResult, Pagination, RecordId};
use crate::core::summary::{self, PageSummary};
use crate::util::constants;

/// Generic message shown for any fetch failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load webhook logs";

/// Message shown when a valid response carries no records.
pub const EMPTY_MESSAGE: &str = "No webhook logs found";

/// What the list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// A non-empty page is displayed.
    Loaded,
    /// The backend answered with zero records.
    Empty,
    /// The latest request failed.
    Failed { message: String },
}

/// Top-level browser state.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    /// Records requested per page.
    per_page: u32,

    /// Current server-side filter.
    filter: FilterState,

    /// Current 1-based page number.
    page: u32,

    /// Most recent successfully fetched page.
    page_result: Option<PageResult>,

    /// What the list area shows.
    load_state: LoadState,

    /// Record shown in the detail overlay, if any.
    selected_id: Option<RecordId>,

    /// Id of the most recently issued request. 0 = none issued.
    latest_request_id: u64,

    /// Gateway choices offered by the filter bar.
    pub gateways: Vec<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the page summary window.
    pub show_summary: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl BrowserState {
    /// Create initial state. No request is issued until `load` is called.
    pub fn new(per_page: u32, gateways: Vec<String>, filter: FilterState, debug_mode: bool) -> Self {
        Self {
            per_page: per_page.max(1),
            filter,
            page: 1,
            page_result: None,
            load_state: LoadState::Idle,
            selected_id: None,
            latest_request_id: 0,
            gateways,
            status_message: "Ready.".to_string(),
            show_summary: false,
            show_about: false,
            dark_mode: true,
            debug_mode,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Pagination metadata from the last good page.
    pub fn pagination(&self) -> Option<&Pagination> {
        self.page_result.as_ref().and_then(|p| p.pagination.as_ref())
    }

    /// Last page number, if known.
    pub fn last_page(&self) -> Option<u32> {
        self.pagination().map(Pagination::last_page)
    }

    /// Records to render as table rows. Empty unless a page is displayed.
    pub fn visible_records(&self) -> &[LogRecord] {
        match (&self.load_state, &self.page_result) {
            (LoadState::Loaded, Some(page)) => &page.records,
            _ => &[],
        }
    }

    /// The record shown in the detail overlay, if any.
    pub fn selected_record(&self) -> Option<&LogRecord> {
        let id = self.selected_id.as_ref()?;
        self.page_result.as_ref().and_then(|p| p.record(id))
    }

    /// Summary of the displayed page.
    pub fn page_summary(&self) -> PageSummary {
        summary::summarise(self.visible_records())
    }

    /// Previous-page control is enabled.
    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    /// Next-page control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.last_page().is_some_and(|last| self.page < last)
    }

    /// "Showing X to Y of Z results", when metadata is available.
    pub fn range_label(&self) -> Option<String> {
        let p = self.pagination()?;
        let from = p.from.map(|v| v.to_string()).unwrap_or_else(|| "0".to_string());
        let to = p.to.map(|v| v.to_string()).unwrap_or_else(|| "0".to_string());
        Some(format!("Showing {from} to {to} of {} results", p.total))
    }

    /// "Page X of Y", when metadata is available.
    pub fn page_label(&self) -> Option<String> {
        self.last_page()
            .map(|last| format!("Page {} of {last}", self.page))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Issue the first fetch for the current filter and page.
    pub fn load(&mut self) -> PageRequest {
        self.issue_request()
    }

    /// Replace the filter and go back to page 1.
    pub fn set_filter(&mut self, value: &str) -> PageRequest {
        self.filter = FilterState::gateway_only(value);
        self.page = 1;
        self.selected_id = None;
        tracing::debug!(filter = %self.filter.label(), "Filter changed");
        self.issue_request()
    }

    /// Go to page `n`. Returns `None` (and changes nothing) when `n` is
    /// outside `[1, last_page]`. Before any metadata is known only `n >= 1`
    /// is enforced.
    pub fn set_page(&mut self, n: u32) -> Option<PageRequest> {
        if n < 1 {
            return None;
        }
        if let Some(last) = self.last_page() {
            if n > last {
                tracing::debug!(requested = n, last_page = last, "Page out of range ignored");
                return None;
            }
        }
        self.page = n;
        self.selected_id = None;
        Some(self.issue_request())
    }

    /// Go to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if !self.can_go_next() {
            return None;
        }
        self.set_page(self.page + 1)
    }

    /// Go to the previous page, if there is one.
    pub fn prev_page(&mut self) -> Option<PageRequest> {
        if !self.can_go_prev() {
            return None;
        }
        self.set_page(self.page - 1)
    }

    /// Re-issue the fetch for the current filter and page.
    pub fn refresh(&mut self) -> PageRequest {
        self.issue_request()
    }

    /// Open the detail overlay for a record on the current page.
    /// Returns false (and changes nothing) if no such record is displayed.
    pub fn select_record(&mut self, id: &RecordId) -> bool {
        if self.visible_records().iter().any(|r| &r.id == id) {
            self.selected_id = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Close the detail overlay. No request is issued.
    pub fn close_detail(&mut self) {
        self.selected_id = None;
    }

    /// Apply a fetch outcome. Returns false if it was stale and ignored.
    pub fn apply_response(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.request_id != self.latest_request_id {
            tracing::debug!(
                request_id = outcome.request_id,
                latest = self.latest_request_id,
                "Discarding stale response"
            );
            return false;
        }

        match outcome.result {
            Ok(page) => {
                if let Some(p) = page.pagination {
                    // The backend is authoritative about which page it served.
                    self.page = p.current_page.clamp(1, p.last_page());
                }
                self.load_state = if page.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Loaded
                };
                if self
                    .selected_id
                    .as_ref()
                    .is_some_and(|id| page.record(id).is_none())
                {
                    self.selected_id = None;
                }
                self.status_message = match page.pagination {
                    Some(p) => format!("Loaded {} of {} records.", page.records.len(), p.total),
                    None => format!("Loaded {} records.", page.records.len()),
                };
                self.page_result = Some(page);
            }
            Err(e) => {
                tracing::warn!(error = %e, page = self.page, "Keeping last good page after failure");
                self.load_state = LoadState::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
                self.selected_id = None;
                self.status_message = format!("{LOAD_FAILED_MESSAGE}. Press Refresh to retry.");
            }
        }
        true
    }

    /// Allocate a new request id and mark the list as loading.
    fn issue_request(&mut self) -> PageRequest {
        self.latest_request_id += 1;
        self.load_state = LoadState::Loading;
        self.status_message = format!("Loading page {}...", self.page);
        PageRequest {
            request_id: self.latest_request_id,
            page: self.page,
            per_page: self.per_page,
            filter: self.filter.clone(),
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_PER_PAGE,
            constants::DEFAULT_GATEWAYS
                .iter()
                .map(|g| g.to_string())
                .collect(),
            FilterState::default(),
            false,
        )
    }
}

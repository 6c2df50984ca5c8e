// HookLog - core/summary.rs
//
// Per-page statistics: counts by status class and by gateway.
// Computed over the records currently held, never over the whole backend set.

use crate::core::model::{LogRecord, StatusClass};
use std::collections::BTreeMap;

/// Counts for the records on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub pending: usize,
    /// Records per gateway. Non-webhook records are not counted here.
    pub by_gateway: BTreeMap<String, usize>,
}

impl PageSummary {
    /// Count for a single status class.
    pub fn count(&self, class: StatusClass) -> usize {
        match class {
            StatusClass::Positive => self.positive,
            StatusClass::Negative => self.negative,
            StatusClass::Pending => self.pending,
        }
    }
}

/// Summarise a page of records.
pub fn summarise(records: &[LogRecord]) -> PageSummary {
    let mut summary = PageSummary {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        match record.status_class() {
            StatusClass::Positive => summary.positive += 1,
            StatusClass::Negative => summary.negative += 1,
            StatusClass::Pending => summary.pending += 1,
        }
        if let Some(hook) = record.webhook() {
            let gateway = if hook.gateway.is_empty() {
                "unknown".to_string()
            } else {
                hook.gateway.to_lowercase()
            };
            *summary.by_gateway.entry(gateway).or_insert(0) += 1;
        }
    }

    summary
}

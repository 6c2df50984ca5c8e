// HookLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::core::filter::FilterState;
use crate::util::constants;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Record identifier
// =============================================================================

/// Opaque record identifier.
///
/// Backends send either integers or strings (ULIDs, UUIDs, prefixed keys).
/// Numeric strings are normalised to `Number` so `18` and `"18"` compare
/// equal. Serialises back to the same JSON shape it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    pub fn number(n: u64) -> Self {
        RecordId::Number(n)
    }

    /// Build from a string id. Blank strings are not valid ids.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse::<u64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(trimmed.to_string()),
        })
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Log Record
// =============================================================================

/// One reportable event shown as a row in the list.
///
/// Core fields are typed; gateway-specific data lives in `details` and any
/// field the decoder did not recognise is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Backend identifier, unique within the endpoint.
    pub id: RecordId,

    /// Raw status string as reported by the backend (e.g. "paid", "failed").
    pub status: String,

    /// Time the event was received. `None` if absent or unparseable.
    pub timestamp: Option<DateTime<Utc>>,

    /// Typed, source-specific fields.
    pub details: RecordDetails,

    /// Remaining backend fields, displayed verbatim.
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Semantic class of this record's status.
    pub fn status_class(&self) -> StatusClass {
        StatusClass::classify(&self.status)
    }

    /// Webhook-specific fields, if this record came from the webhook feed.
    pub fn webhook(&self) -> Option<&WebhookDetails> {
        match &self.details {
            RecordDetails::Webhook(w) => Some(w),
            RecordDetails::Generic => None,
        }
    }

    /// Nested structured payload, if any.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.webhook().and_then(|w| w.payload.as_ref())
    }

    /// Payload as 2-space indented JSON, if the record carries one.
    pub fn pretty_payload(&self) -> Option<String> {
        self.payload()
            .and_then(|v| serde_json::to_string_pretty(v).ok())
    }

    /// Every field of the record as (label, value) rows, core fields first
    /// and then the remaining backend fields in key order. The payload is
    /// not included; see `pretty_payload`.
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![("Record ID".to_string(), self.id.to_string())];
        if let Some(hook) = self.webhook() {
            rows.push(("Order Number".to_string(), hook.order_number.clone()));
            rows.push((
                "Transaction ID".to_string(),
                hook.transaction_id
                    .clone()
                    .unwrap_or_else(|| constants::NOT_AVAILABLE.to_string()),
            ));
            rows.push(("Gateway".to_string(), hook.gateway.to_uppercase()));
        }
        rows.push(("Status".to_string(), self.status.clone()));
        rows.push(("Received At".to_string(), self.display_timestamp()));
        for (key, value) in &self.extra {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => constants::NOT_AVAILABLE.to_string(),
                other => other.to_string(),
            };
            rows.push((key.clone(), text));
        }
        rows
    }

    /// Timestamp formatted for display, or "N/A".
    pub fn display_timestamp(&self) -> String {
        self.timestamp
            .map(|t| t.format(constants::TIMESTAMP_DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| constants::NOT_AVAILABLE.to_string())
    }
}

/// Source-specific record fields, tagged by record kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordDetails {
    /// A payment gateway webhook/callback.
    Webhook(WebhookDetails),

    /// Any other record shape; all extra data lives in `LogRecord::extra`.
    Generic,
}

/// Fields carried by a payment gateway webhook record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookDetails {
    /// Order the payment belongs to.
    pub order_number: String,

    /// Gateway-side transaction id. Absent until the gateway assigns one.
    pub transaction_id: Option<String>,

    /// Gateway name (e.g. "razorpay").
    pub gateway: String,

    /// Parsed gateway request/response body.
    pub payload: Option<serde_json::Value>,
}

// =============================================================================
// Status classification
// =============================================================================

/// Semantic status class used for markers and colours.
///
/// The mapping is exact and case-sensitive; everything not explicitly
/// positive or negative is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Positive,
    Negative,
    Pending,
}

impl StatusClass {
    /// Classify a raw status string.
    pub fn classify(status: &str) -> Self {
        if constants::POSITIVE_STATUSES.contains(&status) {
            StatusClass::Positive
        } else if constants::NEGATIVE_STATUSES.contains(&status) {
            StatusClass::Negative
        } else {
            StatusClass::Pending
        }
    }

    /// Returns all variants in display order.
    pub fn all() -> &'static [StatusClass] {
        &[
            StatusClass::Positive,
            StatusClass::Negative,
            StatusClass::Pending,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusClass::Positive => "Succeeded",
            StatusClass::Negative => "Failed",
            StatusClass::Pending => "Pending",
        }
    }

    /// Single-glyph marker shown in the status column.
    pub fn marker(&self) -> &'static str {
        match self {
            StatusClass::Positive => "\u{2714}", // heavy check mark
            StatusClass::Negative => "\u{2716}", // heavy multiplication x
            StatusClass::Pending => "\u{25f7}",  // clock face
        }
    }
}

impl std::fmt::Display for StatusClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Pagination metadata returned alongside a page of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number this response represents.
    pub current_page: u32,

    /// Page size the backend applied.
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Total records across all pages.
    pub total: u64,

    /// Last valid page number.
    pub last_page: u32,

    /// 1-based index of the first record on this page (`None` on an empty page).
    #[serde(default)]
    pub from: Option<u64>,

    /// 1-based index of the last record on this page (`None` on an empty page).
    #[serde(default)]
    pub to: Option<u64>,
}

impl Pagination {
    /// Last page, never below 1 (an empty result set still has page 1).
    pub fn last_page(&self) -> u32 {
        self.last_page.max(1)
    }
}

/// One page of records plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    pub records: Vec<LogRecord>,
    pub pagination: Option<Pagination>,
}

impl PageResult {
    /// True when the response is valid but carries nothing to show.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() || self.pagination.map(|p| p.total == 0).unwrap_or(false)
    }

    /// Find a record on this page by id.
    pub fn record(&self, id: &RecordId) -> Option<&LogRecord> {
        self.records.iter().find(|r| &r.id == id)
    }
}

// =============================================================================
// Page request
// =============================================================================

/// Parameters of a single page fetch.
///
/// `request_id` correlates the eventual response with the request that
/// produced it so superseded responses can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub request_id: u64,
    pub page: u32,
    pub per_page: u32,
    pub filter: FilterState,
}

impl PageRequest {
    /// Query-string pairs for this request. The filter parameter is only
    /// present when a filter is active.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(value) = self.filter.gateway() {
            params.push((constants::FILTER_QUERY_PARAM, value.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_statuses() {
        assert_eq!(StatusClass::classify("paid"), StatusClass::Positive);
        assert_eq!(StatusClass::classify("success"), StatusClass::Positive);
        assert_eq!(StatusClass::classify("completed"), StatusClass::Positive);
    }

    #[test]
    fn test_negative_statuses() {
        assert_eq!(StatusClass::classify("failed"), StatusClass::Negative);
        assert_eq!(StatusClass::classify("cancelled"), StatusClass::Negative);
    }

    #[test]
    fn test_everything_else_is_pending() {
        for status in ["pending", "processing", "", "PAID", "Failed", "refunded"] {
            assert_eq!(
                StatusClass::classify(status),
                StatusClass::Pending,
                "status {status:?}"
            );
        }
    }

    #[test]
    fn test_markers_are_distinct() {
        let markers: std::collections::HashSet<_> =
            StatusClass::all().iter().map(|c| c.marker()).collect();
        assert_eq!(markers.len(), 3);
    }

    #[test]
    fn test_query_params_without_filter() {
        let req = PageRequest {
            request_id: 1,
            page: 3,
            per_page: 25,
            filter: FilterState::default(),
        };
        assert_eq!(
            req.query_params(),
            vec![("page", "3".to_string()), ("per_page", "25".to_string())]
        );
    }

    #[test]
    fn test_query_params_with_filter() {
        let req = PageRequest {
            request_id: 1,
            page: 1,
            per_page: 25,
            filter: FilterState::gateway_only("payu"),
        };
        let params = req.query_params();
        assert!(params.contains(&("gateway", "payu".to_string())));
    }

    fn make_webhook(payload: Option<serde_json::Value>) -> LogRecord {
        LogRecord {
            id: RecordId::number(3),
            status: "paid".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            details: RecordDetails::Webhook(WebhookDetails {
                order_number: "ORD-3".to_string(),
                transaction_id: None,
                gateway: "phonepe".to_string(),
                payload,
            }),
            extra: BTreeMap::from([
                ("note".to_string(), serde_json::json!("retry")),
                ("attempts".to_string(), serde_json::json!(2)),
            ]),
        }
    }

    #[test]
    fn test_pretty_payload_is_indented() {
        let record = make_webhook(Some(serde_json::json!({"event": {"id": "evt_1"}})));
        let text = record.pretty_payload().unwrap();
        assert!(text.contains("\n  \"event\": {\n    \"id\": \"evt_1\""), "{text}");
    }

    #[test]
    fn test_no_payload_no_section() {
        assert!(make_webhook(None).pretty_payload().is_none());
    }

    #[test]
    fn test_detail_rows_cover_all_fields() {
        let rows = make_webhook(None).detail_rows();
        let labels: Vec<_> = rows.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Record ID",
                "Order Number",
                "Transaction ID",
                "Gateway",
                "Status",
                "Received At",
                "attempts",
                "note"
            ]
        );
        assert_eq!(rows[2].1, "N/A");
        assert_eq!(rows[3].1, "PHONEPE");
        assert_eq!(rows[5].1, "Jan 02, 2024 03:04:05");
        assert_eq!(rows[7].1, "retry");
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("18"), Some(RecordId::number(18)));
        assert_eq!(RecordId::parse(" 18 "), Some(RecordId::number(18)));
        assert_eq!(
            RecordId::parse("wh_01HX"),
            Some(RecordId::Text("wh_01HX".to_string()))
        );
        assert_eq!(RecordId::parse("  "), None);
        assert_eq!(RecordId::parse("-4").map(|id| id.to_string()).as_deref(), Some("-4"));
    }

    #[test]
    fn test_record_id_serialises_to_original_shape() {
        assert_eq!(serde_json::to_value(RecordId::number(7)).unwrap(), serde_json::json!(7));
        assert_eq!(
            serde_json::to_value(RecordId::Text("wh_1".into())).unwrap(),
            serde_json::json!("wh_1")
        );
    }

    #[test]
    fn test_page_result_finds_text_id() {
        let mut record = make_webhook(None);
        record.id = RecordId::Text("wh_01HX".to_string());
        let page = PageResult {
            records: vec![make_webhook(None), record],
            pagination: None,
        };
        let found = page.record(&RecordId::Text("wh_01HX".to_string()));
        assert_eq!(found.map(|r| r.id.to_string()).as_deref(), Some("wh_01HX"));
        assert!(page.record(&RecordId::number(99)).is_none());
    }

    #[test]
    fn test_zero_last_page_reads_as_one() {
        let p = Pagination {
            current_page: 1,
            per_page: Some(25),
            total: 0,
            last_page: 0,
            from: None,
            to: None,
        };
        assert_eq!(p.last_page(), 1);
    }
}

// HookLog - core/envelope.rs
//
// Decoding of the backend's page envelope:
//   { "data": [ {...}, ... ], "pagination": { from, to, total, last_page, current_page } }
//
// Records arrive loosely typed. Known fields are lifted into `LogRecord`'s
// typed core and `WebhookDetails`; everything else is kept verbatim in
// `LogRecord::extra`.

use crate::core::model::{
    LogRecord, PageResult, Pagination, RecordDetails, RecordId, WebhookDetails,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Status keys, in lookup order.
const STATUS_KEYS: &[&str] = &["payment_status", "status"];

/// Timestamp keys, in lookup order.
const TIMESTAMP_KEYS: &[&str] = &["updated_at", "received_at", "created_at", "timestamp"];

/// Status used when the backend omits one. Classifies as pending.
const UNKNOWN_STATUS: &str = "unknown";

/// Wire shape of the list response. Unknown envelope keys are ignored.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    data: Vec<Map<String, Value>>,
    #[serde(default, alias = "meta")]
    pagination: Option<Pagination>,
}

/// A record object that cannot be turned into a `LogRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordShapeError {
    /// The record has no `id` field.
    MissingId,
    /// The `id` field is neither a number nor a non-blank string.
    InvalidId { value: String },
}

impl fmt::Display for RecordShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "record has no 'id' field"),
            Self::InvalidId { value } => write!(f, "record id {value} is not a number or string"),
        }
    }
}

impl std::error::Error for RecordShapeError {}

/// Decode a response body into a `PageResult`.
///
/// Fails if the envelope is malformed or any record lacks a usable id.
pub fn decode_page(body: &str) -> Result<PageResult, serde_json::Error> {
    let raw: RawEnvelope = serde_json::from_str(body)?;

    let records = raw
        .data
        .into_iter()
        .map(record_from_wire)
        .collect::<Result<Vec<_>, _>>()
        .map_err(<serde_json::Error as serde::de::Error>::custom)?;

    Ok(PageResult {
        records,
        pagination: raw.pagination,
    })
}

/// Lift one loosely typed record object into a `LogRecord`.
pub fn record_from_wire(mut fields: Map<String, Value>) -> Result<LogRecord, RecordShapeError> {
    let id = match fields.remove("id") {
        None | Some(Value::Null) => return Err(RecordShapeError::MissingId),
        Some(v) => parse_id(&v).ok_or_else(|| RecordShapeError::InvalidId {
            value: v.to_string(),
        })?,
    };

    let status = take_first(&mut fields, STATUS_KEYS)
        .and_then(|(_, v)| scalar_to_string(&v))
        .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

    // An unparseable timestamp stays in the extras verbatim.
    let timestamp = match take_first(&mut fields, TIMESTAMP_KEYS) {
        Some((key, value)) => {
            let parsed = value.as_str().and_then(parse_timestamp);
            if parsed.is_none() {
                fields.insert(key.to_string(), value);
            }
            parsed
        }
        None => None,
    };

    let details = if fields.contains_key("order_number") {
        let order_number = fields
            .remove("order_number")
            .and_then(|v| scalar_to_string(&v))
            .unwrap_or_default();
        let transaction_id = fields
            .remove("payment_transaction_id")
            .and_then(|v| scalar_to_string(&v))
            .filter(|s| !s.is_empty());
        let gateway = fields
            .remove("payment_method")
            .and_then(|v| scalar_to_string(&v))
            .unwrap_or_default();
        let payload = fields.remove("parsed_response").and_then(normalise_payload);
        RecordDetails::Webhook(WebhookDetails {
            order_number,
            transaction_id,
            gateway,
            payload,
        })
    } else {
        RecordDetails::Generic
    };

    Ok(LogRecord {
        id,
        status,
        timestamp,
        details,
        extra: fields.into_iter().collect::<BTreeMap<_, _>>(),
    })
}

/// Parse a backend timestamp: RFC 3339 first, then the plain
/// `YYYY-MM-DD HH:MM:SS` form (interpreted as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_id(value: &Value) -> Option<RecordId> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => Some(RecordId::number(u)),
            None => RecordId::parse(&n.to_string()),
        },
        Value::String(s) => RecordId::parse(s),
        _ => None,
    }
}

/// Remove and return the first non-null field among `keys`, with its key.
fn take_first(
    fields: &mut Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, Value)> {
    keys.iter().find_map(|&k| {
        fields
            .remove(k)
            .filter(|v| !v.is_null())
            .map(|v| (k, v))
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Payloads sometimes arrive double-encoded as a JSON string.
fn normalise_payload(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(inner @ (Value::Object(_) | Value::Array(_))) => Some(inner),
            _ => Some(Value::String(s)),
        },
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::StatusClass;
    use chrono::{Datelike, Timelike};

    const WEBHOOK_PAGE: &str = r#"{
        "success": true,
        "data": [
            {
                "id": 17,
                "order_number": "ORD-1001",
                "payment_transaction_id": "pay_Nx1",
                "payment_method": "razorpay",
                "payment_status": "paid",
                "updated_at": "2024-03-05T10:15:30Z",
                "parsed_response": {"event": "payment.captured", "amount": 49900},
                "total": 499.0
            },
            {
                "id": "18",
                "order_number": 1002,
                "payment_transaction_id": null,
                "payment_method": "payu",
                "payment_status": "processing",
                "updated_at": "2024-03-05 11:00:00",
                "parsed_response": null
            }
        ],
        "pagination": {"from": 26, "to": 27, "total": 27, "last_page": 2, "current_page": 2, "per_page": 25}
    }"#;

    #[test]
    fn test_decode_webhook_page() {
        let page = decode_page(WEBHOOK_PAGE).unwrap();
        assert_eq!(page.records.len(), 2);

        let first = &page.records[0];
        assert_eq!(first.id, RecordId::number(17));
        assert_eq!(first.status, "paid");
        assert_eq!(first.status_class(), StatusClass::Positive);
        let hook = first.webhook().unwrap();
        assert_eq!(hook.order_number, "ORD-1001");
        assert_eq!(hook.transaction_id.as_deref(), Some("pay_Nx1"));
        assert_eq!(hook.gateway, "razorpay");
        assert_eq!(hook.payload.as_ref().unwrap()["amount"], 49900);
        assert_eq!(first.extra.get("total"), Some(&serde_json::json!(499.0)));

        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.last_page, 2);
        assert_eq!(pagination.from, Some(26));
        assert_eq!(pagination.to, Some(27));
    }

    #[test]
    fn test_numeric_strings_and_nulls() {
        let page = decode_page(WEBHOOK_PAGE).unwrap();
        let second = &page.records[1];
        assert_eq!(second.id, RecordId::number(18));
        let hook = second.webhook().unwrap();
        assert_eq!(hook.order_number, "1002");
        assert_eq!(hook.transaction_id, None);
        assert!(second.payload().is_none());
        let ts = second.timestamp.unwrap();
        assert_eq!((ts.year(), ts.hour()), (2024, 11));
    }

    #[test]
    fn test_missing_pagination_is_allowed() {
        let page = decode_page(r#"{"data": []}"#).unwrap();
        assert!(page.records.is_empty());
        assert!(page.pagination.is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn test_missing_data_is_an_error() {
        assert!(decode_page(r#"{"pagination": null}"#).is_err());
        assert!(decode_page("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_record_without_id_rejects_page() {
        let err = decode_page(r#"{"data": [{"payment_status": "paid"}]}"#).unwrap_err();
        assert!(err.to_string().contains("no 'id'"));
    }

    #[test]
    fn test_generic_record_keeps_extra_fields() {
        let mut map = Map::new();
        map.insert("id".into(), serde_json::json!(5));
        map.insert("status".into(), serde_json::json!("failed"));
        map.insert("channel".into(), serde_json::json!("sms"));
        let record = record_from_wire(map).unwrap();
        assert_eq!(record.details, RecordDetails::Generic);
        assert_eq!(record.status_class(), StatusClass::Negative);
        assert_eq!(record.timestamp, None);
        assert_eq!(record.extra.get("channel"), Some(&serde_json::json!("sms")));
    }

    #[test]
    fn test_missing_status_is_pending() {
        let mut map = Map::new();
        map.insert("id".into(), serde_json::json!(1));
        let record = record_from_wire(map).unwrap();
        assert_eq!(record.status, "unknown");
        assert_eq!(record.status_class(), StatusClass::Pending);
    }

    #[test]
    fn test_double_encoded_payload_is_unwrapped() {
        let value = normalise_payload(Value::String(r#"{"a": 1}"#.to_string())).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(
            normalise_payload(Value::String("plain text".into())),
            Some(Value::String("plain text".into()))
        );
        assert_eq!(normalise_payload(Value::String("  ".into())), None);
    }

    #[test]
    fn test_text_ids_decode_alongside_numeric_ids() {
        let page = decode_page(
            r#"{"data": [
                {"id": 7, "payment_status": "paid"},
                {"id": "wh_01HX", "payment_status": "failed"},
                {"id": "3f2b6c1e-9d7a-4e0b-8c1d-2a5f4e6b7c8d", "payment_status": "pending"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<String> = page.records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["7", "wh_01HX", "3f2b6c1e-9d7a-4e0b-8c1d-2a5f4e6b7c8d"]);
        assert_eq!(page.records[0].id, RecordId::number(7));
        assert!(page.record(&RecordId::Text("wh_01HX".into())).is_some());
    }

    #[test]
    fn test_unusable_ids_are_rejected() {
        for body in [
            r#"{"data": [{"id": "   "}]}"#,
            r#"{"data": [{"id": true}]}"#,
            r#"{"data": [{"id": {"nested": 1}}]}"#,
        ] {
            let err = decode_page(body).unwrap_err();
            assert!(err.to_string().contains("not a number or string"), "{err}");
        }
    }

    #[test]
    fn test_unparseable_timestamp_is_kept_verbatim() {
        let mut map = Map::new();
        map.insert("id".into(), serde_json::json!(4));
        map.insert("updated_at".into(), serde_json::json!("last tuesday"));
        let record = record_from_wire(map).unwrap();
        assert_eq!(record.timestamp, None);
        assert_eq!(record.extra.get("updated_at"), Some(&serde_json::json!("last tuesday")));
        let rows = record.detail_rows();
        assert!(rows.contains(&("updated_at".to_string(), "last tuesday".to_string())));
        assert!(rows.contains(&("Received At".to_string(), "N/A".to_string())));
    }

    #[test]
    fn test_parsed_timestamp_is_not_duplicated_in_extras() {
        let mut map = Map::new();
        map.insert("id".into(), serde_json::json!(4));
        map.insert("updated_at".into(), serde_json::json!("2024-03-05T10:15:30Z"));
        let record = record_from_wire(map).unwrap();
        assert!(record.timestamp.is_some());
        assert!(!record.extra.contains_key("updated_at"));
    }

    #[test]
    fn test_unparseable_timestamp_is_none() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-03-05T10:15:30+05:30").is_some());
    }
}

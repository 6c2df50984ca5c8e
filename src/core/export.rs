// HookLog - core/export.rs
//
// CSV and JSON export of the currently loaded page.
// Core layer: writes to any Write trait object.

use crate::core::model::LogRecord;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export records to CSV format.
///
/// Writes: id, timestamp, status, class, order_number, transaction_id, gateway.
/// Payloads are omitted; use JSON export for the full record.
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "timestamp",
            "status",
            "class",
            "order_number",
            "transaction_id",
            "gateway",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for record in records {
        let ts = record
            .timestamp
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        let hook = record.webhook();

        csv_writer
            .write_record([
                record.id.to_string().as_str(),
                ts.as_str(),
                record.status.as_str(),
                record.status_class().label(),
                hook.map(|h| h.order_number.as_str()).unwrap_or(""),
                hook.and_then(|h| h.transaction_id.as_deref()).unwrap_or(""),
                hook.map(|h| h.gateway.as_str()).unwrap_or(""),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON format (array of objects, payloads included).
pub fn export_json<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

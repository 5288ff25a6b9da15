use log::debug;

use crate::bridge::format::StreamInfo;
use crate::error::RowcastError;
use crate::stream_pipeline::{self, RowTable};

/// Decodes a Base64-encoded Arrow IPC stream into a row-oriented table.
///
/// A schema-only stream yields a table with zero rows. Every other malformed
/// input (bad Base64, truncated bytes, schema/batch mismatch) surfaces as a
/// `RowcastError`.
pub fn decode_stream(encoded: &str) -> Result<RowTable, RowcastError> {
    // 1. Decode the payload and materialize every batch into one table.
    let table = stream_pipeline::materialize_stream(encoded)?;
    debug!(
        "materialized stream: {} columns, {} rows",
        table.num_columns(),
        table.num_rows()
    );

    // 2. Re-shape the columnar table into rows.
    RowTable::from_batch(&table)
}

/// Summarizes an encoded stream without converting it to rows.
pub fn inspect_stream(encoded: &str) -> Result<StreamInfo, RowcastError> {
    let bytes = stream_pipeline::decode_payload(encoded)?;
    let scan = stream_pipeline::scan_stream(&bytes)?;

    Ok(StreamInfo {
        schema: scan.schema.as_ref().clone(),
        num_batches: scan.num_batches,
        total_rows: scan.total_rows,
        encoded_len: encoded.len(),
        decoded_len: bytes.len(),
    })
}

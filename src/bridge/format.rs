//! Public-facing metadata structures for the bridge API.

use arrow::datatypes::Schema;
use serde::Serialize;

/// The summary of an encoded Arrow stream, returned by `inspect_stream`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamInfo {
    /// The stream's declared schema.
    pub schema: Schema,
    /// Number of record batches carried by the stream.
    pub num_batches: usize,
    /// Total row count across all batches.
    pub total_rows: usize,
    /// Length of the Base64 text, in bytes.
    pub encoded_len: usize,
    /// Length of the decoded stream, in bytes.
    pub decoded_len: usize,
}

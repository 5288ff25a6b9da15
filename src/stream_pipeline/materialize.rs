//! Decodes Base64 payloads and materializes Arrow IPC streams.
//!
//! The IPC stream format is self-describing: a schema message followed by zero
//! or more record batches that conform to it. Materialization reads every
//! batch in stream order and concatenates them into a single table under the
//! declared schema.

use std::io::Cursor;

use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use arrow::ipc::reader::StreamReader;
use arrow::record_batch::RecordBatch;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::RowcastError;

/// Decodes the Base64 text of an encoded payload into raw stream bytes.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>, RowcastError> {
    Ok(STANDARD.decode(encoded)?)
}

/// Decodes a Base64 payload and materializes every record batch in the
/// stream into one table.
///
/// A schema-only stream (zero batches) yields an empty table carrying the
/// stream's schema, not an error.
pub fn materialize_stream(encoded: &str) -> Result<RecordBatch, RowcastError> {
    let bytes = decode_payload(encoded)?;
    read_all_batches(&bytes)
}

/// Reads a raw IPC stream and concatenates its batches in stream order. The
/// reader is scoped to this call and released on every exit path.
fn read_all_batches(bytes: &[u8]) -> Result<RecordBatch, RowcastError> {
    let reader = StreamReader::try_new(Cursor::new(bytes), None)?;
    let schema = reader.schema();
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(concat_batches(&schema, &batches)?)
}

/// Stream metadata gathered by [`scan_stream`]: the declared schema plus
/// batch and row counts.
#[derive(Debug, Clone)]
pub struct StreamScan {
    pub schema: SchemaRef,
    pub num_batches: usize,
    pub total_rows: usize,
}

/// Walks a raw IPC stream, counting batches and rows without concatenating
/// or re-shaping anything.
pub fn scan_stream(bytes: &[u8]) -> Result<StreamScan, RowcastError> {
    let reader = StreamReader::try_new(Cursor::new(bytes), None)?;
    let schema = reader.schema();

    let mut num_batches = 0;
    let mut total_rows = 0;
    for batch in reader {
        let batch = batch?;
        num_batches += 1;
        total_rows += batch.num_rows();
    }

    Ok(StreamScan {
        schema,
        num_batches,
        total_rows,
    })
}

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing conversion API of the rowcast library.
// It provides a stable, user-friendly interface over the pure `stream_pipeline`
// engine. It is the authoritative boundary between the outside world (encoded
// payloads arriving over HTTP) and the internal decoding logic.
//
// Data Flow (Conversion):
//
//   1. [HTTP Boundary (http::handler)]     -> Extracts the encoded payload from a request
//         |
//         `-> calls ->
//
//   2. [Stateless API (decode_stream)]     -> Receives the Base64 text
//         |
//         `-> a. Calls `stream_pipeline` to materialize batches into one table
//         |
//         `-> b. Re-shapes the table into a `RowTable`
//
//   3. [HTTP Boundary (http::handler)]     -> Serializes the `RowTable` and builds the response
//
// `inspect_stream` is the cheap sibling of `decode_stream`: it reports what an
// encoded stream contains without paying for the row conversion.
//
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

pub use format::StreamInfo;
pub use stateless_api::{decode_stream, inspect_stream};

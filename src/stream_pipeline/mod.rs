//! The pure decoding pipeline: Base64 text in, row-oriented table out.
//!
//! Nothing in this module touches the network or the process environment; the
//! `bridge` module composes these pieces into the public conversion API.

mod materialize;
mod rows;

pub use materialize::{decode_payload, materialize_stream, scan_stream, StreamScan};
pub use rows::RowTable;

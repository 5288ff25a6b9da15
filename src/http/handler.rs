//! The conversion function: request body in, JSON text out.
//!
//! The external contract has exactly two result shapes. Success is a JSON
//! array of row objects; failure is `{"error": "<message>"}`. Nothing else is
//! ever returned, and no failure escapes this boundary.

use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::bridge;
use crate::error::RowcastError;

/// The message returned when the request carries no usable payload field.
const NO_ARROW_RESULT: &str = "No arrowResult found.";

/// The JSON body shape accepted by the conversion endpoint. Additional fields
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertPayload {
    /// The Base64-encoded Arrow IPC stream. `null` and a missing key both
    /// deserialize to `None`.
    #[serde(rename = "arrowResult", default)]
    pub arrow_result: Option<String>,
}

/// An HTTP-style request as the conversion function sees it: a raw body that
/// may or may not hold a JSON payload.
#[derive(Debug, Default)]
pub struct FunctionRequest {
    body: Vec<u8>,
}

impl FunctionRequest {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }

    /// Parses the body as JSON, tolerantly: a malformed body (or one whose
    /// fields have the wrong types) yields `None` rather than an error.
    pub fn json(&self) -> Option<ConvertPayload> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Converts the Base64-encoded Arrow stream carried in the request body into
/// a JSON array of row objects.
///
/// The return value is always JSON text, never an error. A missing or empty
/// `arrowResult` field short-circuits before any decoding is attempted.
pub fn arrow_to_json(request: &FunctionRequest) -> String {
    let arrow_result = request
        .json()
        .and_then(|payload| payload.arrow_result)
        .filter(|encoded| !encoded.is_empty());

    let encoded = match arrow_result {
        Some(encoded) => encoded,
        None => return error_payload(NO_ARROW_RESULT),
    };

    match convert(&encoded) {
        Ok(rows_json) => rows_json,
        Err(err) => {
            debug!("conversion failed: {err}");
            error_payload(&err.to_string())
        }
    }
}

/// The fallible decode-and-serialize step, kept separate so the caller can
/// map any error into the single external failure shape.
fn convert(encoded: &str) -> Result<String, RowcastError> {
    let table = bridge::decode_stream(encoded)?;
    table.to_json_string()
}

fn error_payload(message: &str) -> String {
    json!({ "error": message }).to_string()
}

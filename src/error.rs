//! This module defines the single, unified error type for the entire rowcast library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every failure the conversion pipeline can produce collapses into one of these
//! variants; the HTTP handler turns whichever variant surfaces into the one
//! external error shape, so callers only ever see a message string.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowcastError {
    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// The payload was not valid Base64 (bad alphabet or padding).
    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An error originating from the Arrow library, including malformed or
    /// truncated IPC stream bytes and schema/batch mismatches.
    #[error("Arrow stream error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the Serde JSON library while shaping or serializing rows.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g., binding
    /// the listen socket).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // =========================================================================
    // === High-Level, Semantic Errors (Specific to this service)
    // =========================================================================
    /// A malformed runtime setting, e.g. a non-numeric `PORT`.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

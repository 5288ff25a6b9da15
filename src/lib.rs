//! This file is the root of the `rowcast` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`bridge`, `http`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types that make up the public surface.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod http;

mod error;
mod stream_pipeline;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use error::RowcastError;
pub use stream_pipeline::RowTable;

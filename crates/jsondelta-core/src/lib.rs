//! jsondelta Core - structural deltas between JSON documents
//!
//! This crate provides:
//! - A decoder adapter that separates absent documents from present ones
//! - The recursive diff engine over decoded JSON values
//! - Delta encoding and flattened/human-readable delta summaries
//! - The canonical error and structured logging facilities

pub mod codec;
pub mod diff;
pub mod errors;
pub mod logging_facility;

pub use jsondelta_core_types::schema;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use codec::{decode_document, encode_delta, EncodeStyle};
pub use diff::{compute_delta, diff, Delta, Operand, ValueKind};
pub use errors::{DeltaError, ExError, ExErrorKind, Result};

//! Document decoding and delta encoding.
//!
//! Decoding owns the "absent vs. present" distinction: an absent document is
//! never decoded, while a present one must hold exactly one JSON value.
//! Every decoded number is re-materialized as a double so that `1` and `1.0`
//! are the same value on both sides of a comparison.

use crate::diff::model::{Delta, Operand};
use crate::errors::{DeltaError, Result};
use serde_json::{Number, Value};

/// Output layout for [`encode_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeStyle {
    /// Single line, no insignificant whitespace
    #[default]
    Compact,
    /// Two-space indented
    Pretty,
}

/// Decode a present document.
///
/// # Errors
///
/// - `DeltaError::Decode` — bytes are empty, not valid UTF-8 JSON, or carry
///   trailing data after the first value
pub fn decode_document(bytes: &[u8], operand: Operand) -> Result<Value> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| DeltaError::decode(operand, &e))?;
    Ok(normalize_numbers(value))
}

/// Resolve an optional document into an optional decoded value.
///
/// `None` yields `Ok(None)` without a decode attempt.
///
/// # Errors
///
/// - `DeltaError::Decode` — see [`decode_document`]
pub fn resolve(input: Option<&[u8]>, operand: Operand) -> Result<Option<Value>> {
    input
        .map(|bytes| decode_document(bytes, operand))
        .transpose()
}

/// Re-encode a delta as JSON text. NoDiff encodes as `None`.
///
/// # Errors
///
/// - `DeltaError::Serialization` — the value could not be written
pub fn encode_delta(delta: &Delta, style: EncodeStyle) -> Result<Option<String>> {
    let Some(value) = delta else {
        return Ok(None);
    };
    let text = match style {
        EncodeStyle::Compact => serde_json::to_string(value)?,
        EncodeStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(Some(text))
}

fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64().and_then(Number::from_f64) {
            Some(double) => Value::Number(double),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, normalize_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

//! Delta input and output types.
//!
//! Summary types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of comparing two values.
///
/// `None` means there is no observable difference. `Some(Value::Null)` is a
/// real JSON null and never stands in for "unchanged".
pub type Delta = Option<Value>;

/// Which of the two documents a value or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// The left-hand ("before") document
    Before,
    /// The right-hand ("after") document
    After,
}

impl Operand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operand::Before => "before",
            Operand::After => "after",
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of JSON value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a decoded value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// True for booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ValueKind::Boolean | ValueKind::Number | ValueKind::String
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One changed leaf of a delta, addressed by JSON Pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeltaEntry {
    /// RFC 6901 pointer into the delta (`""` is the root)
    pub path: String,
    /// The value reported at that path
    pub value: Value,
}

/// Flattened, read-only view of a delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeltaSummary {
    /// False only when the delta is NoDiff
    pub changed: bool,
    /// Changed leaves in delta order (object keys sorted)
    pub entries: Vec<DeltaEntry>,
}

use crate::diff::model::{Operand, ValueKind};
use thiserror::Error;

/// Result type alias using DeltaError
pub type Result<T> = std::result::Result<T, DeltaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Document bytes are not a single syntactically valid JSON value (includes empty input)
    Decode,
    /// The diff engine met a pair of value kinds it has no rule for
    UnsupportedType,
    /// A delta could not be re-encoded as JSON text
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::UnsupportedType => "ERR_UNSUPPORTED_TYPE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the decode
/// position (when known) for debugging malformed documents.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    operand: Option<Operand>,
    line: Option<usize>,
    column: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            operand: None,
            line: None,
            column: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the document the error was raised for
    pub fn with_operand(mut self, operand: Operand) -> Self {
        self.operand = Some(operand);
        self
    }

    /// Add a 1-based line/column position inside the offending document
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending document, if any
    pub fn operand(&self) -> Option<Operand> {
        self.operand
    }

    /// Get the line of the decode failure, if any
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Get the column of the decode failure, if any
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(operand) = self.operand {
            write!(f, " (operand: {})", operand)?;
        }
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " (at line {} column {})", line, column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Broad class of a decode failure, as reported by the JSON decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeCategory {
    /// Reading the input failed
    Io,
    /// Input is not syntactically valid JSON
    Syntax,
    /// Input is valid JSON but cannot be represented (e.g. number out of range)
    Data,
    /// Input ended before a complete JSON value was read (includes empty input)
    Eof,
}

impl From<serde_json::error::Category> for DecodeCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Io => DecodeCategory::Io,
            serde_json::error::Category::Syntax => DecodeCategory::Syntax,
            serde_json::error::Category::Data => DecodeCategory::Data,
            serde_json::error::Category::Eof => DecodeCategory::Eof,
        }
    }
}

/// Error taxonomy for delta computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeltaError {
    /// A present document could not be decoded
    #[error("{operand} document is not valid JSON: {message}")]
    Decode {
        operand: Operand,
        line: usize,
        column: usize,
        category: DecodeCategory,
        message: String,
    },

    /// Two values of the same kind had no comparison rule
    #[error("Unsupported value kinds: {left} vs {right}")]
    UnsupportedType { left: ValueKind, right: ValueKind },

    /// Delta re-encoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DeltaError {
    /// Build a decode error for `operand` from the decoder's failure.
    pub fn decode(operand: Operand, err: &serde_json::Error) -> Self {
        DeltaError::Decode {
            operand,
            line: err.line(),
            column: err.column(),
            category: err.classify().into(),
            message: err.to_string(),
        }
    }
}

/// Conversion from DeltaError to ExError
impl From<DeltaError> for ExError {
    fn from(err: DeltaError) -> Self {
        match err {
            DeltaError::Decode {
                operand,
                line,
                column,
                message,
                ..
            } => ExError::new(ExErrorKind::Decode)
                .with_operand(operand)
                .with_position(line, column)
                .with_message(message),

            DeltaError::UnsupportedType { left, right } => {
                ExError::new(ExErrorKind::UnsupportedType)
                    .with_message(format!("no comparison rule for {} vs {}", left, right))
            }

            DeltaError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DeltaError
impl From<serde_json::Error> for DeltaError {
    fn from(err: serde_json::Error) -> Self {
        DeltaError::Serialization {
            message: err.to_string(),
        }
    }
}

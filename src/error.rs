use std::path::PathBuf;

/// Coarse classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input document does not exist
    FileNotFound,
    /// The input is unreadable, not JSON, or not shaped like a record array
    MalformedInput,
    /// A record lacks the key field
    MissingField,
    /// The output document could not be produced or written
    WriteFailure,
}

/// Everything that can stop a regroup run.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array at the root of {}, found {found}", path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("Record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("Record {index} has a '{field}' value that cannot be used as a key (found {found})")]
    InvalidKey {
        index: usize,
        field: String,
        found: &'static str,
    },

    #[error("Duplicate key '{key}': record {index} repeats record {first_index}")]
    DuplicateKey {
        key: String,
        first_index: usize,
        index: usize,
    },

    #[error("Failed to serialize output")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::ReadFailure { .. }
            | Self::MalformedJson { .. }
            | Self::NotAnArray { .. }
            | Self::NotAnObject { .. }
            | Self::InvalidKey { .. }
            | Self::DuplicateKey { .. } => ErrorKind::MalformedInput,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Serialize(_) | Self::WriteFailure { .. } => ErrorKind::WriteFailure,
        }
    }
}

/// Short JSON type name for diagnostics.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

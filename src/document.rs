//! Reading the record array and writing the regrouped object.

use crate::error::{json_type_name, TransformError};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Read the input document and return its records.
///
/// The root must be a JSON array. Elements are returned untouched; their
/// shape is checked during regrouping.
pub fn read_records(path: &Path) -> Result<Vec<Value>, TransformError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            TransformError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TransformError::ReadFailure {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    let document: Value =
        serde_json::from_str(&text).map_err(|source| TransformError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Value::Array(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        other => Err(TransformError::NotAnArray {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

/// Render the mapping as 2-space indented JSON.
///
/// Non-ASCII characters are written literally and there is no trailing
/// newline.
pub fn render_mapping(mapping: &Map<String, Value>) -> Result<String, TransformError> {
    serde_json::to_string_pretty(mapping).map_err(TransformError::Serialize)
}

/// Write the mapping to `path`, replacing any existing file.
///
/// The whole document is rendered before the file is opened.
pub fn write_mapping(path: &Path, mapping: &Map<String, Value>) -> Result<(), TransformError> {
    let text = render_mapping(mapping)?;

    fs::write(path, &text).map_err(|source| TransformError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Wrote {} entries ({} bytes) to {}",
        mapping.len(),
        text.len(),
        path.display()
    );
    Ok(())
}

//! Array-to-mapping regrouping.
//!
//! Turns `[{"flagCode": "fr", "name": "France", ...}, ...]` into
//! `{"fr": {"name": "France", ...}, ...}`. Field order inside every record is
//! kept, and top-level keys appear in the order they were first seen.

use crate::error::{json_type_name, TransformError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Field that identifies a record when nothing else is configured.
pub const DEFAULT_KEY_FIELD: &str = "flagCode";

/// What to do when two records share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one
    #[default]
    Overwrite,
    /// The run fails on the first repeated key
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" | "last-wins" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Unknown duplicate key policy '{}' (expected 'overwrite' or 'reject')",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegroupOptions {
    /// Field lifted out of each record and used as its key
    pub key_field: String,
    pub duplicates: DuplicatePolicy,
}

impl Default for RegroupOptions {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

/// Result of a regroup pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Regrouped {
    pub mapping: Map<String, Value>,
    /// Number of input records consumed
    pub records: usize,
    /// Number of entries replaced by a later record with the same key
    pub overwritten: usize,
}

/// Text used as the mapping key for a key field value.
///
/// Strings are used as-is. Other scalars become the text a JSON encoder
/// writes for them (`1`, `2.5`, `true`, `null`). Arrays and objects have no
/// key form and yield `None`.
pub fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Regroup `records` into a mapping keyed by `options.key_field`.
///
/// Records are consumed in order. Each entry holds the record's remaining
/// fields in their original order.
pub fn regroup(records: Vec<Value>, options: &RegroupOptions) -> Result<Regrouped, TransformError> {
    let total = records.len();
    let mut mapping = Map::new();
    let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(total);
    let mut overwritten = 0;

    for (index, record) in records.into_iter().enumerate() {
        let mut fields = match record {
            Value::Object(fields) => fields,
            other => {
                return Err(TransformError::NotAnObject {
                    index,
                    found: json_type_name(&other),
                })
            }
        };

        let key_value = fields
            .shift_remove(&options.key_field)
            .ok_or_else(|| TransformError::MissingField {
                index,
                field: options.key_field.clone(),
            })?;

        let key = key_text(&key_value).ok_or_else(|| TransformError::InvalidKey {
            index,
            field: options.key_field.clone(),
            found: json_type_name(&key_value),
        })?;

        if let Some(&first_index) = first_seen.get(&key) {
            match options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(TransformError::DuplicateKey {
                        key,
                        first_index,
                        index,
                    })
                }
                DuplicatePolicy::Overwrite => {
                    warn!(
                        "Record {} overwrites key '{}' first set by record {}",
                        index, key, first_index
                    );
                    overwritten += 1;
                }
            }
        } else {
            first_seen.insert(key.clone(), index);
        }

        debug!("Record {} -> '{}' ({} fields)", index, key, fields.len());
        mapping.insert(key, Value::Object(fields));
    }

    Ok(Regrouped {
        mapping,
        records: total,
        overwritten,
    })
}

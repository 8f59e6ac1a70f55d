//! JSON-array record source
//!
//! Each object element of the top-level array becomes one record. Columns
//! are the union of object keys in first-seen order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::warn;

use crate::error::{Result, StatsError};
use crate::models::{FieldValue, Record, RecordSet};

/// Read a JSON array file from disk
pub fn read(path: &Path) -> Result<RecordSet> {
    let file = File::open(path)
        .map_err(|e| StatsError::io(format!("Failed to open {}", path.display()), e))?;
    from_reader(BufReader::new(file), path)
}

/// Read a JSON array from any reader; `path` is used in error messages
pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<RecordSet> {
    let document: Value =
        serde_json::from_reader(reader).map_err(|e| StatsError::json(path, e.to_string()))?;
    from_value(document, path)
}

/// Convert an already parsed JSON document into records
pub fn from_value(document: Value, path: &Path) -> Result<RecordSet> {
    let Value::Array(elements) = document else {
        return Err(StatsError::json(path, "expected a top-level array of objects"));
    };

    let mut columns = IndexSet::new();
    let mut records = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let position = index + 1;
        let Value::Object(object) = element else {
            warn!(
                "Skipping element {} in {}: not a JSON object",
                position,
                path.display()
            );
            continue;
        };

        let fields: IndexMap<String, FieldValue> = object
            .into_iter()
            .map(|(key, value)| {
                columns.insert(key.clone());
                (key, to_field_value(value))
            })
            .collect();
        records.push(Record::new(position, fields));
    }

    Ok(RecordSet::new(columns.into_iter().collect(), records))
}

fn to_field_value(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Empty,
        Value::String(text) => FieldValue::Text(text),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => FieldValue::Integer(integer),
            None => number
                .as_f64()
                .map_or_else(|| FieldValue::Text(number.to_string()), FieldValue::Float),
        },
        Value::Bool(flag) => FieldValue::Text(flag.to_string()),
        nested => FieldValue::Text(nested.to_string()),
    }
}

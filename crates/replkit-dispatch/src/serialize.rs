//! Structured encodings of command results.
//!
//! These ignore display metadata entirely: the value is encoded as-is so
//! that nothing is lost.

use std::fmt;
use std::str::FromStr;

use replkit_render::value::cell_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Structured output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty JSON, two-space indent.
    #[default]
    Json,
    Yaml,
    /// Rows as CSV; objects become key/value pairs.
    Csv,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "csv" => Ok(Format::Csv),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        })
    }
}

/// Encodes a value in the given format.
pub fn serialize(value: &Value, format: Format) -> Result<String, SerializeError> {
    match format {
        Format::Json => to_json(value),
        Format::Yaml => to_yaml(value),
        Format::Csv => to_csv(value),
    }
}

pub fn to_json(value: &Value) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// YAML without the trailing newline `serde_yaml` emits.
pub fn to_yaml(value: &Value) -> Result<String, SerializeError> {
    let mut out = serde_yaml::to_string(value)?;
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Flattens a value to CSV.
///
/// An array of objects uses the first object's keys as the header row. Other
/// arrays become a single `value` column, an object becomes `key,value`
/// pairs, and a scalar is a one-cell table.
pub fn to_csv(value: &Value) -> Result<String, SerializeError> {
    let (header, rows) = csv_table(value);
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in std::iter::once(header).chain(rows) {
        wtr.write_record(&record).map_err(csv_error)?;
    }

    let bytes = wtr.into_inner().map_err(csv_error)?;
    let mut out = String::from_utf8(bytes).map_err(csv_error)?;
    while out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

type Record = Vec<String>;

fn csv_table(value: &Value) -> (Record, Vec<Record>) {
    match value {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) => {
                let header: Record = first.keys().cloned().collect();
                let rows = items
                    .iter()
                    .map(|item| {
                        header
                            .iter()
                            .map(|h| item.get(h).map(cell_text).unwrap_or_default())
                            .collect()
                    })
                    .collect();
                (header, rows)
            }
            _ => (
                vec!["value".to_string()],
                items.iter().map(|item| vec![cell_text(item)]).collect(),
            ),
        },
        Value::Object(map) => (
            vec!["key".to_string(), "value".to_string()],
            map.iter().map(|(k, v)| vec![k.clone(), cell_text(v)]).collect(),
        ),
        scalar => (vec!["value".to_string()], vec![vec![cell_text(scalar)]]),
    }
}

fn csv_error(e: impl fmt::Display) -> SerializeError {
    SerializeError::Csv(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_uses_two_space_indent() {
        let out = to_json(&json!({"name": "test", "value": 42})).unwrap();
        assert_eq!(out, "{\n  \"name\": \"test\",\n  \"value\": 42\n}");
    }

    #[test]
    fn yaml_has_no_trailing_newline() {
        let out = to_yaml(&json!({"name": "test"})).unwrap();
        assert_eq!(out, "name: test");
    }

    #[test]
    fn csv_array_of_objects_keeps_key_order() {
        let data = json!([
            {"name": "Alice", "age": 30},
            {"name": "Bob"}
        ]);
        assert_eq!(to_csv(&data).unwrap(), "name,age\nAlice,30\nBob,");
    }

    #[test]
    fn csv_single_object_and_scalar() {
        let out = to_csv(&json!({"name": "Alice", "age": 30})).unwrap();
        assert_eq!(out, "key,value\nname,Alice\nage,30");
        assert_eq!(to_csv(&json!(7)).unwrap(), "value\n7");
    }

    #[test]
    fn csv_scalar_arrays_and_stray_rows() {
        assert_eq!(to_csv(&json!(["a", 1, null])).unwrap(), "value\na\n1\n\"\"");
        let mixed = json!([{"id": 1, "note": "a, b"}, 5]);
        assert_eq!(to_csv(&mixed).unwrap(), "id,note\n1,\"a, b\"\n,");
    }

    #[test]
    fn format_parsing() {
        assert_eq!("YAML".parse::<Format>(), Ok(Format::Yaml));
        assert!("xml".parse::<Format>().is_err());
        assert_eq!(Format::Csv.to_string(), "csv");
    }
}

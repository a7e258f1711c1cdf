//! Conversions from command results to the inputs of the layout functions.

use serde_json::{Map, Value};

use crate::error::RenderError;

/// Human-readable name of a value's shape, used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text for a single table cell, list item or tree leaf.
///
/// Null is empty, strings are used as-is and nested values are compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Readable text for a value with no display kind.
///
/// Scalars print like [`cell_text`]; arrays and objects are pretty JSON.
pub fn default_text(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        scalar => cell_text(scalar),
    }
}

/// Rows and headers for [`table`](crate::table).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// Builds table input from an array of objects, arrays or scalars.
///
/// Object rows are read by header name. When no headers are given and the
/// first row is an object, its keys become the headers.
pub fn to_table(value: &Value, headers: Option<&[String]>) -> Result<TableData, RenderError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(RenderError::shape("table", "an array of rows", other)),
    };

    let headers: Option<Vec<String>> = match headers {
        Some(h) if !h.is_empty() => Some(h.to_vec()),
        _ => match items.first() {
            Some(Value::Object(first)) => Some(first.keys().cloned().collect()),
            _ => None,
        },
    };

    let rows = items
        .iter()
        .map(|row| match row {
            Value::Object(obj) => headers
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|h| obj.get(h).map(cell_text).unwrap_or_default())
                .collect(),
            Value::Array(cells) => cells.iter().map(cell_text).collect(),
            scalar => vec![cell_text(scalar)],
        })
        .collect();

    Ok(TableData { headers, rows })
}

/// Label/value pairs for [`bar_chart`](crate::bar_chart).
///
/// Accepts an object of label to number, or an array of `[label, number]`
/// pairs.
pub fn to_chart(value: &Value) -> Result<Vec<(String, f64)>, RenderError> {
    const EXPECTED: &str = "an object of label to number";
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| match v.as_f64() {
                Some(n) => Ok((k.clone(), n)),
                None => Err(RenderError::shape("bar_chart", EXPECTED, v)),
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item.as_array().map(Vec::as_slice) {
                Some([label, n]) if n.is_number() => {
                    Ok((cell_text(label), n.as_f64().unwrap_or_default()))
                }
                _ => Err(RenderError::shape("bar_chart", EXPECTED, item)),
            })
            .collect(),
        other => Err(RenderError::shape("bar_chart", EXPECTED, other)),
    }
}

/// Items for [`list_display`](crate::list_display).
pub fn to_strings(value: &Value) -> Result<Vec<String>, RenderError> {
    match value {
        Value::Array(items) => Ok(items.iter().map(cell_text).collect()),
        other => Err(RenderError::shape("list", "an array", other)),
    }
}

/// Samples for [`sparkline`](crate::sparkline).
pub fn to_numbers(value: &Value) -> Result<Vec<f64>, RenderError> {
    const EXPECTED: &str = "an array of numbers";
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| {
                v.as_f64()
                    .ok_or_else(|| RenderError::shape("sparkline", EXPECTED, v))
            })
            .collect(),
        other => Err(RenderError::shape("sparkline", EXPECTED, other)),
    }
}

/// Input for [`progress`](crate::progress).
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressData {
    pub value: f64,
    pub total: f64,
    pub label: Option<String>,
}

/// Reads `{"value", "total", "label"}`, or a bare number as a percentage.
pub fn to_progress(value: &Value) -> Result<ProgressData, RenderError> {
    const EXPECTED: &str = "an object with value and total";
    match value {
        Value::Number(n) => Ok(ProgressData {
            value: n.as_f64().unwrap_or_default(),
            total: 100.0,
            label: None,
        }),
        Value::Object(map) => {
            let number = |key: &str| map.get(key).and_then(Value::as_f64);
            let current = number("value")
                .ok_or_else(|| RenderError::shape("progress", EXPECTED, value))?;
            Ok(ProgressData {
                value: current,
                total: number("total").unwrap_or(100.0),
                label: map.get("label").map(cell_text),
            })
        }
        other => Err(RenderError::shape("progress", EXPECTED, other)),
    }
}

/// The mapping for [`tree`](crate::tree).
pub fn to_tree(value: &Value) -> Result<&Map<String, Value>, RenderError> {
    value
        .as_object()
        .ok_or_else(|| RenderError::shape("tree", "an object", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_text_variants() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("hi")), "hi");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn default_text_pretty_prints_containers() {
        assert_eq!(default_text(&json!({"a": 1})), "{\n  \"a\": 1\n}");
        assert_eq!(default_text(&json!("plain")), "plain");
        assert_eq!(default_text(&Value::Null), "");
    }

    #[test]
    fn table_infers_headers_from_first_record() {
        let data = to_table(&json!([{"id": 1, "task": "a"}, {"task": "b"}]), None).unwrap();
        assert_eq!(data.headers, Some(vec!["id".to_string(), "task".to_string()]));
        assert_eq!(data.rows, vec![vec!["1", "a"], vec!["", "b"]]);
    }

    #[test]
    fn table_reads_records_by_header() {
        let headers = vec!["task".to_string()];
        let data = to_table(&json!([{"id": 1, "task": "a"}]), Some(&headers)).unwrap();
        assert_eq!(data.rows, vec![vec!["a"]]);
    }

    #[test]
    fn table_accepts_array_rows() {
        let data = to_table(&json!([["a", 1], ["b"]]), None).unwrap();
        assert_eq!(data.headers, None);
        assert_eq!(data.rows, vec![vec!["a", "1"], vec!["b"]]);
    }

    #[test]
    fn table_rejects_non_arrays() {
        let err = to_table(&json!({"a": 1}), None).unwrap_err();
        assert!(matches!(err, RenderError::Shape { found: "an object", .. }));
    }

    #[test]
    fn chart_from_object_and_pairs() {
        assert_eq!(
            to_chart(&json!({"a": 1, "b": 2.5})).unwrap(),
            vec![("a".to_string(), 1.0), ("b".to_string(), 2.5)]
        );
        assert_eq!(to_chart(&json!([["x", 3]])).unwrap(), vec![("x".to_string(), 3.0)]);
        assert!(to_chart(&json!({"a": "high"})).is_err());
    }

    #[test]
    fn progress_from_object_or_number() {
        let p = to_progress(&json!({"value": 3, "total": 4, "label": "Done"})).unwrap();
        assert_eq!(p, ProgressData { value: 3.0, total: 4.0, label: Some("Done".into()) });
        assert_eq!(to_progress(&json!(40)).unwrap().total, 100.0);
        assert!(to_progress(&json!({"total": 4})).is_err());
    }

    #[test]
    fn numbers_and_strings() {
        assert_eq!(to_numbers(&json!([1, 2.5])).unwrap(), vec![1.0, 2.5]);
        assert!(to_numbers(&json!([1, "x"])).is_err());
        assert_eq!(to_strings(&json!(["a", 1])).unwrap(), vec!["a", "1"]);
        assert!(to_tree(&json!([])).is_err());
    }
}

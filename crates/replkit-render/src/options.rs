//! Typed display options.
//!
//! Commands carry their display options as a loose JSON map. Each display kind
//! decodes the map into one of these structs before rendering; unknown keys
//! are rejected so that a misspelled option surfaces as an error instead of
//! being silently ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::glyphs::ListStyle;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    pub headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxOptions {
    pub title: Option<String>,
    /// Fixed box width. Without it the box shrinks to fit, up to page width.
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListOptions {
    pub style: ListStyle,
    pub numbered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeOptions {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarChartOptions {
    pub width: Option<usize>,
    pub show_values: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressOptions {
    pub width: Option<usize>,
    /// Used when the value itself carries no label.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SparklineOptions {
    /// Number of most recent samples to draw.
    pub width: Option<usize>,
    pub label: Option<String>,
}

/// Decodes a display option map into `T`.
pub fn decode_options<T: DeserializeOwned>(
    display: &str,
    opts: &Map<String, Value>,
) -> Result<T, RenderError> {
    serde_json::from_value(Value::Object(opts.clone())).map_err(|e| RenderError::Options {
        display: display.to_string(),
        message: e.to_string(),
    })
}

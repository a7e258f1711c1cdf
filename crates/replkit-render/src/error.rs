//! Error types for display rendering.
//!
//! The layout functions themselves are total. Errors only arise when a value
//! handed to [`render_display`](crate::render_display) does not have the shape
//! the display kind expects, or when its display options cannot be decoded.

use std::fmt;

/// Error returned when a value cannot be rendered by a display kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The value has the wrong shape for the display kind.
    Shape {
        display: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The display options could not be decoded.
    Options { display: String, message: String },
}

impl RenderError {
    pub fn shape(display: &str, expected: &'static str, found: &serde_json::Value) -> Self {
        RenderError::Shape {
            display: display.to_string(),
            expected,
            found: crate::value::kind_name(found),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Shape {
                display,
                expected,
                found,
            } => write!(
                f,
                "display '{}' expects {}, found {}",
                display, expected, found
            ),
            RenderError::Options { display, message } => {
                write!(f, "invalid options for display '{}': {}", display, message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_error_names_both_sides() {
        let err = RenderError::shape("table", "an array of rows", &json!("text"));
        assert_eq!(
            err.to_string(),
            "display 'table' expects an array of rows, found a string"
        );
    }

    #[test]
    fn options_error_display() {
        let err = RenderError::Options {
            display: "box".into(),
            message: "unknown field `colour`".into(),
        };
        assert!(err.to_string().starts_with("invalid options for display 'box'"));
    }
}

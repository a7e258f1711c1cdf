//! Rendering strategies.
//!
//! A [`Strategy`] turns a handler's value plus the command's metadata into the
//! final output. The set is closed:
//!
//! - [`Strategy::Text`]: the display kind picks a layout renderer
//! - [`Strategy::Structured`]: lossless JSON/YAML/CSV, metadata ignored
//! - [`Strategy::Passthrough`]: the value itself, untouched

use replkit_render::{page_width, render_display, GlyphMode, Layout};
use serde_json::Value;
use tracing::trace;

use crate::error::DispatchError;
use crate::meta::CommandMeta;
use crate::serialize::{serialize, Format};

/// Width and glyph settings for text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSettings {
    /// Fixed width. `None` reads the process-wide page width at render time.
    pub width: Option<usize>,
    pub glyphs: GlyphMode,
}

impl TextSettings {
    /// The layout for one render call.
    pub fn layout(&self) -> Layout {
        Layout::new(self.width.unwrap_or_else(page_width), self.glyphs)
    }
}

/// How command results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Text(TextSettings),
    Structured(Format),
    Passthrough,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Text(TextSettings::default())
    }
}

/// What a strategy produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Text ready to print.
    Text(String),
    /// The raw value, from [`Strategy::Passthrough`].
    Data(Value),
}

impl Rendered {
    pub fn text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            Rendered::Data(v) => Some(v),
            Rendered::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Data(_) => None,
        }
    }

    pub fn into_data(self) -> Option<Value> {
        match self {
            Rendered::Data(v) => Some(v),
            Rendered::Text(_) => None,
        }
    }
}

impl Strategy {
    pub fn text() -> Self {
        Strategy::default()
    }

    pub fn json() -> Self {
        Strategy::Structured(Format::Json)
    }

    pub fn yaml() -> Self {
        Strategy::Structured(Format::Yaml)
    }

    /// Presents `value` according to this strategy and `meta`.
    pub fn render(&self, value: Value, meta: &CommandMeta) -> Result<Rendered, DispatchError> {
        match self {
            Strategy::Text(settings) => {
                let layout = settings.layout();
                trace!(display = ?meta.display, width = layout.width, "rendering text");
                let text =
                    render_display(meta.display.as_ref(), &value, &meta.display_opts, &layout)?;
                Ok(Rendered::Text(text))
            }
            Strategy::Structured(format) => Ok(Rendered::Text(serialize(&value, *format)?)),
            Strategy::Passthrough => Ok(Rendered::Data(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replkit_render::RenderError;
    use serde_json::json;

    fn table_meta() -> CommandMeta {
        CommandMeta::new().display("table").opt("headers", json!(["id", "task"]))
    }

    #[test]
    fn text_dispatches_on_display() {
        let rows = json!([{"id": 1, "task": "milk"}]);
        let out = Strategy::text().render(rows, &table_meta()).unwrap();
        assert_eq!(out, Rendered::Text("id  task\n--  ----\n1   milk".into()));
    }

    #[test]
    fn text_without_display_stringifies() {
        let out = Strategy::text().render(json!("hello"), &CommandMeta::new()).unwrap();
        assert_eq!(out.text(), Some("hello"));
    }

    #[test]
    fn structured_ignores_meta() {
        let rows = json!([{"id": 1}]);
        let out = Strategy::json().render(rows, &table_meta()).unwrap();
        assert_eq!(out.text(), Some("[\n  {\n    \"id\": 1\n  }\n]"));
    }

    #[test]
    fn passthrough_returns_the_value() {
        let value = json!({"nested": [1, 2, 3]});
        let out = Strategy::Passthrough.render(value.clone(), &table_meta()).unwrap();
        assert_eq!(out.into_data(), Some(value));
    }

    #[test]
    fn shape_errors_are_not_masked() {
        let err = Strategy::text().render(json!(42), &table_meta()).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Render(RenderError::Shape { found: "a number", .. })
        ));
    }

    #[test]
    fn fixed_width_overrides_page_width() {
        let settings = TextSettings {
            width: Some(12),
            glyphs: GlyphMode::Ascii,
        };
        let meta = CommandMeta::new().display("box").opt("width", 12);
        let out = Strategy::Text(settings).render(json!("hi"), &meta).unwrap();
        assert_eq!(out.text().map(|t| t.lines().count()), Some(3));
        assert_eq!(settings.layout().width, 12);
    }
}

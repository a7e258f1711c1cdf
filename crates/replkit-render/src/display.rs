//! Display kinds and the value-to-text entry point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::boxes::{boxed, BoxWidth};
use crate::chart::{bar_chart, progress, sparkline};
use crate::error::RenderError;
use crate::layout::Layout;
use crate::list::list_display;
use crate::options::{
    decode_options, BarChartOptions, BoxOptions, ListOptions, ProgressOptions, SparklineOptions,
    TableOptions, TreeOptions,
};
use crate::table::table;
use crate::tree::tree;
use crate::util::display_width;
use crate::value::{
    default_text, to_chart, to_numbers, to_progress, to_strings, to_table, to_tree,
};

/// Which renderer a command's result goes through.
///
/// Names that do not match a built-in kind are kept as [`DisplayKind::Other`]
/// and fall back to default stringification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayKind {
    Table,
    Box,
    List,
    Tree,
    BarChart,
    Progress,
    Sparkline,
    Other(String),
}

impl DisplayKind {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayKind::Table => "table",
            DisplayKind::Box => "box",
            DisplayKind::List => "list",
            DisplayKind::Tree => "tree",
            DisplayKind::BarChart => "bar_chart",
            DisplayKind::Progress => "progress",
            DisplayKind::Sparkline => "sparkline",
            DisplayKind::Other(name) => name,
        }
    }
}

impl From<&str> for DisplayKind {
    fn from(s: &str) -> Self {
        match s {
            "table" => DisplayKind::Table,
            "box" => DisplayKind::Box,
            "list" => DisplayKind::List,
            "tree" => DisplayKind::Tree,
            "bar_chart" => DisplayKind::BarChart,
            "progress" => DisplayKind::Progress,
            "sparkline" => DisplayKind::Sparkline,
            other => DisplayKind::Other(other.to_string()),
        }
    }
}

impl From<String> for DisplayKind {
    fn from(s: String) -> Self {
        DisplayKind::from(s.as_str())
    }
}

impl From<DisplayKind> for String {
    fn from(kind: DisplayKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for DisplayKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DisplayKind::from(s))
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `value` as text for a display kind.
///
/// `opts` is decoded into the kind's option struct first, then the value is
/// checked against the shape the kind expects. With no kind, or an unknown
/// one, the value is stringified with [`default_text`].
///
/// ```rust
/// use replkit_render::{render_display, DisplayKind, Layout};
/// use serde_json::{json, Map};
///
/// let rows = json!([{"name": "a", "n": 1}]);
/// let out = render_display(Some(&DisplayKind::Table), &rows, &Map::new(), &Layout::default())?;
/// assert_eq!(out, "name  n\n----  -\na     1");
/// # Ok::<(), replkit_render::RenderError>(())
/// ```
pub fn render_display(
    kind: Option<&DisplayKind>,
    value: &Value,
    opts: &Map<String, Value>,
    layout: &Layout,
) -> Result<String, RenderError> {
    let kind = match kind {
        Some(k) => k,
        None => return Ok(default_text(value)),
    };
    let name = kind.as_str();
    let glyphs = &layout.glyphs;

    match kind {
        DisplayKind::Table => {
            let o: TableOptions = decode_options(name, opts)?;
            let data = to_table(value, o.headers.as_deref())?;
            let headers: Option<Vec<&str>> = data
                .headers
                .as_ref()
                .map(|h| h.iter().map(String::as_str).collect());
            Ok(table(&data.rows, headers.as_deref()))
        }
        DisplayKind::Box => {
            let o: BoxOptions = decode_options(name, opts)?;
            let content = default_text(value);
            let width = match o.width {
                Some(w) => BoxWidth::Fixed(w),
                None => BoxWidth::Auto { max: layout.width },
            };
            Ok(boxed(&content, o.title.as_deref(), width))
        }
        DisplayKind::List => {
            let o: ListOptions = decode_options(name, opts)?;
            let items = to_strings(value)?;
            Ok(list_display(&items, o.style, o.numbered, glyphs))
        }
        DisplayKind::Tree => {
            let _: TreeOptions = decode_options(name, opts)?;
            Ok(tree(to_tree(value)?, glyphs))
        }
        DisplayKind::BarChart => {
            let o: BarChartOptions = decode_options(name, opts)?;
            let data = to_chart(value)?;
            Ok(bar_chart(&data, o.width.unwrap_or(layout.width), o.show_values, glyphs))
        }
        DisplayKind::Progress => {
            let o: ProgressOptions = decode_options(name, opts)?;
            let p = to_progress(value)?;
            let label = p.label.or(o.label);
            let width = o.width.unwrap_or(layout.width);
            Ok(progress(p.value, p.total, width, label.as_deref(), glyphs))
        }
        DisplayKind::Sparkline => {
            let o: SparklineOptions = decode_options(name, opts)?;
            let samples = to_numbers(value)?;
            let line = match o.label.as_deref() {
                Some(label) => {
                    let room = layout.width.saturating_sub(display_width(label) + 2);
                    let points = o.width.unwrap_or(room);
                    format!("{}: {}", label, sparkline(&samples, Some(points), glyphs))
                }
                None => {
                    let points = o.width.unwrap_or(layout.width);
                    sparkline(&samples, Some(points), glyphs)
                }
            };
            Ok(line)
        }
        DisplayKind::Other(_) => Ok(default_text(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::GlyphMode;
    use serde_json::json;

    fn opts(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    fn render(kind: &str, value: Value, o: Value) -> Result<String, RenderError> {
        render_display(
            Some(&DisplayKind::from(kind)),
            &value,
            &opts(o),
            &Layout::default(),
        )
    }

    #[test]
    fn kind_names_round_trip() {
        for name in ["table", "box", "list", "tree", "bar_chart", "progress", "sparkline"] {
            assert_eq!(DisplayKind::from(name).as_str(), name);
        }
        assert_eq!(DisplayKind::from("markdown"), DisplayKind::Other("markdown".into()));
    }

    #[test]
    fn no_kind_and_unknown_kind_stringify() {
        let v = json!({"a": 1});
        let plain = render_display(None, &v, &Map::new(), &Layout::default()).unwrap();
        assert_eq!(plain, "{\n  \"a\": 1\n}");
        assert_eq!(render("markdown", v, json!({})).unwrap(), plain);
    }

    #[test]
    fn table_with_headers_option() {
        let rows = json!([{"id": 1, "task": "milk", "done": false}]);
        let out = render("table", rows, json!({"headers": ["id", "task"]})).unwrap();
        assert_eq!(out, "id  task\n--  ----\n1   milk");
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let err = render("tree", json!([1, 2]), json!({})).unwrap_err();
        assert_eq!(
            err,
            RenderError::Shape {
                display: "tree".into(),
                expected: "an object",
                found: "an array",
            }
        );
    }

    #[test]
    fn bad_options_are_an_error() {
        let err = render("list", json!(["a"]), json!({"styel": "check"})).unwrap_err();
        assert!(matches!(err, RenderError::Options { .. }));
    }

    #[test]
    fn box_uses_title_and_fits_content() {
        let out = render("box", json!("cpu: 3%"), json!({"title": "Status"})).unwrap();
        assert_eq!(out, "+-- Status +\n| cpu: 3%  |\n+----------+");
    }

    #[test]
    fn progress_label_from_value_wins() {
        let out = render(
            "progress",
            json!({"value": 1, "total": 4, "label": "Done"}),
            json!({"label": "ignored", "width": 30}),
        )
        .unwrap();
        assert_eq!(out, "Done: [####------------]   25%");
    }

    #[test]
    fn sparkline_with_label() {
        let out = render(
            "sparkline",
            json!([1, 2, 3, 4, 5, 6, 7, 8]),
            json!({"label": "CPU", "width": 4}),
        )
        .unwrap();
        assert_eq!(out, "CPU: _-+#");
    }

    #[test]
    fn sparkline_room_counts_label_columns() {
        let out = render_display(
            Some(&DisplayKind::Sparkline),
            &json!([1, 2, 3, 4, 5, 6, 7, 8]),
            &opts(json!({"label": "温度"})),
            &Layout::default().with_width(10),
        )
        .unwrap();
        assert_eq!(out, "温度: _-+#");
        assert_eq!(display_width(&out), 10);
    }

    #[test]
    fn unicode_layout_reaches_renderers() {
        let layout = Layout::default().with_glyphs(GlyphMode::Unicode);
        let out = render_display(
            Some(&DisplayKind::List),
            &json!(["a"]),
            &Map::new(),
            &layout,
        )
        .unwrap();
        assert_eq!(out, "• a");
    }
}

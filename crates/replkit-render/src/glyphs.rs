//! Glyph sets used by the list, tree and chart renderers.
//!
//! Output is plain ASCII by default. A Unicode set with box-drawing
//! characters is available for terminals that render it; it is selected
//! explicitly through [`Layout`](crate::Layout) or, in [`GlyphMode::Auto`],
//! by setting the `REPLKIT_GLYPHS` environment variable to `unicode`.
//!
//! ```rust
//! use replkit_render::{GlyphMode, Glyphs, ListStyle};
//!
//! let ascii = Glyphs::for_mode(GlyphMode::Ascii);
//! assert_eq!(ascii.marker(ListStyle::Check), "[x] ");
//! assert_eq!(ascii.tree_last, "`-- ");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Which glyph set to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    /// Seven-bit ASCII only.
    #[default]
    Ascii,
    /// Box-drawing and block characters.
    Unicode,
    /// Resolve from the `REPLKIT_GLYPHS` environment variable.
    Auto,
}

/// List item prefix style.
///
/// Unrecognized style names fall back to [`ListStyle::Bullet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListStyle {
    #[default]
    Bullet,
    Arrow,
    Dash,
    Check,
    Uncheck,
}

impl From<&str> for ListStyle {
    fn from(s: &str) -> Self {
        match s {
            "arrow" => ListStyle::Arrow,
            "dash" => ListStyle::Dash,
            "check" => ListStyle::Check,
            "uncheck" => ListStyle::Uncheck,
            _ => ListStyle::Bullet,
        }
    }
}

impl From<String> for ListStyle {
    fn from(s: String) -> Self {
        ListStyle::from(s.as_str())
    }
}

impl From<ListStyle> for String {
    fn from(style: ListStyle) -> Self {
        match style {
            ListStyle::Bullet => "bullet",
            ListStyle::Arrow => "arrow",
            ListStyle::Dash => "dash",
            ListStyle::Check => "check",
            ListStyle::Uncheck => "uncheck",
        }
        .to_string()
    }
}

/// A complete set of glyphs for one rendering mode.
///
/// Tree glyphs are all four columns wide so that nested prefixes stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub arrow: &'static str,
    pub dash: &'static str,
    pub check: &'static str,
    pub uncheck: &'static str,
    /// Prefix for a child that has siblings after it.
    pub tree_branch: &'static str,
    /// Prefix for the last child.
    pub tree_last: &'static str,
    /// Continuation under a non-last child.
    pub tree_pipe: &'static str,
    /// Continuation under the last child.
    pub tree_space: &'static str,
    pub bar_fill: char,
    pub bar_empty: char,
    /// Sparkline levels, lowest first.
    pub spark_levels: &'static [char],
}

impl Glyphs {
    pub const ASCII: Glyphs = Glyphs {
        bullet: "* ",
        arrow: "-> ",
        dash: "- ",
        check: "[x] ",
        uncheck: "[ ] ",
        tree_branch: "|-- ",
        tree_last: "`-- ",
        tree_pipe: "|   ",
        tree_space: "    ",
        bar_fill: '#',
        bar_empty: '-',
        spark_levels: &['_', '.', '-', '~', '=', '+', '*', '#'],
    };

    pub const UNICODE: Glyphs = Glyphs {
        bullet: "• ",
        arrow: "→ ",
        dash: "- ",
        check: "✓ ",
        uncheck: "○ ",
        tree_branch: "├── ",
        tree_last: "└── ",
        tree_pipe: "│   ",
        tree_space: "    ",
        bar_fill: '█',
        bar_empty: '░',
        spark_levels: &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'],
    };

    /// Returns the glyph set for a mode, resolving [`GlyphMode::Auto`].
    pub fn for_mode(mode: GlyphMode) -> Glyphs {
        match resolve_mode(mode) {
            GlyphMode::Unicode => Glyphs::UNICODE,
            _ => Glyphs::ASCII,
        }
    }

    /// The item prefix for a list style.
    pub fn marker(&self, style: ListStyle) -> &'static str {
        match style {
            ListStyle::Bullet => self.bullet,
            ListStyle::Arrow => self.arrow,
            ListStyle::Dash => self.dash,
            ListStyle::Check => self.check,
            ListStyle::Uncheck => self.uncheck,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::ASCII
    }
}

type GlyphDetector = fn() -> GlyphMode;

static GLYPH_DETECTOR: Lazy<Mutex<GlyphDetector>> = Lazy::new(|| Mutex::new(env_glyph_mode));

/// Overrides how [`GlyphMode::Auto`] is resolved.
pub fn set_glyph_detector(detector: GlyphDetector) {
    let mut guard = GLYPH_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Resolves a mode to `Ascii` or `Unicode`, never `Auto`.
pub fn resolve_mode(mode: GlyphMode) -> GlyphMode {
    match mode {
        GlyphMode::Auto => {
            let detector = GLYPH_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
            match (*detector)() {
                GlyphMode::Unicode => GlyphMode::Unicode,
                _ => GlyphMode::Ascii,
            }
        }
        other => other,
    }
}

fn env_glyph_mode() -> GlyphMode {
    match std::env::var("REPLKIT_GLYPHS") {
        Ok(val) if val.eq_ignore_ascii_case("unicode") || val.eq_ignore_ascii_case("utf8") => {
            GlyphMode::Unicode
        }
        _ => GlyphMode::Ascii,
    }
}

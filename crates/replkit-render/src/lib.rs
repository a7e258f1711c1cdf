//! # Replkit Render - Fixed-Width Text Layout
//!
//! `replkit-render` turns semi-structured values (rows, nested mappings,
//! label/number pairs, plain strings) into fixed-width ASCII text blocks.
//!
//! This crate is the rendering foundation for the `replkit` command framework,
//! but every layout function is a plain function over plain data and can be
//! used on its own.
//!
//! ## Core Concepts
//!
//! - Layout functions: [`table`], [`boxed`], [`list_display`], [`tree`],
//!   [`bar_chart`], [`progress`], [`sparkline`], [`compose`], [`align`],
//!   [`hr`], [`wrap`]
//! - [`DisplayKind`]: names a renderer; [`render_display`] dispatches a JSON
//!   value to it with typed options
//! - [`Layout`]: the width and [`Glyphs`] one render call uses; the
//!   process-wide default comes from [`page_width`]
//!
//! Rendering is deterministic: the same input produces the same text, no
//! output carries a trailing newline, and degenerate input (empty rows, zero
//! widths, flat series) yields empty or minimal output instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use replkit_render::{compose, hr, table, tree, Glyphs};
//! use serde_json::json;
//!
//! let rows = vec![vec!["1", "Buy milk"], vec!["2", "Write report"]];
//! let tasks = table(&rows, Some(&["id", "task"]));
//!
//! let groups = json!({"work": ["Write report"], "home": ["Buy milk"]});
//! let outline = tree(groups.as_object().unwrap(), &Glyphs::ASCII);
//!
//! let report = compose(&[hr('=', 20), tasks, outline], 1);
//! assert!(report.starts_with("===================="));
//! assert!(report.ends_with("`-- Buy milk"));
//! ```

mod boxes;
mod chart;
mod compose;
mod display;
mod error;
mod glyphs;
mod layout;
mod list;
pub mod options;
mod table;
mod tree;
mod util;
pub mod value;

pub use boxes::{boxed, BoxWidth};
pub use chart::{bar_chart, format_number, progress, sparkline};
pub use compose::{align, compose, hr, Align};
pub use display::{render_display, DisplayKind};
pub use error::RenderError;
pub use glyphs::{resolve_mode, set_glyph_detector, GlyphMode, Glyphs, ListStyle};
pub use layout::{detect_terminal_width, page_width, set_page_width, Layout, DEFAULT_PAGE_WIDTH};
pub use list::list_display;
pub use table::table;
pub use tree::tree;
pub use util::{display_width, pad_center, pad_left, pad_right, truncate_end, wrap};

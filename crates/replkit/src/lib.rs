//! # replkit - command registry with pluggable rendering
//!
//! replkit separates what a command computes from how its result is shown.
//! Handlers receive the application state and their bound arguments and
//! return plain data. Presentation is picked afterwards by the active
//! [`Strategy`]:
//!
//! - Text: the command's declared display (table, box, list, tree, bar chart,
//!   progress, sparkline) lays the data out for a fixed-width terminal
//! - Structured: JSON, YAML or CSV, ignoring display metadata
//! - Passthrough: the data itself, for programmatic callers
//!
//! The same commands and state can be viewed through several strategies at
//! once with [`App::using`].
//!
//! ## Quick Start
//!
//! ```rust
//! use replkit::{App, ArgValues, Args, Strategy};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Todos {
//!     items: Vec<String>,
//! }
//!
//! let app = App::builder("todo")
//!     .command_with(
//!         "add",
//!         |s: &mut Todos, args: &ArgValues| {
//!             s.items.push(args.get("task")?);
//!             Ok::<_, anyhow::Error>(s.items.len())
//!         },
//!         |c| c.arg("task").about("Add a task."),
//!     )?
//!     .command_with(
//!         "list",
//!         |s: &mut Todos, _: &ArgValues| Ok::<_, anyhow::Error>(s.items.clone()),
//!         |c| c.display("list").opt("numbered", true).alias("ls"),
//!     )?
//!     .build();
//!
//! app.execute("add", Args::new().arg("milk"))?;
//! app.execute("add", Args::new().arg("eggs"))?;
//!
//! let text = app.execute("ls", Args::new())?;
//! assert_eq!(text.text(), Some("1. milk\n2. eggs"));
//!
//! let data = app.using(Strategy::Passthrough).execute("list", Args::new())?;
//! assert_eq!(data.into_data(), Some(json!(["milk", "eggs"])));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Layout primitives
//!
//! The renderers are also usable directly: [`table`], [`boxed`],
//! [`list_display`], [`tree`], [`bar_chart`], [`progress`], [`sparkline`],
//! [`compose`], [`align`] and [`hr`]. They all honour a fixed page width
//! ([`page_width`], [`set_page_width`]) and pick ASCII or Unicode glyphs
//! through [`Glyphs`].

mod app;
mod builder;
mod help;
mod namespace;
mod registry;
mod setup;

pub use app::App;
pub use builder::{AppBuilder, CommandConfig};
pub use namespace::{BoundCommand, CallError, Namespace, NamespaceScope};
pub use setup::SetupError;

// Dispatch pipeline
pub use replkit_dispatch::{
    serialize, ArgError, ArgValues, Args, Command, CommandMeta, DispatchError, Format, Handler,
    HandlerResult, IntoHandlerResult, Param, Rendered, SerializeError, Strategy, TextSettings,
};

// Layout engine
pub use replkit_render::{
    align, bar_chart, boxed, compose, detect_terminal_width, display_width, format_number, hr,
    list_display, page_width, progress, render_display, set_page_width, sparkline, table, tree,
    truncate_end, wrap, Align, BoxWidth, DisplayKind, GlyphMode, Glyphs, Layout, ListStyle,
    RenderError, DEFAULT_PAGE_WIDTH,
};

/// Renderer option structs and value coercions.
pub mod render {
    pub use replkit_render::{options, value};
}

//! `tdoo`: a todo list manager built on replkit.
//!
//! The binary is a thin shell over [`cli::run`]; the commands themselves live
//! in [`todo`].

pub mod cli;
pub mod logging;
pub mod todo;

pub use cli::{parse_line, run, Cli, GlyphArg, OutputArg};
pub use todo::{app, Priority, Todo, TodoList};

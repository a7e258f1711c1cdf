//! Command metadata, argument binding, handlers and rendering strategies.
//!
//! `replkit-dispatch` is the middle layer of the replkit stack. It knows how to
//! take one registered [`Command`], bind caller [`Args`] to its declared
//! [`Param`]s, run its [`Handler`] against shared state, and present the
//! returned value through a [`Strategy`]. It does not know about registries,
//! views or namespaces; that is the `replkit` crate's job.
//!
//! # Pipeline
//!
//! ```text
//! Args --resolve--> ArgValues --handler(&mut S)--> Value --strategy(meta)--> Rendered
//! ```
//!
//! - Text strategy: the command's [`CommandMeta::display`] picks a layout from
//!   `replkit-render`; display options are decoded into typed option structs
//! - Structured strategy: JSON (two-space indent), YAML or CSV, metadata ignored
//! - Passthrough: the JSON value is handed back unchanged
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use replkit_dispatch::{ArgValues, Args, Command, CommandMeta, Handler, Param, Strategy};
//!
//! let list = Command::new(
//!     "list",
//!     Handler::new(|items: &mut Vec<String>, _: &ArgValues| Ok::<_, anyhow::Error>(items.clone())),
//!     CommandMeta::new().display("list").opt("style", "dash"),
//!     vec![],
//!     Some("List items.".into()),
//! );
//!
//! let state = RefCell::new(vec!["a".to_string(), "b".to_string()]);
//! let out = list.invoke(&state, Args::new(), &Strategy::text())?;
//! assert_eq!(out.text(), Some("- a\n- b"));
//! # Ok::<(), replkit_dispatch::DispatchError>(())
//! ```

mod args;
mod command;
mod error;
mod handler;
mod meta;
mod serialize;
mod strategy;

pub use args::{ArgError, ArgValues, Args, Param};
pub use command::Command;
pub use error::DispatchError;
pub use handler::{Handler, HandlerResult, IntoHandlerResult};
pub use meta::CommandMeta;
pub use serialize::{serialize, to_csv, to_json, to_yaml, Format, SerializeError};
pub use strategy::{Rendered, Strategy, TextSettings};

//! Binding commands as plain callables.
//!
//! A [`Namespace`] maps names to [`BoundCommand`]s. Calling one executes the
//! command through the view it was bound from; text output is written out,
//! passthrough values are handed back.
//!
//! Namespaces can be entered as the ambient binding target of the current
//! thread with [`Namespace::enter`]. [`App::bind_ambient`](crate::App::bind_ambient)
//! binds into the innermost one and fails when none is entered.
//!
//! ```rust
//! use replkit::{App, ArgValues, Args, Namespace};
//!
//! let app = App::builder("greeter")
//!     .command_with(
//!         "hello",
//!         |_: &mut (), args: &ArgValues| Ok::<_, anyhow::Error>(format!("hello {}", args.get::<String>("who")?)),
//!         |c| c.arg("who"),
//!     )?
//!     .build();
//!
//! let scope = Namespace::new().enter();
//! app.bind_ambient()?;
//!
//! let mut out = Vec::new();
//! scope.call("hello", Args::new().arg("world"), &mut out)?;
//! assert_eq!(String::from_utf8(out)?, "hello world\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use replkit_dispatch::{Args, DispatchError, Rendered};
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::app::App;

/// Errors from calling a bound command.
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

type CallFn = dyn Fn(Args) -> Result<Rendered, DispatchError>;

/// A command bound to the view it was bound from.
#[derive(Clone)]
pub struct BoundCommand {
    name: String,
    summary: String,
    call: Rc<CallFn>,
}

impl BoundCommand {
    pub(crate) fn new<S: 'static>(app: &App<S>, name: &str, summary: &str) -> Self {
        let app = app.clone();
        let target = name.to_string();
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
            call: Rc::new(move |args| app.execute(&target, args)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First line of the command's description.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Executes and returns the rendered result without printing it.
    pub fn invoke(&self, args: Args) -> Result<Rendered, DispatchError> {
        (self.call)(args)
    }

    /// Executes the command. Text is written to `out` followed by a newline
    /// and `None` is returned; passthrough values are returned as-is.
    pub fn call<W: Write + ?Sized>(&self, args: Args, out: &mut W) -> Result<Option<Value>, CallError> {
        trace!(command = %self.name, "calling bound command");
        match self.invoke(args)? {
            Rendered::Text(text) => {
                writeln!(out, "{}", text)?;
                Ok(None)
            }
            Rendered::Data(value) => Ok(Some(value)),
        }
    }
}

impl fmt::Debug for BoundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCommand")
            .field("name", &self.name)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

/// A set of bound commands, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    commands: BTreeMap<String, BoundCommand>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a binding.
    pub fn insert(&mut self, command: BoundCommand) {
        self.commands.insert(command.name.clone(), command);
    }

    pub fn get(&self, name: &str) -> Option<&BoundCommand> {
        self.commands.get(name)
    }

    /// Bound names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Calls a bound command by name. See [`BoundCommand::call`].
    pub fn call<W: Write + ?Sized>(
        &self,
        name: &str,
        args: Args,
        out: &mut W,
    ) -> Result<Option<Value>, CallError> {
        let command = self
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        command.call(args, out)
    }

    /// Makes this namespace the ambient binding target of the current thread
    /// until the returned guard is dropped. Scopes nest.
    pub fn enter(self) -> NamespaceScope {
        let namespace = Rc::new(RefCell::new(self));
        AMBIENT.with(|stack| stack.borrow_mut().push(Rc::clone(&namespace)));
        trace!(depth = depth(), "entered namespace");
        NamespaceScope { namespace }
    }
}

thread_local! {
    static AMBIENT: RefCell<Vec<Rc<RefCell<Namespace>>>> = const { RefCell::new(Vec::new()) };
}

/// The innermost entered namespace, if any.
pub(crate) fn current() -> Option<Rc<RefCell<Namespace>>> {
    AMBIENT.with(|stack| stack.borrow().last().cloned())
}

fn depth() -> usize {
    AMBIENT.with(|stack| stack.borrow().len())
}

/// Guard returned by [`Namespace::enter`].
///
/// Dropping it leaves the scope. Guards must be dropped in reverse order of
/// entry, which ordinary scoping guarantees.
#[must_use = "the namespace is left as soon as the scope is dropped"]
pub struct NamespaceScope {
    namespace: Rc<RefCell<Namespace>>,
}

impl NamespaceScope {
    /// Snapshot of the namespace's current bindings.
    pub fn namespace(&self) -> Namespace {
        self.namespace.borrow().clone()
    }

    pub fn get(&self, name: &str) -> Option<BoundCommand> {
        self.namespace.borrow().get(name).cloned()
    }

    /// Calls a command bound into this scope.
    pub fn call<W: Write + ?Sized>(
        &self,
        name: &str,
        args: Args,
        out: &mut W,
    ) -> Result<Option<Value>, CallError> {
        let command = self
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        command.call(args, out)
    }
}

impl Drop for NamespaceScope {
    fn drop(&mut self) {
        AMBIENT.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|ns| Rc::ptr_eq(ns, &self.namespace)) {
                stack.remove(pos);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_nest_and_unwind() {
        assert!(current().is_none());
        let outer = Namespace::new().enter();
        {
            let inner = Namespace::new().enter();
            assert!(Rc::ptr_eq(&current().unwrap(), &inner.namespace));
        }
        assert!(Rc::ptr_eq(&current().unwrap(), &outer.namespace));
        drop(outer);
        assert!(current().is_none());
    }

    #[test]
    fn unknown_name_is_a_dispatch_error() {
        let ns = Namespace::new();
        let err = ns.call("nope", Args::new(), &mut io::sink()).unwrap_err();
        assert!(matches!(err, CallError::Dispatch(DispatchError::UnknownCommand(_))));
    }
}

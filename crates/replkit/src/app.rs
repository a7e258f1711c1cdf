//! The application façade.
//!
//! An [`App`] couples a command registry, one shared state value and a
//! rendering [`Strategy`]. Views created with [`App::using`] share the
//! registry and the state; only the strategy differs.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use replkit_dispatch::{Args, Command, DispatchError, Rendered, Strategy};
use replkit_render::{align, compose, hr, page_width, Align};
use tracing::debug;

use crate::builder::AppBuilder;
use crate::help;
use crate::namespace::{self, BoundCommand, Namespace};
use crate::registry::Registry;

/// A command application over state `S`.
///
/// Cloning an `App` is cheap and yields another handle on the same registry,
/// state and strategy. The type is `!Send`: all access happens on the thread
/// that built it.
pub struct App<S = ()> {
    name: Rc<str>,
    registry: Rc<RefCell<Registry<S>>>,
    state: Rc<RefCell<S>>,
    strategy: Strategy,
}

impl<S: Default + 'static> App<S> {
    /// Starts a builder with `S::default()` as the state.
    pub fn builder(name: impl Into<String>) -> AppBuilder<S> {
        AppBuilder::new(name, S::default())
    }
}

impl<S> Clone for App<S> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            registry: Rc::clone(&self.registry),
            state: Rc::clone(&self.state),
            strategy: self.strategy,
        }
    }
}

impl<S> fmt::Debug for App<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("commands", &self.list_commands())
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<S> App<S> {
    pub(crate) fn from_parts(
        name: String,
        registry: Rc<RefCell<Registry<S>>>,
        state: Rc<RefCell<S>>,
        strategy: Strategy,
    ) -> Self {
        Self {
            name: name.into(),
            registry,
            state,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Borrows the shared state.
    ///
    /// # Panics
    ///
    /// Panics when a command is currently running with the state borrowed.
    pub fn state(&self) -> Ref<'_, S> {
        self.state.borrow()
    }

    /// Mutably borrows the shared state. Same panic rule as [`App::state`].
    pub fn state_mut(&self) -> RefMut<'_, S> {
        self.state.borrow_mut()
    }

    /// Runs a command by name or alias and presents its result through this
    /// view's strategy.
    pub fn execute(&self, name: &str, args: Args) -> Result<Rendered, DispatchError> {
        let command = self
            .command(name)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_string()))?;
        debug!(app = %self.name, command = name, strategy = ?self.strategy, "executing");
        command.invoke(&self.state, args, &self.strategy)
    }

    /// Looks a command up by name or alias.
    pub fn command(&self, name: &str) -> Option<Rc<Command<S>>> {
        self.registry.borrow().get(name)
    }

    /// Primary command names in registration order. Aliases are not listed.
    pub fn list_commands(&self) -> Vec<String> {
        self.registry.borrow().primary_names()
    }

    /// Another view of this app: same commands and state, different strategy.
    pub fn using(&self, strategy: Strategy) -> App<S> {
        debug!(app = %self.name, ?strategy, "created view");
        App {
            strategy,
            ..self.clone()
        }
    }

    /// Startup banner: a rule, the centered title, a thinner rule and a
    /// pointer to `help()`.
    pub fn banner(&self, title: &str) -> String {
        let width = match self.strategy {
            Strategy::Text(settings) => settings.width.unwrap_or_else(page_width),
            _ => page_width(),
        };
        compose(
            &[
                hr('=', width),
                align(title, Align::Center, width),
                hr('-', width),
                "Type help() for available commands".to_string(),
                String::new(),
            ],
            0,
        )
    }
}

impl<S: 'static> App<S> {
    /// Adds the synthesized `help` command unless one is registered.
    pub fn ensure_help(&self) {
        if self.registry.borrow().contains(help::HELP) {
            return;
        }
        let command = help::help_command(Rc::downgrade(&self.registry));
        match self.registry.borrow_mut().insert_unlisted(command) {
            Ok(_) => debug!(app = %self.name, "synthesized help command"),
            Err(err) => debug!(app = %self.name, %err, "help command not added"),
        }
    }

    /// Binds every primary command, plus `help`, into `namespace` as
    /// callables that run through this view. Aliases are not bound.
    pub fn bind(&self, namespace: &mut Namespace) {
        self.ensure_help();
        let names = self.list_commands();
        for name in names.iter().map(String::as_str).chain([help::HELP]) {
            if let Some(command) = self.command(name) {
                namespace.insert(BoundCommand::new(self, name, command.summary()));
            }
        }
        debug!(app = %self.name, bound = namespace.len(), "bound commands");
    }

    /// Binds into the innermost namespace entered on this thread.
    ///
    /// Fails with [`DispatchError::NoNamespace`] when none is active.
    pub fn bind_ambient(&self) -> Result<(), DispatchError> {
        let namespace = namespace::current().ok_or(DispatchError::NoNamespace)?;
        self.bind(&mut namespace.borrow_mut());
        Ok(())
    }
}

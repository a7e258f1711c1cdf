//! App builder and per-command configuration.

use std::cell::RefCell;
use std::rc::Rc;

use replkit_dispatch::{ArgValues, Command, CommandMeta, Handler, IntoHandlerResult, Param, Strategy};
use replkit_render::DisplayKind;
use serde_json::Value;
use tracing::debug;

use crate::app::App;
use crate::registry::Registry;
use crate::setup::SetupError;

/// Metadata captured for one command at registration.
///
/// Used through [`AppBuilder::command_with`]:
///
/// ```rust
/// use replkit::{App, ArgValues};
///
/// let app = App::builder("notes")
///     .command_with(
///         "add",
///         |notes: &mut Vec<String>, args: &ArgValues| {
///             notes.push(args.get("text")?);
///             Ok::<_, anyhow::Error>(notes.len())
///         },
///         |c| c.arg("text").alias("a").about("Add a note."),
///     )?
///     .build();
///
/// assert_eq!(app.list_commands(), vec!["add"]);
/// # Ok::<(), replkit::SetupError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandConfig {
    meta: CommandMeta,
    params: Vec<Param>,
    about: Option<String>,
}

impl CommandConfig {
    /// Renderer used under the text strategy.
    pub fn display(mut self, kind: impl Into<DisplayKind>) -> Self {
        self.meta = self.meta.display(kind);
        self
    }

    /// One renderer option, e.g. `headers` or `title`.
    pub fn opt(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta = self.meta.opt(key, value);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.meta = self.meta.alias(alias);
        self
    }

    /// Declares a required parameter. Order of calls is positional order.
    pub fn arg(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param::required(name));
        self
    }

    /// Declares a parameter with a default value.
    pub fn arg_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param::optional(name, default));
        self
    }

    /// Description; its first line shows up in help.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }
}

/// Builder for [`App`].
pub struct AppBuilder<S = ()> {
    name: String,
    state: S,
    strategy: Strategy,
    registry: Registry<S>,
}

impl<S: 'static> AppBuilder<S> {
    /// Starts an app around an initial state value.
    pub fn new(name: impl Into<String>, state: S) -> Self {
        Self {
            name: name.into(),
            state,
            strategy: Strategy::default(),
            registry: Registry::default(),
        }
    }

    /// Replaces the initial state.
    pub fn state(mut self, state: S) -> Self {
        self.state = state;
        self
    }

    /// Strategy of the app's primary view. Defaults to text.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Registers a command with no display, aliases or parameters.
    pub fn command<F, R>(self, name: &str, handler: F) -> Result<Self, SetupError>
    where
        F: Fn(&mut S, &ArgValues) -> R + 'static,
        R: IntoHandlerResult + 'static,
    {
        self.command_with(name, handler, |c| c)
    }

    /// Registers a command and configures its metadata.
    ///
    /// Fails without registering anything when the name or one of the
    /// aliases is invalid or already taken.
    pub fn command_with<F, R, C>(mut self, name: &str, handler: F, configure: C) -> Result<Self, SetupError>
    where
        F: Fn(&mut S, &ArgValues) -> R + 'static,
        R: IntoHandlerResult + 'static,
        C: FnOnce(CommandConfig) -> CommandConfig,
    {
        let config = configure(CommandConfig::default());
        let command = Command::new(name, Handler::new(handler), config.meta, config.params, config.about);
        let command = self.registry.insert(command)?;
        debug!(
            app = %self.name,
            command = name,
            aliases = ?command.meta().aliases,
            display = ?command.meta().display,
            "registered command"
        );
        Ok(self)
    }

    pub fn build(self) -> App<S> {
        debug!(app = %self.name, commands = self.registry.commands().len(), "built app");
        App::from_parts(
            self.name,
            Rc::new(RefCell::new(self.registry)),
            Rc::new(RefCell::new(self.state)),
            self.strategy,
        )
    }
}

//! Registered commands and the invoke pipeline.

use std::cell::RefCell;

use tracing::debug;

use crate::args::{Args, Param};
use crate::error::DispatchError;
use crate::handler::Handler;
use crate::meta::CommandMeta;
use crate::strategy::{Rendered, Strategy};

/// A command as stored in a registry: handler, metadata, declared parameters
/// and a description. Immutable once built.
#[derive(Debug)]
pub struct Command<S> {
    name: String,
    handler: Handler<S>,
    meta: CommandMeta,
    params: Vec<Param>,
    about: Option<String>,
}

impl<S> Command<S> {
    pub fn new(
        name: impl Into<String>,
        handler: Handler<S>,
        meta: CommandMeta,
        params: Vec<Param>,
        about: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handler,
            meta,
            params,
            about,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// First line of the description, or an empty string.
    pub fn summary(&self) -> &str {
        self.about
            .as_deref()
            .and_then(|a| a.trim().lines().next())
            .unwrap_or("")
            .trim()
    }

    /// Call signature for help listings, e.g. `add(task, priority="medium")`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(Param::signature).collect();
        format!("{}({})", self.name, params.join(", "))
    }

    /// Runs the command against `state` and presents the result.
    ///
    /// The state is borrowed mutably only while the handler runs; a nested
    /// invocation during that window fails with [`DispatchError::StateBusy`].
    pub fn invoke(
        &self,
        state: &RefCell<S>,
        args: Args,
        strategy: &Strategy,
    ) -> Result<Rendered, DispatchError> {
        let bound = args
            .resolve(&self.params)
            .map_err(|source| DispatchError::Args {
                command: self.name.clone(),
                source,
            })?;

        let value = {
            let mut state = state
                .try_borrow_mut()
                .map_err(|_| DispatchError::StateBusy(self.name.clone()))?;
            self.handler
                .call(&mut state, &bound)
                .map_err(|source| DispatchError::Handler {
                    command: self.name.clone(),
                    source,
                })?
        };

        debug!(command = %self.name, display = ?self.meta.display, "command returned");
        strategy.render(value, &self.meta)
    }
}

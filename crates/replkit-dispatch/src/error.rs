//! Errors raised while dispatching a command.

use replkit_render::RenderError;
use thiserror::Error;

use crate::args::ArgError;
use crate::serialize::SerializeError;

/// Everything that can go wrong between looking a command up and handing
/// back its rendered output.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: {source}")]
    Args {
        command: String,
        #[source]
        source: ArgError,
    },

    #[error("{command}: {source}")]
    Handler {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// The shared state is already borrowed, i.e. a command tried to run
    /// another command of the same application while executing.
    #[error("cannot run '{0}': application state is in use by a running command")]
    StateBusy(String),

    #[error("no namespace is active to bind commands into")]
    NoNamespace,
}

impl DispatchError {
    /// True for lookup failures.
    pub fn is_unknown_command(&self) -> bool {
        matches!(self, DispatchError::UnknownCommand(_))
    }
}

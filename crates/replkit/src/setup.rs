//! Error types for setup operations.

/// Error type for building an [`App`](crate::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A command name or alias is already taken.
    DuplicateCommand(String),
    /// A command name or alias is empty or contains whitespace.
    InvalidName(String),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::DuplicateCommand(cmd) => write!(f, "duplicate command: {}", cmd),
            SetupError::InvalidName(name) => write!(f, "invalid command name: {:?}", name),
        }
    }
}

impl std::error::Error for SetupError {}

/// Checks that `name` can be typed as a command.
pub(crate) fn validate_name(name: &str) -> Result<(), SetupError> {
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == '=') {
        return Err(SetupError::InvalidName(name.to_string()));
    }
    Ok(())
}

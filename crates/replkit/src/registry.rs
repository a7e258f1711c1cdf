//! Name and alias lookup for registered commands.

use std::collections::HashMap;
use std::rc::Rc;

use replkit_dispatch::Command;

use crate::setup::{validate_name, SetupError};

/// Commands in registration order, plus an index from every name and alias
/// to the shared command.
pub(crate) struct Registry<S> {
    commands: Vec<Rc<Command<S>>>,
    index: HashMap<String, Rc<Command<S>>>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> Registry<S> {
    /// Adds a command under its name and aliases. Nothing is inserted when
    /// any of them is invalid or taken.
    pub fn insert(&mut self, command: Command<S>) -> Result<Rc<Command<S>>, SetupError> {
        let command = self.index_command(command)?;
        self.commands.push(Rc::clone(&command));
        Ok(command)
    }

    /// Adds a command that resolves by name but is not listed.
    pub fn insert_unlisted(&mut self, command: Command<S>) -> Result<Rc<Command<S>>, SetupError> {
        self.index_command(command)
    }

    fn index_command(&mut self, command: Command<S>) -> Result<Rc<Command<S>>, SetupError> {
        let mut names: Vec<&str> = Vec::with_capacity(command.meta().aliases.len() + 1);
        names.push(command.name());
        names.extend(command.meta().aliases.iter().map(String::as_str));

        for (i, name) in names.iter().enumerate() {
            validate_name(name)?;
            if self.index.contains_key(*name) || names[..i].contains(name) {
                return Err(SetupError::DuplicateCommand(name.to_string()));
            }
        }

        let keys: Vec<String> = names.into_iter().map(str::to_string).collect();
        let command = Rc::new(command);
        for key in keys {
            self.index.insert(key, Rc::clone(&command));
        }
        Ok(command)
    }

    pub fn get(&self, name: &str) -> Option<Rc<Command<S>>> {
        self.index.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Listed commands in registration order.
    pub fn commands(&self) -> &[Rc<Command<S>>] {
        &self.commands
    }

    pub fn primary_names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name().to_string()).collect()
    }
}

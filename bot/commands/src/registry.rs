//! Name to command mapping.

use std::collections::HashMap;

use crate::error::RegistrationError;
use crate::types::{Command, CommandSpec};
use crate::validate;

/// Registered commands, keyed by unique name.
///
/// Not internally synchronized: the intended lifecycle is to register
/// everything during single-threaded startup and only dispatch afterwards.
/// An embedder that must mutate the set while dispatching concurrently has
/// to wrap the dispatcher in its own lock or swap immutable snapshots.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    /// Validate and insert. Re-registering an existing name silently
    /// replaces the earlier entry; a validation error leaves the registry
    /// untouched.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), RegistrationError> {
        let command = validate::into_command(spec)?;
        self.commands.insert(command.name.clone(), command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Iteration order is unspecified; introspection sorts where it matters.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

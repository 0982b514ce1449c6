//! Read-only projections of registered commands, for help surfaces.

use serde::Serialize;

use crate::error::CommandError;
use crate::registry::CommandRegistry;
use crate::types::{ArgSpec, Command};

/// Description shown for fields whose spec carries none.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Introspection view of one declared argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub required: bool,
    pub default: Option<String>,
}

impl ArgDetails {
    fn project(spec: &ArgSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind.label().to_string(),
            description: spec
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            required: spec.default.is_none(),
            default: spec.default.clone(),
        }
    }
}

/// Introspection view of one command, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDetails {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgDetails>,
}

impl CommandDetails {
    fn project(command: &Command) -> Self {
        Self {
            name: command.name.clone(),
            description: command.description.clone(),
            args: command.args.iter().map(ArgDetails::project).collect(),
        }
    }
}

/// Snapshot one command by name. Recomputed on every call, never cached.
pub fn describe(registry: &CommandRegistry, name: &str) -> Result<CommandDetails, CommandError> {
    registry
        .get(name)
        .map(CommandDetails::project)
        .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
}

/// Snapshot every registered command, sorted lexicographically by name.
pub fn describe_all(registry: &CommandRegistry) -> Vec<CommandDetails> {
    let mut details: Vec<CommandDetails> =
        registry.iter().map(CommandDetails::project).collect();
    details.sort_by(|a, b| a.name.cmp(&b.name));
    details
}

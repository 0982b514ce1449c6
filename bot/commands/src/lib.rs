//! `sorrel-commands` — prefix-command registry and argument binding for chat bots.
//!
//! Provides:
//! - Command registration pairing a declared argument schema with an async handler
//! - Prefix detection and shell-style tokenization of inbound messages
//! - Positional + keyword argument resolution with declared defaults
//! - Typed coercion (bool, sized integers, floats, string)
//! - Read-only introspection and help-text rendering

pub mod coerce;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod introspect;
pub mod registry;
pub mod resolve;
pub mod tokenize;
pub mod types;
mod validate;

pub use dispatch::{
    handler_fn, CommandDispatcher, CommandHandler, EventContext, FnHandler, Outcome,
};
pub use error::{CoercionError, CommandError, RegistrationError};
pub use help::{render_command, render_overview};
pub use introspect::{describe, describe_all, ArgDetails, CommandDetails, NO_DESCRIPTION};
pub use registry::CommandRegistry;
pub use types::{ArgKind, ArgSpec, ArgValue, Args, Command, CommandSpec};

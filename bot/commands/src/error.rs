//! Error taxonomy for registration and dispatch.

use thiserror::Error;

use crate::types::ArgKind;

/// Rejections raised while registering a command. None of these leave any
/// partial state behind in the registry.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("command `{0}` has no handler")]
    MissingHandler(String),

    #[error("command name is empty")]
    EmptyCommandName,

    #[error("argument `{argument}` of command `{command}` is not a valid identifier")]
    InvalidArgName { command: String, argument: String },

    #[error(
        "default `{literal}` for argument `{argument}` of command `{command}` does not parse as {kind}"
    )]
    InvalidDefault {
        command: String,
        argument: String,
        kind: ArgKind,
        literal: String,
        #[source]
        source: CoercionError,
    },
}

/// Failures surfaced by a single dispatch call. Each aborts the whole
/// pipeline at the point it occurs; nothing is retried.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no command provided")]
    NoCommandProvided,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("command `{command}` requires argument `{argument}`")]
    RequiredArgumentMissing { command: String, argument: String },

    #[error("positional token `{token}` follows a keyword argument (command `{command}`)")]
    KeywordAfterPositional { command: String, token: String },

    #[error("could not tokenize input `{0}`")]
    TokenizationSyntax(String),

    #[error("invalid value `{value}` for argument `{argument}` of command `{command}`")]
    Coercion {
        command: String,
        argument: String,
        value: String,
        #[source]
        source: CoercionError,
    },
}

/// Why a raw textual value failed to convert to its declared kind.
#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("invalid boolean literal `{0}`")]
    Bool(String),

    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
}

//! Registration-time validation of a command spec.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::coerce;
use crate::error::RegistrationError;
use crate::types::{Command, CommandSpec};

/// Field names must be addressable as `Name=value` keyword tokens.
static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_0-9]+$").unwrap());

/// Check a spec and convert it into a registered command.
///
/// Pure: a rejected spec leaves nothing behind. Checking default literals
/// here means a default can never fail coercion at dispatch time.
pub(crate) fn into_command(spec: CommandSpec) -> Result<Command, RegistrationError> {
    if spec.name.is_empty() {
        return Err(RegistrationError::EmptyCommandName);
    }
    let Some(handler) = spec.handler else {
        return Err(RegistrationError::MissingHandler(spec.name));
    };
    for arg in &spec.args {
        if !IDENT_RE.is_match(&arg.name) {
            return Err(RegistrationError::InvalidArgName {
                command: spec.name,
                argument: arg.name.clone(),
            });
        }
        if let Some(default) = &arg.default {
            if let Err(source) = coerce::coerce(arg.kind, default) {
                return Err(RegistrationError::InvalidDefault {
                    command: spec.name,
                    argument: arg.name.clone(),
                    kind: arg.kind,
                    literal: default.clone(),
                    source,
                });
            }
        }
    }
    Ok(Command {
        name: spec.name,
        description: spec.description,
        args: spec.args,
        handler,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler_fn;
    use crate::types::{ArgKind, ArgSpec};

    fn spec(name: &str) -> CommandSpec {
        CommandSpec::new(name, "test command").handler(handler_fn(|_, _| {}))
    }

    #[test]
    fn valid_spec_converts() {
        let command = into_command(
            spec("greet").arg(ArgSpec::string("Target").default_value("world")),
        )
        .unwrap();
        assert_eq!(command.name, "greet");
        assert_eq!(command.args.len(), 1);
    }

    #[test]
    fn spec_without_handler_is_rejected() {
        let spec = CommandSpec::new("greet", "no handler");
        assert!(matches!(
            into_command(spec),
            Err(RegistrationError::MissingHandler(name)) if name == "greet"
        ));
    }

    #[test]
    fn empty_command_name_is_rejected() {
        assert!(matches!(
            into_command(spec("")),
            Err(RegistrationError::EmptyCommandName)
        ));
    }

    #[test]
    fn non_identifier_arg_name_is_rejected() {
        let err = into_command(spec("greet").arg(ArgSpec::string("bad name"))).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::InvalidArgName { argument, .. } if argument == "bad name"
        ));
    }

    #[test]
    fn default_literal_must_parse_as_the_declared_kind() {
        let err = into_command(
            spec("retry").arg(ArgSpec::new("Count", ArgKind::UInt8).default_value("lots")),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::InvalidDefault { argument, literal, .. }
                if argument == "Count" && literal == "lots"
        ));
    }
}

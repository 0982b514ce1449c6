//! Render chat-ready help text from introspection snapshots.

use crate::introspect::{ArgDetails, CommandDetails};

/// One bullet per command, suitable for a `help` reply.
pub fn render_overview(prefix: &str, commands: &[CommandDetails]) -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for command in commands {
        lines.push(format!(
            "• `{}{}` - {}",
            prefix, command.name, command.description
        ));
    }
    lines.join("\n")
}

/// Usage line plus per-argument detail for a single command.
pub fn render_command(prefix: &str, details: &CommandDetails) -> String {
    let mut usage = format!("{}{}", prefix, details.name);
    for arg in &details.args {
        usage.push(' ');
        usage.push_str(&usage_token(arg));
    }

    let mut lines = vec![format!("`{}`", usage), details.description.clone()];
    for arg in &details.args {
        lines.push(format!("  {} ({}): {}", arg.name, arg.kind, arg.description));
    }
    lines.join("\n")
}

/// Required fields render as `<Name>`, defaulted fields as `[Name=default]`.
fn usage_token(arg: &ArgDetails) -> String {
    match &arg.default {
        Some(default) => format!("[{}={}]", arg.name, default),
        None => format!("<{}>", arg.name),
    }
}

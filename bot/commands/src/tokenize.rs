//! Prefix detection and shell-style tokenization of inbound text.

use crate::error::CommandError;

/// Strip the configured prefix from the start of `text`.
///
/// `None` means the message is not addressed to the engine at all, which is
/// the normal case for most chat traffic and never an error.
pub fn strip_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
}

/// Split `text` into POSIX-style tokens, so a quoted value may contain
/// spaces. Malformed quoting (an unterminated quote, a trailing backslash)
/// fails before any command lookup happens. Empty input yields zero tokens.
pub fn tokenize(text: &str) -> Result<Vec<String>, CommandError> {
    shlex::split(text).ok_or_else(|| CommandError::TokenizationSyntax(text.to_string()))
}

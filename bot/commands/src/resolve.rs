//! Positional and keyword argument resolution against a command's schema.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CommandError;
use crate::types::ArgSpec;

/// `Name=value` shape for keyword tokens. The captured identifier must also
/// name a declared field, otherwise the whole token stays positional with
/// its `=` intact, so values that merely resemble assignments survive.
static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z_0-9]+)=(.*)$").unwrap());

/// Map every declared field to its raw textual value, in declaration order.
///
/// Sources per field, in precedence order: keyword token, positional token at
/// the field's declared order index, declared default. A field with none of
/// the three aborts resolution naming the first unmet field. Once a keyword
/// token has been accepted, any later positional token is an ordering
/// violation. Duplicate keyword names keep the last value; surplus positional
/// tokens are ignored.
pub fn resolve(
    command: &str,
    args: &[ArgSpec],
    tokens: &[String],
) -> Result<Vec<String>, CommandError> {
    let declared: HashSet<&str> = args.iter().map(|a| a.name.as_str()).collect();

    let mut keywords: HashMap<&str, &str> = HashMap::new();
    let mut positional: Vec<&str> = Vec::new();
    let mut in_keywords = false;

    for token in tokens {
        let keyword = KEYWORD_RE.captures(token).and_then(|captures| {
            let name = captures.get(1)?.as_str();
            let value = captures.get(2)?.as_str();
            declared.contains(name).then_some((name, value))
        });
        match keyword {
            Some((name, value)) => {
                in_keywords = true;
                keywords.insert(name, value);
            }
            None if in_keywords => {
                return Err(CommandError::KeywordAfterPositional {
                    command: command.to_string(),
                    token: token.clone(),
                });
            }
            None => positional.push(token),
        }
    }

    let mut resolved = Vec::with_capacity(args.len());
    for (index, spec) in args.iter().enumerate() {
        let raw = if let Some(value) = keywords.get(spec.name.as_str()) {
            (*value).to_string()
        } else if let Some(value) = positional.get(index) {
            (*value).to_string()
        } else if let Some(default) = &spec.default {
            default.clone()
        } else {
            return Err(CommandError::RequiredArgumentMissing {
                command: command.to_string(),
                argument: spec.name.clone(),
            });
        };
        resolved.push(raw);
    }
    Ok(resolved)
}

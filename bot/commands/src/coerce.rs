//! Textual value to typed `ArgValue` conversion.

use crate::error::CoercionError;
use crate::types::{ArgKind, ArgValue};

/// Convert one raw token into a value of `kind`.
///
/// Integers are base-10 and range-checked against the declared width and
/// signedness; floats accept scientific notation; strings pass through
/// verbatim.
pub fn coerce(kind: ArgKind, raw: &str) -> Result<ArgValue, CoercionError> {
    let value = match kind {
        ArgKind::Bool => ArgValue::Bool(parse_bool(raw)?),
        ArgKind::Int8 => ArgValue::Int8(raw.parse()?),
        ArgKind::Int16 => ArgValue::Int16(raw.parse()?),
        ArgKind::Int32 => ArgValue::Int32(raw.parse()?),
        ArgKind::Int64 => ArgValue::Int64(raw.parse()?),
        ArgKind::UInt8 => ArgValue::UInt8(raw.parse()?),
        ArgKind::UInt16 => ArgValue::UInt16(raw.parse()?),
        ArgKind::UInt32 => ArgValue::UInt32(raw.parse()?),
        ArgKind::UInt64 => ArgValue::UInt64(raw.parse()?),
        ArgKind::Float32 => ArgValue::Float32(raw.parse()?),
        ArgKind::Float64 => ArgValue::Float64(raw.parse()?),
        ArgKind::String => ArgValue::String(raw.to_string()),
    };
    Ok(value)
}

/// Accepted literals: `1 0 t f true false` in lower, upper, or title case.
fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(CoercionError::Bool(other.to_string())),
    }
}

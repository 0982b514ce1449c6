//! Command and argument types.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::dispatch::CommandHandler;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Semantic type of a declared argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
}

impl ArgKind {
    /// Type label shown by introspection and help text.
    pub fn label(&self) -> &'static str {
        match self {
            ArgKind::Bool => "bool",
            ArgKind::Int8 => "int8",
            ArgKind::Int16 => "int16",
            ArgKind::Int32 => "int32",
            ArgKind::Int64 => "int64",
            ArgKind::UInt8 => "uint8",
            ArgKind::UInt16 => "uint16",
            ArgKind::UInt32 => "uint32",
            ArgKind::UInt64 => "uint64",
            ArgKind::Float32 => "float32",
            ArgKind::Float64 => "float64",
            ArgKind::String => "string",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A coerced argument value, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl ArgValue {
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Int8(_) => ArgKind::Int8,
            ArgValue::Int16(_) => ArgKind::Int16,
            ArgValue::Int32(_) => ArgKind::Int32,
            ArgValue::Int64(_) => ArgKind::Int64,
            ArgValue::UInt8(_) => ArgKind::UInt8,
            ArgValue::UInt16(_) => ArgKind::UInt16,
            ArgValue::UInt32(_) => ArgKind::UInt32,
            ArgValue::UInt64(_) => ArgKind::UInt64,
            ArgValue::Float32(_) => ArgKind::Float32,
            ArgValue::Float64(_) => ArgKind::Float64,
            ArgValue::String(_) => ArgKind::String,
        }
    }
}

// ---------------------------------------------------------------------------
// Argument schema
// ---------------------------------------------------------------------------

/// One declared argument field of a command.
///
/// Declaration order in the command's field list is the positional order:
/// the third declared field binds the third positional token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgSpec {
    pub name: String,
    pub kind: ArgKind,
    /// Literal substituted when no value is supplied. Absence makes the
    /// field required.
    pub default: Option<String>,
    pub description: Option<String>,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self { name: name.into(), kind, default: None, description: None }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Bool)
    }

    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Int64)
    }

    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Float64)
    }

    /// Attach a default literal. Validated against `kind` at registration.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// Attach a free-text description for help surfaces.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

// ---------------------------------------------------------------------------
// Command definition
// ---------------------------------------------------------------------------

/// A command registration under construction: name, description, declared
/// argument schema, and the handler that receives bound invocations.
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSpec>,
    pub(crate) handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
            handler: None,
        }
    }

    /// Append one declared field. Call order fixes positional order.
    pub fn arg(mut self, spec: ArgSpec) -> Self {
        self.args.push(spec);
        self
    }

    pub fn handler(mut self, handler: impl CommandHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }
}

/// A validated, registered command. Immutable once inserted; removed only by
/// dropping the registry.
pub struct Command {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSpec>,
    pub(crate) handler: Arc<dyn CommandHandler>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Bound arguments
// ---------------------------------------------------------------------------

macro_rules! typed_accessor {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        /// Value of the named field, which the command must have declared
        /// with this kind. Panics otherwise: asking for an undeclared name
        /// or the wrong kind is a programming error in the handler, not a
        /// user-input failure.
        pub fn $fn_name(&self, name: &str) -> $ty {
            match self.get(name) {
                Some(ArgValue::$variant(value)) => value.clone(),
                Some(other) => panic!(
                    "argument `{name}` has kind {}, not {}",
                    other.kind(),
                    ArgKind::$variant
                ),
                None => panic!("no argument named `{name}`"),
            }
        }
    };
}

/// The bound arguments aggregate handed to a handler, one entry per declared
/// field, in declaration order. Every declared field is guaranteed present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Args {
    values: Vec<(String, ArgValue)>,
}

impl Args {
    pub(crate) fn new(values: Vec<(String, ArgValue)>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    typed_accessor!(boolean, Bool, bool);
    typed_accessor!(int8, Int8, i8);
    typed_accessor!(int16, Int16, i16);
    typed_accessor!(int32, Int32, i32);
    typed_accessor!(int64, Int64, i64);
    typed_accessor!(uint8, UInt8, u8);
    typed_accessor!(uint16, UInt16, u16);
    typed_accessor!(uint32, UInt32, u32);
    typed_accessor!(uint64, UInt64, u64);
    typed_accessor!(float32, Float32, f32);
    typed_accessor!(float64, Float64, f64);
    typed_accessor!(string, String, String);
}

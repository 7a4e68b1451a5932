//! Host value model.
//!
//! [`Value`] is the native-side view of a dynamically typed host value. Every
//! host type has its own variant, so narrowing to a concrete type is a checked
//! match instead of a reinterpretation.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::bigint::BigInt;

/// A dynamically typed host value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The host's absent-value marker
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Host number (IEEE-754 double)
    Number(f64),
    /// String in the host's UTF-16 form
    String(HostString),
    /// Arbitrary-precision integer
    BigInt(BigInt),
    /// Array of values
    Array(Vec<Value>),
    /// Plain object with string keys
    Object(Object),
    /// Function descriptor
    Function(Function),
}

/// Dynamic type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    BigInt,
    Array,
    Object,
    Function,
}

impl ValueKind {
    /// Host-facing name of the type.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::BigInt => "bigint",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `None` if this is the host's absent marker, otherwise `Some(self)`.
    pub fn present(&self) -> Option<&Value> {
        if self.is_undefined() { None } else { Some(self) }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(HostString::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(HostString::from(value.as_str()))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

// ============================================================================
// Strings
// ============================================================================

/// A host string held as UTF-16 code units.
///
/// Unpaired surrogates are preserved; they only get replaced when the string
/// is decoded to UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HostString {
    units: Vec<u16>,
}

impl HostString {
    pub fn from_utf16(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    pub fn as_utf16(&self) -> &[u16] {
        &self.units
    }

    /// Decode to UTF-8, replacing unpaired surrogates with U+FFFD.
    pub fn to_utf8(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<&str> for HostString {
    fn from(value: &str) -> Self {
        Self {
            units: value.encode_utf16().collect(),
        }
    }
}

impl fmt::Display for HostString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}

// ============================================================================
// Objects and functions
// ============================================================================

/// A plain host object: string-keyed properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    properties: FxHashMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property. Missing properties read as `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Descriptor of a host function.
///
/// The conversion layer never calls host functions; it only carries enough
/// to identify one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Function {
    pub name: String,
    pub arity: u32,
}

impl Function {
    pub fn new(name: impl Into<String>, arity: u32) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

//! Checked narrowing of a [`Value`] to one dynamic type.
//!
//! Each accessor returns a typed view of the value or a
//! [`ConversionError::TypeMismatch`] naming both types.

use crate::bigint::BigInt;
use crate::error::ConversionError;
use crate::value::{Function, HostString, Object, Value, ValueKind};

pub(crate) fn mismatch(expected: ValueKind, value: &Value) -> ConversionError {
    tracing::trace!(expected = expected.name(), actual = value.type_name(), "type mismatch");
    ConversionError::TypeMismatch {
        expected: expected.name(),
        actual: value.type_name(),
    }
}

pub fn value_as_object(value: &Value) -> Result<&Object, ConversionError> {
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(mismatch(ValueKind::Object, other)),
    }
}

pub fn value_as_array(value: &Value) -> Result<&[Value], ConversionError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(mismatch(ValueKind::Array, other)),
    }
}

pub fn value_as_function(value: &Value) -> Result<&Function, ConversionError> {
    match value {
        Value::Function(func) => Ok(func),
        other => Err(mismatch(ValueKind::Function, other)),
    }
}

pub fn value_as_number(value: &Value) -> Result<f64, ConversionError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(mismatch(ValueKind::Number, other)),
    }
}

pub fn value_as_bool(value: &Value) -> Result<bool, ConversionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(ValueKind::Bool, other)),
    }
}

pub fn value_as_string(value: &Value) -> Result<&HostString, ConversionError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(ValueKind::String, other)),
    }
}

pub fn value_as_bigint(value: &Value) -> Result<&BigInt, ConversionError> {
    match value {
        Value::BigInt(b) => Ok(b),
        other => Err(mismatch(ValueKind::BigInt, other)),
    }
}

//! Conversion traits for argument extraction and return values.
//!
//! - [`FromValue`]: extract a Rust value from a [`Value`]
//! - [`IntoValue`]: convert a Rust value into a [`Value`]
//!
//! The impls delegate to the free functions in [`crate::read`] and
//! [`crate::write`], so `ctx.arg::<u8>(0)` behaves exactly like `as_u8`.
//!
//! `u64`, `i64` and `usize` convert into exact bigints. Use
//! [`crate::write::from_u64`] directly when the consumer wants a plain number.
//!
//! ## Example
//!
//! ```
//! use hello_addon_core::{FromValue, IntoValue, Value};
//!
//! let value = 42u32.into_value();
//! assert_eq!(value, Value::Number(42.0));
//! assert_eq!(u32::from_value(&value).unwrap(), 42);
//! ```

use std::path::PathBuf;

use crate::bigint::BigInt;
use crate::error::ConversionError;
use crate::narrow::{mismatch, value_as_bigint, value_as_string};
use crate::path::{as_path, from_path};
use crate::read;
use crate::value::{HostString, Value, ValueKind};
use crate::write;

/// Extract a value from a host value.
pub trait FromValue: Sized {
    /// Returns a `ConversionError` if the value has an incompatible type.
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

/// Convert a value into a host value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

macro_rules! impl_scalar {
    ($($ty:ty => $read:path, $write:path);* $(;)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self, ConversionError> {
                    $read(value)
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    $write(self)
                }
            }
        )*
    };
}

impl_scalar! {
    u8 => read::as_u8, write::from_u8;
    u16 => read::as_u16, write::from_u16;
    u32 => read::as_u32, write::from_u32;
    u64 => read::as_u64, write::from_u64_bigint;
    i8 => read::as_i8, write::from_i8;
    i16 => read::as_i16, write::from_i16;
    i32 => read::as_i32, write::from_i32;
    i64 => read::as_i64, write::from_i64_bigint;
    f32 => read::as_f32, write::from_f32;
    f64 => read::as_f64, write::from_f64;
    bool => read::as_bool, write::from_bool;
    usize => read::as_size, write::from_size;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        read::as_str_utf8(value)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        write::from_str_utf8(&self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        write::from_str_utf8(self)
    }
}

impl FromValue for HostString {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value_as_string(value).cloned()
    }
}

impl IntoValue for HostString {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FromValue for PathBuf {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        as_path(value)
    }
}

impl IntoValue for PathBuf {
    fn into_value(self) -> Value {
        from_path(&self)
    }
}

impl FromValue for BigInt {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value_as_bigint(value).cloned()
    }
}

impl IntoValue for BigInt {
    fn into_value(self) -> Value {
        Value::BigInt(self)
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

// ============================================================================
// Unit and Option
// ============================================================================

impl FromValue for () {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Undefined => Ok(()),
            other => Err(mismatch(ValueKind::Undefined, other)),
        }
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Undefined
    }
}

/// `undefined` reads as `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value.present().map(T::from_value).transpose()
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Undefined,
        }
    }
}

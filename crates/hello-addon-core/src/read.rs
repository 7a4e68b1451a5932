//! Reading native values out of host values.
//!
//! Every reader has an `_or` twin taking `Option<&Value>` and a default. The
//! default is returned when the argument is absent: either `None` or the host's
//! `undefined`. A present value goes through the plain reader and can still
//! fail.
//!
//! ## Integer semantics
//!
//! The 8/16/32-bit readers follow host integer coercion (truncate, then wrap)
//! and never range-check. `as_u64`/`as_i64` accept host numbers as well as
//! bigints; a host number is a double, so integers beyond 2^53 have already
//! lost precision before they get here and that loss is accepted silently.
//! Callers that need exact 64-bit values use `as_u64_bigint`/`as_i64_bigint`,
//! which refuse any bigint that does not fit.

use crate::coerce::{to_boolean, to_int32, to_int64, to_uint32};
use crate::error::ConversionError;
use crate::narrow::{value_as_bigint, value_as_bool, value_as_number, value_as_string};
use crate::value::Value;

/// Generates the `_or` twin of a reader with a `Copy` result.
macro_rules! impl_read_or {
    ($($or_name:ident => $name:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("[`", stringify!($name), "`], or `default` when the value is absent.")]
            pub fn $or_name(value: Option<&Value>, default: $ty) -> Result<$ty, ConversionError> {
                match value.and_then(Value::present) {
                    Some(value) => $name(value),
                    None => Ok(default),
                }
            }
        )*
    };
}

// ============================================================================
// Narrow integers, floats, booleans
// ============================================================================

pub fn as_u8(value: &Value) -> Result<u8, ConversionError> {
    Ok(to_uint32(value_as_number(value)?) as u8)
}

pub fn as_u16(value: &Value) -> Result<u16, ConversionError> {
    Ok(to_uint32(value_as_number(value)?) as u16)
}

pub fn as_u32(value: &Value) -> Result<u32, ConversionError> {
    Ok(to_uint32(value_as_number(value)?))
}

pub fn as_i8(value: &Value) -> Result<i8, ConversionError> {
    Ok(to_int32(value_as_number(value)?) as i8)
}

pub fn as_i16(value: &Value) -> Result<i16, ConversionError> {
    Ok(to_int32(value_as_number(value)?) as i16)
}

pub fn as_i32(value: &Value) -> Result<i32, ConversionError> {
    Ok(to_int32(value_as_number(value)?))
}

pub fn as_f32(value: &Value) -> Result<f32, ConversionError> {
    Ok(value_as_number(value)? as f32)
}

pub fn as_f64(value: &Value) -> Result<f64, ConversionError> {
    value_as_number(value)
}

/// Strict boolean read: only a host boolean is accepted.
pub fn as_bool(value: &Value) -> Result<bool, ConversionError> {
    value_as_bool(value)
}

/// Truthiness of any value. Never fails.
pub fn to_bool(value: &Value) -> bool {
    to_boolean(value)
}

// ============================================================================
// 64-bit integers
// ============================================================================

/// Exact `u64` from a bigint.
pub fn as_u64_bigint(value: &Value) -> Result<u64, ConversionError> {
    let big = value_as_bigint(value)?;
    let (v, lossless) = big.get_u64();
    if !lossless {
        tracing::debug!(value = %big, "bigint does not fit uint64");
        return Err(ConversionError::LossyBigInt { target: "uint64" });
    }
    Ok(v)
}

/// Exact `i64` from a bigint.
pub fn as_i64_bigint(value: &Value) -> Result<i64, ConversionError> {
    let big = value_as_bigint(value)?;
    let (v, lossless) = big.get_i64();
    if !lossless {
        tracing::debug!(value = %big, "bigint does not fit int64");
        return Err(ConversionError::LossyBigInt { target: "int64" });
    }
    Ok(v)
}

/// `u64` from a host number (via the int64 rule, reinterpreted) or a bigint.
pub fn as_u64(value: &Value) -> Result<u64, ConversionError> {
    match value {
        Value::Number(n) => Ok(to_int64(*n) as u64),
        other => as_u64_bigint(other),
    }
}

/// `i64` from a host number or a bigint.
pub fn as_i64(value: &Value) -> Result<i64, ConversionError> {
    match value {
        Value::Number(n) => Ok(to_int64(*n)),
        other => as_i64_bigint(other),
    }
}

/// Native size, read through [`as_u64`].
pub fn as_size(value: &Value) -> Result<usize, ConversionError> {
    Ok(as_u64(value)? as usize)
}

// ============================================================================
// Text
// ============================================================================

pub fn as_str_utf8(value: &Value) -> Result<String, ConversionError> {
    Ok(value_as_string(value)?.to_utf8())
}

pub fn as_str_utf16(value: &Value) -> Result<Vec<u16>, ConversionError> {
    Ok(value_as_string(value)?.as_utf16().to_vec())
}

pub fn as_str_utf8_or(value: Option<&Value>, default: &str) -> Result<String, ConversionError> {
    match value.and_then(Value::present) {
        Some(value) => as_str_utf8(value),
        None => Ok(default.to_owned()),
    }
}

pub fn as_str_utf16_or(value: Option<&Value>, default: &[u16]) -> Result<Vec<u16>, ConversionError> {
    match value.and_then(Value::present) {
        Some(value) => as_str_utf16(value),
        None => Ok(default.to_vec()),
    }
}

impl_read_or! {
    as_u8_or => as_u8: u8,
    as_u16_or => as_u16: u16,
    as_u32_or => as_u32: u32,
    as_u64_or => as_u64: u64,
    as_u64_bigint_or => as_u64_bigint: u64,
    as_i8_or => as_i8: i8,
    as_i16_or => as_i16: i16,
    as_i32_or => as_i32: i32,
    as_i64_or => as_i64: i64,
    as_i64_bigint_or => as_i64_bigint: i64,
    as_f32_or => as_f32: f32,
    as_f64_or => as_f64: f64,
    as_bool_or => as_bool: bool,
    as_size_or => as_size: usize,
}

//! Building host values from native values.
//!
//! 64-bit integers have two writers. `from_u64`/`from_i64` produce a host
//! number, which every consumer understands but which only holds integers up
//! to 2^53 exactly. `from_u64_bigint`/`from_i64_bigint` produce a bigint,
//! which is always exact but must be handled as a bigint on the other side.

use crate::bigint::BigInt;
use crate::value::{HostString, Value};

pub fn from_u8(value: u8) -> Value {
    Value::Number(value.into())
}

pub fn from_u16(value: u16) -> Value {
    Value::Number(value.into())
}

pub fn from_u32(value: u32) -> Value {
    Value::Number(value.into())
}

/// Host number; rounds above 2^53.
pub fn from_u64(value: u64) -> Value {
    Value::Number(value as f64)
}

/// Exact bigint.
pub fn from_u64_bigint(value: u64) -> Value {
    Value::BigInt(BigInt::from_u64(value))
}

pub fn from_i8(value: i8) -> Value {
    Value::Number(value.into())
}

pub fn from_i16(value: i16) -> Value {
    Value::Number(value.into())
}

pub fn from_i32(value: i32) -> Value {
    Value::Number(value.into())
}

/// Host number; rounds beyond ±2^53.
pub fn from_i64(value: i64) -> Value {
    Value::Number(value as f64)
}

/// Exact bigint.
pub fn from_i64_bigint(value: i64) -> Value {
    Value::BigInt(BigInt::from_i64(value))
}

pub fn from_f32(value: f32) -> Value {
    Value::Number(value.into())
}

pub fn from_f64(value: f64) -> Value {
    Value::Number(value)
}

pub fn from_bool(value: bool) -> Value {
    Value::Bool(value)
}

/// Native size as an exact bigint.
pub fn from_size(value: usize) -> Value {
    from_u64_bigint(value as u64)
}

pub fn from_str_utf8(value: &str) -> Value {
    Value::String(HostString::from(value))
}

/// UTF-8 bytes that may be malformed; invalid sequences become U+FFFD.
pub fn from_str_utf8_bytes(value: &[u8]) -> Value {
    from_str_utf8(&String::from_utf8_lossy(value))
}

/// Any UTF-16 code units, unpaired surrogates included.
pub fn from_str_utf16(value: &[u16]) -> Value {
    Value::String(HostString::from_utf16(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_are_numbers() {
        assert_eq!(from_u8(255), Value::Number(255.0));
        assert_eq!(from_u16(65_535), Value::Number(65_535.0));
        assert_eq!(from_u32(u32::MAX), Value::Number(4_294_967_295.0));
        assert_eq!(from_i8(-128), Value::Number(-128.0));
        assert_eq!(from_i16(-1), Value::Number(-1.0));
        assert_eq!(from_i32(i32::MIN), Value::Number(-2_147_483_648.0));
    }

    #[test]
    fn u64_number_writer_rounds() {
        assert_eq!(from_u64(u64::MAX), Value::Number(18_446_744_073_709_551_616.0));
        assert_eq!(from_i64(-(1 << 53) - 1), Value::Number(-9_007_199_254_740_992.0));
    }

    #[test]
    fn u64_bigint_writer_is_exact() {
        assert_eq!(from_u64_bigint(u64::MAX), Value::BigInt(BigInt::from_u64(u64::MAX)));
        assert_eq!(from_i64_bigint(i64::MIN), Value::BigInt(BigInt::from_i64(i64::MIN)));
    }

    #[test]
    fn size_is_bigint() {
        assert_eq!(from_size(3), Value::BigInt(BigInt::from_u64(3)));
    }

    #[test]
    fn floats_and_bools() {
        assert_eq!(from_f32(0.5), Value::Number(0.5));
        assert_eq!(from_f64(-0.25), Value::Number(-0.25));
        assert_eq!(from_bool(true), Value::Bool(true));
    }

    #[test]
    fn strings() {
        assert_eq!(from_str_utf8("abc"), Value::from("abc"));
        assert_eq!(from_str_utf8_bytes(b"a\xffb"), Value::from("a\u{FFFD}b"));
        let lone = [0xDC00u16];
        match from_str_utf16(&lone) {
            Value::String(s) => assert_eq!(s.as_utf16(), &lone),
            other => panic!("expected string, got {other:?}"),
        }
    }
}

//! Host coercion rules for numbers and truthiness.

use crate::value::Value;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Host `ToUint32`: truncate toward zero, wrap modulo 2^32. NaN and infinities
/// become 0.
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Host `ToInt32`: [`to_uint32`] reinterpreted as signed.
pub fn to_int32(n: f64) -> i32 {
    to_uint32(n) as i32
}

/// Host int64 read: truncate toward zero, saturate at the `i64` bounds.
/// NaN and infinities become 0.
pub fn to_int64(n: f64) -> i64 {
    if !n.is_finite() {
        return 0;
    }
    n as i64
}

/// Host `ToBoolean`.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::BigInt(b) => !b.is_zero(),
        Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::BigInt;
    use crate::value::{Function, Object};

    #[test]
    fn uint32_wraps() {
        assert_eq!(to_uint32(0.0), 0);
        assert_eq!(to_uint32(42.9), 42);
        assert_eq!(to_uint32(-1.0), u32::MAX);
        assert_eq!(to_uint32(4_294_967_296.0), 0);
        assert_eq!(to_uint32(4_294_967_297.0), 1);
        assert_eq!(to_uint32(-4_294_967_297.0), u32::MAX);
    }

    #[test]
    fn uint32_non_finite_is_zero() {
        assert_eq!(to_uint32(f64::NAN), 0);
        assert_eq!(to_uint32(f64::INFINITY), 0);
        assert_eq!(to_uint32(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn int32_wraps() {
        assert_eq!(to_int32(-1.0), -1);
        assert_eq!(to_int32(-1.9), -1);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(4_294_967_295.0), -1);
    }

    #[test]
    fn int64_truncates_and_saturates() {
        assert_eq!(to_int64(-3.7), -3);
        assert_eq!(to_int64(9_007_199_254_740_993.0), 9_007_199_254_740_992);
        assert_eq!(to_int64(1e300), i64::MAX);
        assert_eq!(to_int64(-1e300), i64::MIN);
        assert_eq!(to_int64(f64::NAN), 0);
        assert_eq!(to_int64(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn truthiness() {
        assert!(!to_boolean(&Value::Undefined));
        assert!(!to_boolean(&Value::Null));
        assert!(!to_boolean(&Value::Bool(false)));
        assert!(!to_boolean(&Value::Number(0.0)));
        assert!(!to_boolean(&Value::Number(-0.0)));
        assert!(!to_boolean(&Value::Number(f64::NAN)));
        assert!(!to_boolean(&Value::from("")));
        assert!(!to_boolean(&Value::BigInt(BigInt::from_u64(0))));

        assert!(to_boolean(&Value::Bool(true)));
        assert!(to_boolean(&Value::Number(-0.5)));
        assert!(to_boolean(&Value::from("0")));
        assert!(to_boolean(&Value::BigInt(BigInt::from_i64(-1))));
        assert!(to_boolean(&Value::Array(vec![])));
        assert!(to_boolean(&Value::Object(Object::new())));
        assert!(to_boolean(&Value::Function(Function::new("f", 0))));
    }
}

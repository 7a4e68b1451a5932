//! Property tests for the exactness guarantees of the conversion layer.

use std::path::Path;

use hello_addon::path::{as_path, from_path, generic_string};
use hello_addon::read::{
    as_i64_bigint, as_str_utf8, as_str_utf16, as_u8_or, as_u64_bigint, as_u64_bigint_or,
};
use hello_addon::write::{from_i64_bigint, from_str_utf8, from_str_utf16, from_u64_bigint};
use hello_addon::{BigInt, ConversionError, Value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn u64_bigint_round_trip(v in any::<u64>()) {
        prop_assert_eq!(as_u64_bigint(&from_u64_bigint(v)).unwrap(), v);
    }

    #[test]
    fn i64_bigint_round_trip(v in any::<i64>()) {
        prop_assert_eq!(as_i64_bigint(&from_i64_bigint(v)).unwrap(), v);
    }

    #[test]
    fn bigint_in_range_reads_exactly(v in any::<u64>(), negative in any::<bool>()) {
        let big = Value::BigInt(BigInt::from_words(negative, vec![v]));
        let exact = i64::try_from(if negative { -(v as i128) } else { v as i128 }).ok();
        match exact {
            Some(expected) => prop_assert_eq!(as_i64_bigint(&big).unwrap(), expected),
            None => prop_assert!(as_i64_bigint(&big).is_err()),
        }
    }

    #[test]
    fn wider_than_64_bits_is_rejected(low in any::<u64>(), high in 1..=u64::MAX, negative in any::<bool>()) {
        let big = Value::BigInt(BigInt::from_words(negative, vec![low, high]));
        prop_assert_eq!(
            as_u64_bigint(&big).unwrap_err(),
            ConversionError::LossyBigInt { target: "uint64" }
        );
        prop_assert_eq!(
            as_i64_bigint(&big).unwrap_err(),
            ConversionError::LossyBigInt { target: "int64" }
        );
    }

    #[test]
    fn negative_bigint_is_never_a_u64(v in 1..=u64::MAX) {
        let big = Value::BigInt(BigInt::from_words(true, vec![v]));
        prop_assert!(as_u64_bigint(&big).is_err());
    }

    #[test]
    fn utf8_round_trip(s in ".*") {
        let back = as_str_utf8(&from_str_utf8(&s)).unwrap();
        prop_assert_eq!(back.as_bytes(), s.as_bytes());
    }

    #[test]
    fn utf16_round_trip(units in proptest::collection::vec(any::<u16>(), 0..64)) {
        prop_assert_eq!(as_str_utf16(&from_str_utf16(&units)).unwrap(), units);
    }

    #[test]
    fn path_round_trip_keeps_generic_form(s in "(/?[a-zA-Z0-9._-]{1,12}){0,6}") {
        let back = as_path(&from_path(Path::new(&s))).unwrap();
        prop_assert_eq!(generic_string(&back), s);
    }

    #[test]
    fn or_default_only_when_absent(default in any::<u8>(), n in any::<u8>()) {
        prop_assert_eq!(as_u8_or(None, default).unwrap(), default);
        prop_assert_eq!(as_u8_or(Some(&Value::Undefined), default).unwrap(), default);
        prop_assert_eq!(as_u8_or(Some(&Value::Number(n.into())), default).unwrap(), n);
    }

    #[test]
    fn bigint_or_default_only_when_absent(default in any::<u64>(), v in any::<u64>()) {
        prop_assert_eq!(as_u64_bigint_or(None, default).unwrap(), default);
        prop_assert_eq!(as_u64_bigint_or(Some(&from_u64_bigint(v)), default).unwrap(), v);
    }
}

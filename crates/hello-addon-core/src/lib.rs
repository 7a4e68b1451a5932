//! Value model and conversion layer for the hello-addon native module.
//!
//! The host runtime hands native code dynamically typed values. This crate
//! models them as [`Value`] and converts them to and from fixed-width native
//! types:
//!
//! - [`read`]: `as_*` readers plus `as_*_or` twins for optional arguments
//! - [`write`]: `from_*` writers, with both number and bigint forms for 64-bit
//!   integers
//! - [`narrow`]: checked views of a value as one dynamic type
//! - [`path`]: filesystem paths, encoded the way the platform's path APIs
//!   expect
//! - [`convert`]: [`FromValue`]/[`IntoValue`] traits over all of the above
//! - [`nesting`]: cycle and depth guard for converting host containers
//!
//! Reads fail on a bigint that does not fit its 64-bit target
//! ([`ConversionError::LossyBigInt`]) and on a value of the wrong dynamic type
//! ([`ConversionError::TypeMismatch`]). Host bindings additionally report
//! values they cannot copy in (unsupported types, cycles, deep nesting).
//!
//! Arguments reach native functions through [`CallContext`], which a binding
//! backs with an [`Arguments`] source so each argument is converted only when
//! it is read.
//!
//! [`exports::module`] is the addon's export table; the host binding registers
//! every entry when the module loads.

pub mod bigint;
pub mod coerce;
pub mod context;
pub mod convert;
pub mod error;
pub mod exports;
pub mod module;
pub mod narrow;
pub mod nesting;
pub mod path;
pub mod read;
pub mod value;
pub mod write;

pub use bigint::BigInt;
pub use context::{Arguments, CallContext};
pub use convert::{FromValue, IntoValue};
pub use error::{ConversionError, NativeError, RegistrationError};
pub use module::{Export, Module, NativeFn};
pub use value::{Function, HostString, Object, Value, ValueKind};

//! # hello-addon
//!
//! A native addon for a dynamically typed host runtime. It exports one
//! function, `helloWorld`, and ships the value conversion layer that native
//! functions use to read host arguments and build host return values.
//!
//! This crate re-exports [`hello_addon_core`]; the Node.js binding lives in
//! the `hello-addon-node` crate.
//!
//! ```
//! use hello_addon::read::{as_u32_or, as_u64_bigint};
//! use hello_addon::write::from_u64_bigint;
//! use hello_addon::Value;
//!
//! assert_eq!(as_u32_or(Some(&Value::Undefined), 8).unwrap(), 8);
//! assert_eq!(as_u64_bigint(&from_u64_bigint(u64::MAX)).unwrap(), u64::MAX);
//! ```

pub use hello_addon_core::*;

//! Error types for the conversion layer and native functions.
//!
//! ```text
//! NativeError (returned by native functions)
//! ├── Conversion(ConversionError)
//! │   ├── LossyBigInt   - bigint does not fit the 64-bit target exactly
//! │   ├── TypeMismatch  - value has the wrong dynamic type
//! │   ├── Unsupported   - host value with no `Value` counterpart
//! │   ├── Cyclic        - container that contains itself
//! │   └── TooDeep       - containers nested past the limit
//! ├── ArgumentIndexOutOfBounds
//! ├── InvalidArgument
//! ├── Io
//! └── Other
//!
//! RegistrationError (building the export table)
//! ```

use thiserror::Error;

/// Errors that can occur when converting between host values and Rust types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A bigint could not be represented exactly in the target integer type.
    #[error("couldn't convert bigint to {target} losslessly")]
    LossyBigInt { target: &'static str },

    /// The value's dynamic type is not the one the accessor reads.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The host value has a type that `Value` cannot represent.
    #[error("unsupported host value type: {kind}")]
    Unsupported { kind: &'static str },

    /// An array or object refers back to one of its own ancestors.
    #[error("cyclic structure cannot be converted")]
    Cyclic,

    /// Arrays and objects are nested deeper than `limit`.
    #[error("value nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Errors that can occur during native function execution.
#[derive(Debug, Error)]
pub enum NativeError {
    /// Error converting arguments or return values
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Argument index out of bounds
    #[error("argument index {index} out of bounds (function has {count} arguments)")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// The host could not hand over an argument
    #[error("invalid argument {index}: {message}")]
    InvalidArgument { index: usize, message: String },

    /// Writing to the output sink failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic native error
    #[error("native error: {message}")]
    Other { message: String },
}

impl NativeError {
    /// Create a generic native error.
    pub fn other(message: impl Into<String>) -> Self {
        NativeError::Other {
            message: message.into(),
        }
    }
}

/// Errors raised while building a module's export table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two exports were registered under the same name.
    #[error("duplicate export: '{name}' is already registered")]
    DuplicateExport { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_bigint_message_names_target() {
        let err = ConversionError::LossyBigInt { target: "uint64" };
        assert_eq!(
            err.to_string(),
            "couldn't convert bigint to uint64 losslessly"
        );

        let err = ConversionError::LossyBigInt { target: "int64" };
        assert_eq!(err.to_string(), "couldn't convert bigint to int64 losslessly");
    }

    #[test]
    fn conversion_error_type_mismatch() {
        let err = ConversionError::TypeMismatch {
            expected: "number",
            actual: "string",
        };
        assert!(err.to_string().contains("type mismatch"));
        assert!(err.to_string().contains("number"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn native_error_from_conversion() {
        let conv_err = ConversionError::LossyBigInt { target: "int64" };
        let native_err: NativeError = conv_err.into();
        assert!(matches!(native_err, NativeError::Conversion(_)));
        assert!(native_err.to_string().contains("losslessly"));
    }

    #[test]
    fn native_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let native_err: NativeError = io.into();
        assert!(matches!(native_err, NativeError::Io(_)));
    }

    #[test]
    fn nesting_errors() {
        assert_eq!(
            ConversionError::Unsupported { kind: "symbol" }.to_string(),
            "unsupported host value type: symbol"
        );
        assert_eq!(
            ConversionError::TooDeep { limit: 64 }.to_string(),
            "value nested deeper than 64 levels"
        );
        assert!(ConversionError::Cyclic.to_string().contains("cyclic"));
    }

    #[test]
    fn invalid_argument_names_index() {
        let err = NativeError::InvalidArgument {
            index: 2,
            message: "cyclic structure cannot be converted".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument 2: cyclic structure cannot be converted"
        );
    }

    #[test]
    fn native_error_other() {
        let err = NativeError::other("custom");
        assert!(err.to_string().contains("custom"));
    }

    #[test]
    fn registration_error_display() {
        let err = RegistrationError::DuplicateExport {
            name: "helloWorld".into(),
        };
        assert!(err.to_string().contains("helloWorld"));
    }
}

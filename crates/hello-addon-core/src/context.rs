//! Call context bridging the host and native Rust functions.

use std::cell::OnceCell;
use std::io::Write;

use crate::convert::{FromValue, IntoValue};
use crate::error::NativeError;
use crate::value::Value;

/// Arguments the host converts on demand.
///
/// A binding implements this over its raw argument handles so that a native
/// function only pays for, and only fails on, the arguments it reads.
pub trait Arguments {
    /// Number of arguments passed.
    fn count(&self) -> usize;

    /// Convert argument `index`, which is below [`count`](Self::count).
    fn load(&self, index: usize) -> Result<Value, NativeError>;
}

#[derive(Clone, Copy)]
enum Source<'a> {
    Values(&'a [Value]),
    Host(&'a dyn Arguments),
}

/// Context for native function calls.
///
/// Carries the call's arguments, the stdout sink and the return value.
/// Host arguments are converted the first time they are read and cached.
///
/// ## Typed Argument Access
///
/// ```ignore
/// let x: i32 = ctx.arg(0)?;
/// let flags: u8 = ctx.arg_or(1, 0)?;
/// ```
///
/// ## Return Values
///
/// ```ignore
/// ctx.set_return(x + 1);
/// ```
pub struct CallContext<'a> {
    source: Source<'a>,
    loaded: Vec<OnceCell<Value>>,
    stdout: &'a mut dyn Write,
    return_value: Value,
}

impl<'a> CallContext<'a> {
    /// Create a call context over already converted arguments. The return
    /// value starts as `undefined`.
    pub fn new(args: &'a [Value], stdout: &'a mut dyn Write) -> Self {
        Self {
            source: Source::Values(args),
            loaded: Vec::new(),
            stdout,
            return_value: Value::Undefined,
        }
    }

    /// Create a call context whose arguments are converted as they are read.
    pub fn with_arguments(args: &'a dyn Arguments, stdout: &'a mut dyn Write) -> Self {
        Self {
            source: Source::Host(args),
            loaded: (0..args.count()).map(|_| OnceCell::new()).collect(),
            stdout,
            return_value: Value::Undefined,
        }
    }

    pub fn arg_count(&self) -> usize {
        match self.source {
            Source::Values(values) => values.len(),
            Source::Host(host) => host.count(),
        }
    }

    fn out_of_bounds(&self, index: usize) -> NativeError {
        NativeError::ArgumentIndexOutOfBounds {
            index,
            count: self.arg_count(),
        }
    }

    /// Get a raw reference to an argument.
    pub fn arg_slot(&self, index: usize) -> Result<&Value, NativeError> {
        match self.source {
            Source::Values(values) => values.get(index).ok_or_else(|| self.out_of_bounds(index)),
            Source::Host(host) => {
                let cell = self.loaded.get(index).ok_or_else(|| self.out_of_bounds(index))?;
                if let Some(value) = cell.get() {
                    return Ok(value);
                }
                tracing::trace!(index, "converting host argument");
                let value = host.load(index)?;
                Ok(cell.get_or_init(|| value))
            }
        }
    }

    /// Get a typed argument value.
    ///
    /// The argument must have been passed; use [`arg_or`](Self::arg_or) for
    /// optional arguments.
    pub fn arg<T: FromValue>(&self, index: usize) -> Result<T, NativeError> {
        let slot = self.arg_slot(index)?;
        T::from_value(slot).map_err(NativeError::Conversion)
    }

    /// An argument that is present: passed and not `undefined`.
    pub fn arg_opt(&self, index: usize) -> Result<Option<&Value>, NativeError> {
        if index >= self.arg_count() {
            return Ok(None);
        }
        Ok(self.arg_slot(index)?.present())
    }

    /// A typed optional argument, `default` when absent.
    pub fn arg_or<T: FromValue>(&self, index: usize, default: T) -> Result<T, NativeError> {
        match self.arg_opt(index)? {
            Some(value) => T::from_value(value).map_err(NativeError::Conversion),
            None => Ok(default),
        }
    }

    /// The host process's standard output.
    pub fn stdout(&mut self) -> &mut dyn Write {
        &mut *self.stdout
    }

    /// Set a typed return value.
    pub fn set_return<T: IntoValue>(&mut self, value: T) {
        self.return_value = value.into_value();
    }

    /// Set the return value from a raw value.
    pub fn set_return_value(&mut self, value: Value) {
        self.return_value = value;
    }

    /// Take the return value, leaving `undefined` behind.
    pub fn take_return(&mut self) -> Value {
        std::mem::take(&mut self.return_value)
    }
}

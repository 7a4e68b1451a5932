//! Export table of a native module.
//!
//! A [`Module`] is the list of functions the addon puts on the host's
//! `exports` object when it is loaded. Building one is pure data; the host
//! binding walks [`Module::exports`] and registers each entry.

use std::fmt;
use std::io::Write;

use rustc_hash::FxHashSet;

use crate::context::{Arguments, CallContext};
use crate::error::{NativeError, RegistrationError};
use crate::value::Value;

/// Signature of a native function callable from the host.
pub type NativeFn = fn(&mut CallContext<'_>) -> Result<(), NativeError>;

/// One named export.
#[derive(Clone, Copy)]
pub struct Export {
    name: &'static str,
    func: NativeFn,
}

impl Export {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the function against a prepared context.
    pub fn call(&self, ctx: &mut CallContext<'_>) -> Result<(), NativeError> {
        (self.func)(ctx)
    }

    /// Run the function with `args`, writing output to `stdout`, and return
    /// its result value.
    pub fn invoke(&self, args: &[Value], stdout: &mut dyn Write) -> Result<Value, NativeError> {
        let mut ctx = CallContext::new(args, stdout);
        self.call(&mut ctx)?;
        Ok(ctx.take_return())
    }

    /// Like [`invoke`](Self::invoke), converting host arguments only as the
    /// function reads them.
    pub fn invoke_with(
        &self,
        args: &dyn Arguments,
        stdout: &mut dyn Write,
    ) -> Result<Value, NativeError> {
        let mut ctx = CallContext::with_arguments(args, stdout);
        self.call(&mut ctx)?;
        Ok(ctx.take_return())
    }
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Export").field("name", &self.name).finish()
    }
}

/// Exports of a native module, in registration order.
#[derive(Debug, Default)]
pub struct Module {
    exports: Vec<Export>,
    names: FxHashSet<&'static str>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function export.
    ///
    /// ```
    /// # use hello_addon_core::{CallContext, Module, NativeError, RegistrationError};
    /// fn noop(_ctx: &mut CallContext<'_>) -> Result<(), NativeError> {
    ///     Ok(())
    /// }
    ///
    /// # fn main() -> Result<(), RegistrationError> {
    /// let module = Module::new().function("noop", noop)?;
    /// assert_eq!(module.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn function(mut self, name: &'static str, func: NativeFn) -> Result<Self, RegistrationError> {
        if !self.names.insert(name) {
            return Err(RegistrationError::DuplicateExport {
                name: name.to_string(),
            });
        }
        tracing::debug!(export = name, "registered export");
        self.exports.push(Export { name, func });
        Ok(self)
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    pub fn get(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

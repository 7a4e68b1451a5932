//! # hello-addon-node
//!
//! Node.js binding for hello-addon.
//!
//! ```javascript
//! const addon = require('./hello-addon.node');
//! addon.helloWorld(); // prints "hello, world!", returns undefined
//! ```
//!
//! Every function in [`hello_addon_core::exports::module`] is registered on
//! `exports` when the module loads. A call hands the export its raw argument
//! handles; each one goes through [`bridge`] only when the export reads it.
//! The export runs against the process stdout and its return value is
//! converted back. Native errors are thrown into the host as `Error`s.

mod bridge;
mod logging;

use hello_addon_core::{Arguments, ConversionError, Export, NativeError, Value};
use napi::{CallContext, Env, Error, JsObject, JsUnknown, Result, Status};
use napi_derive::module_exports;

#[module_exports]
fn init(mut exports: JsObject, env: Env) -> Result<()> {
    logging::init();

    let module = hello_addon_core::exports::module()
        .map_err(|e| Error::new(Status::GenericFailure, e.to_string()))?;
    for export in module.exports().iter().copied() {
        let func = env.create_function_from_closure(export.name(), move |ctx| call(export, ctx))?;
        exports.set_named_property(export.name(), func)?;
    }
    tracing::debug!(exports = module.len(), "module loaded");
    Ok(())
}

/// A call's argument handles, copied in as the export reads them.
struct HostArguments<'c, 'env> {
    ctx: &'c CallContext<'env>,
}

impl Arguments for HostArguments<'_, '_> {
    fn count(&self) -> usize {
        self.ctx.length
    }

    fn load(&self, index: usize) -> std::result::Result<Value, NativeError> {
        let env = *self.ctx.env;
        self.ctx
            .get::<JsUnknown>(index)
            .map_err(bridge::BridgeError::from)
            .and_then(|value| bridge::from_js(env, value))
            .map_err(|e| NativeError::InvalidArgument {
                index,
                message: e.to_string(),
            })
    }
}

fn call(export: Export, ctx: CallContext<'_>) -> Result<JsUnknown> {
    let env = *ctx.env;
    let args = HostArguments { ctx: &ctx };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let ret = export
        .invoke_with(&args, &mut stdout)
        .map_err(|e| to_napi_error(export.name(), e))?;
    bridge::to_js(env, &ret)
}

fn to_napi_error(name: &str, err: NativeError) -> Error {
    tracing::debug!(export = name, error = %err, "native call failed");
    match err {
        NativeError::Conversion(e @ ConversionError::TypeMismatch { .. }) => {
            Error::new(Status::InvalidArg, e.to_string())
        }
        NativeError::Conversion(e) => Error::new(Status::GenericFailure, e.to_string()),
        e @ NativeError::InvalidArgument { .. } => Error::new(Status::InvalidArg, e.to_string()),
        other => Error::new(Status::GenericFailure, other.to_string()),
    }
}

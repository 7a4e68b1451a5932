//! Functions this addon exports to the host.

use crate::context::CallContext;
use crate::error::{NativeError, RegistrationError};
use crate::module::Module;

/// The line written by `helloWorld`.
pub const GREETING: &str = "hello, world!";

/// `helloWorld()`: print the greeting and return `undefined`.
///
/// Arguments are ignored.
pub fn hello_world(ctx: &mut CallContext<'_>) -> Result<(), NativeError> {
    let out = ctx.stdout();
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    ctx.set_return(());
    Ok(())
}

/// Creates the addon's export table.
pub fn module() -> Result<Module, RegistrationError> {
    Module::new().function("helloWorld", hello_world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_module_creates() {
        let m = module().unwrap();
        assert_eq!(m.len(), 1);
        assert!(m.get("helloWorld").is_some());
    }

    #[test]
    fn hello_world_prints_once_and_returns_undefined() {
        let mut out = Vec::<u8>::new();
        let mut ctx = CallContext::new(&[], &mut out);
        hello_world(&mut ctx).unwrap();
        assert_eq!(ctx.take_return(), Value::Undefined);
        drop(ctx);
        assert_eq!(out, b"hello, world!\n");
    }

    #[test]
    fn hello_world_ignores_arguments() {
        let mut out = Vec::<u8>::new();
        let args = [Value::Number(1.0), Value::from("x")];
        let result = module()
            .unwrap()
            .get("helloWorld")
            .unwrap()
            .invoke(&args, &mut out)
            .unwrap();
        assert_eq!(result, Value::Undefined);
        assert_eq!(out, b"hello, world!\n");
    }
}

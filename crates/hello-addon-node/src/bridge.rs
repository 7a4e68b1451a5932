//! Conversion between N-API handles and [`Value`].
//!
//! Arrays and plain objects are copied recursively. Functions come across as
//! descriptors built from their `name` and `length` properties and cannot be
//! handed back to the host. Symbols and externals have no [`Value`] form.
//! Copying stops with an error at a container that contains itself or at
//! [`MAX_DEPTH`](hello_addon_core::nesting::MAX_DEPTH) levels of nesting.

use hello_addon_core::nesting::Nesting;
use hello_addon_core::{BigInt, ConversionError, Function, HostString, Object, Value};
use napi::{Env, Error, JsBigInt, JsObject, JsString, JsUnknown, Result, Status, ValueType};

/// Failure copying a host value in.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// An N-API call failed, for example a getter threw.
    #[error(transparent)]
    Host(#[from] Error),

    /// The value has no [`Value`] form.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Copy a host value into a [`Value`].
pub fn from_js(env: Env, value: JsUnknown) -> std::result::Result<Value, BridgeError> {
    Copier {
        env,
        nesting: Nesting::new(),
    }
    .copy(value)
}

struct Copier {
    env: Env,
    nesting: Nesting<JsUnknown>,
}

impl Copier {
    fn copy(&mut self, value: JsUnknown) -> std::result::Result<Value, BridgeError> {
        let converted = match value.get_type()? {
            ValueType::Undefined => Value::Undefined,
            ValueType::Null => Value::Null,
            ValueType::Boolean => Value::Bool(value.coerce_to_bool()?.get_value()?),
            ValueType::Number => Value::Number(value.coerce_to_number()?.get_double()?),
            ValueType::String => {
                let units = value.coerce_to_string()?.into_utf16()?;
                Value::String(HostString::from_utf16(units.as_slice()))
            }
            ValueType::BigInt => {
                // SAFETY: the type tag was checked above.
                let mut big = unsafe { value.cast::<JsBigInt>() };
                let (negative, words) = big.get_words()?;
                Value::BigInt(BigInt::from_words(negative, words))
            }
            ValueType::Object if value.is_array()? => {
                // SAFETY: arrays are objects.
                let array = unsafe { value.cast::<JsObject>() };
                self.enter(value)?;
                let len = array.get_array_length()?;
                let mut items = Vec::with_capacity(len as usize);
                for i in 0..len {
                    items.push(self.copy(array.get_element::<JsUnknown>(i)?)?);
                }
                self.nesting.leave();
                Value::Array(items)
            }
            ValueType::Object => {
                // SAFETY: the type tag was checked above.
                let object = unsafe { value.cast::<JsObject>() };
                self.enter(value)?;
                let copied = self.copy_object(&object)?;
                self.nesting.leave();
                Value::Object(copied)
            }
            ValueType::Function => {
                // SAFETY: functions are objects.
                let object = unsafe { value.cast::<JsObject>() };
                Value::Function(function_from_js(&object)?)
            }
            ValueType::Symbol => return Err(unsupported("symbol")),
            ValueType::External => return Err(unsupported("external")),
            _ => return Err(unsupported("unknown")),
        };
        Ok(converted)
    }

    fn enter(&mut self, container: JsUnknown) -> std::result::Result<(), BridgeError> {
        let env = self.env;
        self.nesting.enter(container, |open, candidate| {
            env.strict_equals(open, candidate).map_err(BridgeError::from)
        })
    }

    fn copy_object(&mut self, object: &JsObject) -> std::result::Result<Object, BridgeError> {
        let names = object.get_property_names()?;
        let len = names.get_array_length()?;
        let mut result = Object::new();
        for i in 0..len {
            let key = names
                .get_element::<JsString>(i)?
                .into_utf8()?
                .into_owned()?;
            let property = object.get_named_property_unchecked::<JsUnknown>(&key)?;
            result.set(key, self.copy(property)?);
        }
        Ok(result)
    }
}

fn unsupported(kind: &'static str) -> BridgeError {
    ConversionError::Unsupported { kind }.into()
}

fn function_from_js(object: &JsObject) -> Result<Function> {
    let name = object.get_named_property_unchecked::<JsUnknown>("name")?;
    let name = match name.get_type()? {
        ValueType::String => name.coerce_to_string()?.into_utf8()?.into_owned()?,
        _ => String::new(),
    };
    let arity = object
        .get_named_property_unchecked::<JsUnknown>("length")?
        .coerce_to_number()?
        .get_uint32()?;
    Ok(Function::new(name, arity))
}

/// Create a host value from a [`Value`].
pub fn to_js(env: Env, value: &Value) -> Result<JsUnknown> {
    let converted = match value {
        Value::Undefined => env.get_undefined()?.into_unknown(),
        Value::Null => env.get_null()?.into_unknown(),
        Value::Bool(b) => env.get_boolean(*b)?.into_unknown(),
        Value::Number(n) => env.create_double(*n)?.into_unknown(),
        Value::String(s) => env.create_string_utf16(s.as_utf16())?.into_unknown(),
        Value::BigInt(big) => env
            .create_bigint_from_words(big.is_negative(), big.words().to_vec())?
            .into_unknown()?,
        Value::Array(items) => {
            let mut array = env.create_array_with_length(items.len())?;
            for (i, item) in items.iter().enumerate() {
                array.set_element(i as u32, to_js(env, item)?)?;
            }
            array.into_unknown()
        }
        Value::Object(object) => {
            let mut result = env.create_object()?;
            for (key, item) in object.iter() {
                result.set_named_property(key, to_js(env, item)?)?;
            }
            result.into_unknown()
        }
        Value::Function(func) => {
            return Err(Error::new(
                Status::InvalidArg,
                format!("cannot pass function descriptor '{}' back to the host", func.name),
            ));
        }
    };
    Ok(converted)
}

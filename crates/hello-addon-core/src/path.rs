//! Filesystem paths across the boundary.
//!
//! Windows path APIs are UTF-16, so there the path is built from the string's
//! UTF-16 units and keeps unpaired surrogates. Everywhere else it is built
//! from the UTF-8 form.

use std::path::{Path, PathBuf};

use crate::error::ConversionError;
use crate::value::Value;
use crate::write::from_str_utf8;

#[cfg(windows)]
pub fn as_path(value: &Value) -> Result<PathBuf, ConversionError> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;

    let units = crate::read::as_str_utf16(value)?;
    Ok(PathBuf::from(OsString::from_wide(&units)))
}

#[cfg(not(windows))]
pub fn as_path(value: &Value) -> Result<PathBuf, ConversionError> {
    Ok(PathBuf::from(crate::read::as_str_utf8(value)?))
}

pub fn as_path_or(value: Option<&Value>, default: &Path) -> Result<PathBuf, ConversionError> {
    match value.and_then(Value::present) {
        Some(value) => as_path(value),
        None => Ok(default.to_path_buf()),
    }
}

/// The path in generic form: `/` as the separator on every platform.
pub fn generic_string(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Host string holding the path's generic form.
pub fn from_path(path: &Path) -> Value {
    from_str_utf8(&generic_string(path))
}

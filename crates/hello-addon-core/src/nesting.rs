//! Guard for converting nested host containers.
//!
//! Host arrays and objects can be nested without bound and can contain
//! themselves. A converter keeps one [`Nesting`] per top-level value, calls
//! [`Nesting::enter`] before descending into a container and
//! [`Nesting::leave`] after it. Entering fails with
//! [`ConversionError::Cyclic`] when the container is already open and with
//! [`ConversionError::TooDeep`] past [`MAX_DEPTH`].

use crate::error::ConversionError;

/// Deepest container nesting a converter follows.
pub const MAX_DEPTH: usize = 64;

/// Containers currently open on the path from the root value.
///
/// `K` is whatever handle the host uses for a container; identity is decided
/// by the comparison passed to [`enter`](Self::enter), so handles that are not
/// `Eq` (such as host references compared with strict equality) work too.
#[derive(Debug)]
pub struct Nesting<K> {
    open: Vec<K>,
}

impl<K> Default for Nesting<K> {
    fn default() -> Self {
        Self { open: Vec::new() }
    }
}

impl<K> Nesting<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open containers.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Open `container` if it is not one of its own ancestors.
    ///
    /// `same` compares two handles for identity and may fail with a host
    /// error, which is returned as is.
    pub fn enter<E>(
        &mut self,
        container: K,
        mut same: impl FnMut(&K, &K) -> Result<bool, E>,
    ) -> Result<(), E>
    where
        E: From<ConversionError>,
    {
        if self.open.len() >= MAX_DEPTH {
            tracing::debug!(limit = MAX_DEPTH, "nesting limit reached");
            return Err(ConversionError::TooDeep { limit: MAX_DEPTH }.into());
        }
        for ancestor in &self.open {
            if same(ancestor, &container)? {
                tracing::debug!(depth = self.open.len(), "cycle detected");
                return Err(ConversionError::Cyclic.into());
            }
        }
        self.open.push(container);
        Ok(())
    }

    /// Close the innermost open container.
    pub fn leave(&mut self) {
        self.open.pop();
    }
}

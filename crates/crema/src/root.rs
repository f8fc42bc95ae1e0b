//! Root style context abstraction.
//!
//! The controller projects a flavor onto whatever surface holds the live
//! style state: a webview document root, a native style engine, a test
//! double. [`StyleRoot`] is that seam.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// The surface that holds the active style variables and theme attribute.
///
/// Implementations must tolerate repeated writes: the controller overwrites
/// every variable on each application. Writes are infallible by contract; an
/// implementation whose backend can fail is responsible for handling or
/// reporting that itself.
pub trait StyleRoot: Send + Sync {
    /// Set (or overwrite) a style variable, e.g. `--ctp-base` = `#1e1e2e`.
    fn set_variable(&self, name: &str, value: &str);

    /// Set (or overwrite) a root attribute, e.g. `data-theme` = `mocha`.
    fn set_attribute(&self, name: &str, value: &str);
}

impl<T: StyleRoot + ?Sized> StyleRoot for Arc<T> {
    fn set_variable(&self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }

    fn set_attribute(&self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }
}

/// An in-memory [`StyleRoot`].
///
/// Keeps written variables and attributes in lock-guarded maps with
/// read-back accessors. Serves as a test double and as the source of truth
/// for hosts that render styles themselves.
#[derive(Debug, Default)]
pub struct MemoryStyleRoot {
    variables: RwLock<HashMap<String, String>>,
    attributes: RwLock<HashMap<String, String>>,
}

impl MemoryStyleRoot {
    /// Create an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable value.
    pub fn variable(&self, name: &str) -> Option<String> {
        self.variables.read().get(name).cloned()
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }

    /// Number of variables currently set.
    pub fn variable_count(&self) -> usize {
        self.variables.read().len()
    }
}

impl StyleRoot for MemoryStyleRoot {
    fn set_variable(&self, name: &str, value: &str) {
        self.variables
            .write()
            .insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .insert(name.to_string(), value.to_string());
    }
}

// Ensure MemoryStyleRoot is Send + Sync
static_assertions::assert_impl_all!(MemoryStyleRoot: Send, Sync);

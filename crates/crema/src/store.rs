//! Selection persistence.
//!
//! The last requested flavor identifier is kept under a single fixed key so
//! the next session can restore it. [`SelectionStore`] abstracts the durable
//! mechanism; [`JsonFileStore`] is the file-backed implementation, keeping
//! the key inside a JSON settings object next to whatever else the host
//! stores there.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key under which the selected flavor identifier is persisted.
pub const SELECTION_KEY: &str = "selectedTheme";

/// Durable storage for the selected flavor identifier.
pub trait SelectionStore: Send + Sync {
    /// Load the persisted identifier, if any.
    ///
    /// An absent value is `Ok(None)`, not an error.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the identifier, replacing any previous value.
    fn store(&self, identifier: &str) -> Result<()>;
}

impl<T: SelectionStore + ?Sized> SelectionStore for Arc<T> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn store(&self, identifier: &str) -> Result<()> {
        (**self).store(identifier)
    }
}

/// An in-memory [`SelectionStore`] that forgets on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    selection: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an identifier.
    pub fn with_selection(identifier: impl Into<String>) -> Self {
        Self {
            selection: RwLock::new(Some(identifier.into())),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.selection.read().clone())
    }

    fn store(&self, identifier: &str) -> Result<()> {
        *self.selection.write() = Some(identifier.to_string());
        Ok(())
    }
}

/// A [`SelectionStore`] backed by a JSON settings file.
///
/// The selection lives under the [`SELECTION_KEY`] key of a top-level JSON
/// object; keys the host keeps in the same file survive rewrites. A value
/// under the key that is not a string is treated as absent.
///
/// Writes are read-modify-write on the file. In-process callers are
/// serialized by the controller; coordinating the file across processes is
/// the host's concern.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// File name used inside the application config directory.
    pub const FILE_NAME: &'static str = "settings.json";

    /// Create a store over an explicit settings file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store under the platform config directory for the given
    /// application identity, e.g. `("com.example", "Example Corp", "Demo")`.
    ///
    /// # Errors
    ///
    /// Returns an error if the application directories cannot be determined.
    pub fn for_application(
        qualifier: &str,
        organization: &str,
        application: &str,
    ) -> Result<Self> {
        let dirs = ProjectDirs::from(qualifier, organization, application)
            .ok_or_else(|| Error::app_dirs(application))?;

        Ok(Self {
            path: dirs.config_dir().join(Self::FILE_NAME),
        })
    }

    /// The settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole settings object, or an empty one if the file does not
    /// exist yet.
    fn read_object(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        serde_json::from_str(&contents).map_err(|e| Error::json(&self.path, e))
    }
}

impl SelectionStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>> {
        let object = self.read_object()?;

        Ok(object
            .get(SELECTION_KEY)
            .and_then(Value::as_str)
            .map(String::from))
    }

    fn store(&self, identifier: &str) -> Result<()> {
        let mut object = self.read_object()?;
        object.insert(
            SELECTION_KEY.to_string(),
            Value::String(identifier.to_string()),
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let contents =
            serde_json::to_string_pretty(&object).map_err(|e| Error::json(&self.path, e))?;
        fs::write(&self.path, contents).map_err(|e| Error::io(&self.path, e))?;

        tracing::debug!("Persisted theme selection '{}'", identifier);
        Ok(())
    }
}

// Ensure the stores are Send + Sync
static_assertions::assert_impl_all!(MemoryStore: Send, Sync);
static_assertions::assert_impl_all!(JsonFileStore: Send, Sync);

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime of a persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    /// Survives restarts.
    Local,
    /// Cleared when the dashboard starts.
    Session,
}

impl StorageScope {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageScope::Local => "local",
            StorageScope::Session => "session",
        }
    }
}

impl fmt::Display for StorageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw key/value I/O for persisted state.
///
/// Values are opaque strings (JSON in practice); [`super::StateStore`] owns
/// the encoding. All methods take `&self`, backends use interior mutability
/// or the filesystem.
pub trait StateBackend {
    /// Read a value. `Ok(None)` if the key was never written.
    fn read(&self, scope: StorageScope, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    /// MUST be atomic so a crash never leaves a half-written value.
    fn write(&self, scope: StorageScope, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, scope: StorageScope, key: &str) -> Result<()>;

    /// Keys present in a scope, sorted.
    fn keys(&self, scope: StorageScope) -> Result<Vec<String>>;

    /// Remove every key in a scope.
    fn clear(&self, scope: StorageScope) -> Result<()> {
        for key in self.keys(scope)? {
            self.remove(scope, &key)?;
        }
        Ok(())
    }
}

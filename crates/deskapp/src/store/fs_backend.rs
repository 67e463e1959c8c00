use super::backend::{StateBackend, StorageScope};
use crate::error::{DeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores each value as `<root>/<scope>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scope_dir(&self, scope: StorageScope) -> PathBuf {
        self.root.join(scope.as_str())
    }

    fn value_path(&self, scope: StorageScope, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(DeskError::Store(format!("Invalid state key: {:?}", key)));
        }
        Ok(self.scope_dir(scope).join(format!("{}.json", key)))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DeskError::Io)?;
        }
        Ok(())
    }
}

impl StateBackend for FsBackend {
    fn read(&self, scope: StorageScope, key: &str) -> Result<Option<String>> {
        let path = self.value_path(scope, key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(DeskError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(scope, key)?;
        let dir = self.scope_dir(scope);
        self.ensure_dir(&dir)?;

        let tmp_path = dir.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(DeskError::Io)?;
        fs::rename(&tmp_path, path).map_err(DeskError::Io)?;

        Ok(())
    }

    fn remove(&self, scope: StorageScope, key: &str) -> Result<()> {
        let path = self.value_path(scope, key)?;
        if path.exists() {
            fs::remove_file(path).map_err(DeskError::Io)?;
        }
        Ok(())
    }

    fn keys(&self, scope: StorageScope) -> Result<Vec<String>> {
        let dir = self.scope_dir(scope);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&dir).map_err(DeskError::Io)? {
            let path = entry.map_err(DeskError::Io)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !stem.starts_with('.') {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

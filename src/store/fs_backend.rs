use super::backend::StorageBackend;
use crate::error::{RecircleError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one JSON file per slot under a root directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Per-user data directory for the app, created lazily on first write.
    pub fn default_root() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "recircle")
            .ok_or_else(|| RecircleError::Store("No home directory available".to_string()))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecircleError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(RecircleError::Io)?;
        Ok(Some(payload))
    }

    fn write_raw(&self, key: &str, payload: &str) -> Result<()> {
        self.ensure_root()?;

        let target = self.slot_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(RecircleError::Io)?;
        fs::rename(&tmp, target).map_err(RecircleError::Io)?;

        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(RecircleError::Io)?;
        }
        Ok(())
    }
}

//! JSON-file-backed slot store.
//!
//! All slots live in one JSON object on disk. Every mutation rewrites the
//! whole file through a temp-file-and-rename, so a crash mid-write leaves
//! the previous state intact rather than a torn file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::traits::SlotStore;
use crate::error::{JournalError, Result};

/// Slot store persisted as a single JSON file.
#[derive(Debug)]
pub struct FileSlotStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

impl FileSlotStore {
    /// Open a store at `path`, loading existing slots when the file
    /// exists. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                JournalError::Storage(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                JournalError::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, slots })
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_out(&self) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            JournalError::Storage(format!(
                "Store path has no parent directory: {}",
                self.path.display()
            ))
        })?;
        std::fs::create_dir_all(parent).map_err(|e| {
            JournalError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let contents = serde_json::to_string_pretty(&self.slots)
            .map_err(|e| JournalError::Storage(format!("Failed to serialize store: {}", e)))?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| JournalError::Storage(format!("System time error: {}", e)))?
            .as_nanos();
        let temp_path = parent.join(format!(".solace-{}.tmp", nanos));

        std::fs::write(&temp_path, contents).map_err(|e| {
            JournalError::Storage(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        set_file_permissions(&temp_path)?;

        if let Err(err) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&self.path);
            std::fs::rename(&temp_path, &self.path).map_err(|e| {
                let _ = std::fs::remove_file(&temp_path);
                JournalError::Storage(format!("Atomic rename failed ({}): {}", err, e))
            })?;
        }
        Ok(())
    }
}

impl SlotStore for FileSlotStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.write_out()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.slots.remove(key).is_some() {
            self.write_out()?;
        }
        Ok(())
    }
}

fn set_file_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

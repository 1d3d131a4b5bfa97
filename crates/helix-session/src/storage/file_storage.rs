use crate::storage::{SessionStorage, validate_key};
use crate::{StorageError, StorageResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const SLOT_EXTENSION: &str = "json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Slot store backed by one JSON file per key inside a directory.
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }

    /// Moves a corrupted slot aside for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`. Returns
    /// `None` when there is no slot to back up.
    pub fn backup_corrupted(&self, key: &str) -> StorageResult<Option<PathBuf>> {
        let path = self.slot_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{key}.{SLOT_EXTENSION}.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| StorageError::backup_failed(path.clone(), e))?;

        warn!("Backed up corrupted slot to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No slot file at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    /// Writes via temp file, fsync, then atomic rename so a crash mid-write
    /// never leaves a truncated slot behind.
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.slot_path(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{SLOT_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        info!("Wrote slot {key} to {final_path:?}");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed slot {key} at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}

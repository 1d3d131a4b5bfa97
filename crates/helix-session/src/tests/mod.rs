//! Unit tests for the session crate.
//!
//! These tests can access crate internals via `use crate::`.

mod error;

use crate::{SessionStorage, StorageError, StorageResult};

use std::path::PathBuf;

/// Storage whose reads succeed with fixed contents but whose writes fail.
pub(crate) struct ReadOnlyStorage {
    pub(crate) contents: Option<String>,
}

impl SessionStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::file_write(
            PathBuf::from("/read-only"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(StorageError::file_remove(
            PathBuf::from("/read-only"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

/// Storage whose reads always fail.
pub(crate) struct UnreadableStorage;

impl SessionStorage for UnreadableStorage {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::file_read(
            PathBuf::from("/locked"),
            std::io::Error::other("locked by another process"),
        ))
    }

    fn write(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::{StorageError, StorageResult};

/// A client-local key-value slot store.
///
/// Each key names one slot holding one string value. Reads of a missing slot
/// return `Ok(None)`; removing a missing slot is not an error.
pub trait SessionStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Slot names double as file names, so they are restricted to `[A-Za-z0-9_-]`.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "key cannot be empty"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StorageError::invalid_key(
            key,
            "key may only contain [A-Za-z0-9_-]",
        ));
    }

    Ok(())
}

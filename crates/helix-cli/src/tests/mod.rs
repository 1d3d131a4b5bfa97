//! Unit tests for the CLI crate.


use crate::App;

use helix_session::{FileStorage, MemoryStorage, SessionStore};

use tempfile::TempDir;

/// A fresh invocation over the slot directory `dir`.
pub(crate) fn start_app(dir: &TempDir) -> App {
    App::start(SessionStore::new(FileStorage::new(dir.path())), false)
}

pub(crate) fn signed_in(email: &str) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.initialize();
    store.login(email, "x").unwrap();
    store
}

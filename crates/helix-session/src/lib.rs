//! Session lifecycle for the Helix HR assistant.
//!
//! A [`SessionStore`] owns at most one signed-in [`Identity`](helix_core::Identity),
//! persisted in a single key-value slot of a [`SessionStorage`] backend. The
//! [`ViewRouter`] maps the store's state to the view that should be shown.

pub mod error;
pub mod load_outcome;
pub mod session_phase;
pub mod session_snapshot;
pub mod session_store;
pub mod storage;
pub mod view_router;

pub use helix_core::DEFAULT_SESSION_KEY;

pub use error::{SessionError, SessionResult, StorageError, StorageResult};
pub use load_outcome::LoadOutcome;
pub use session_phase::SessionPhase;
pub use session_snapshot::SessionSnapshot;
pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use view_router::{ViewRouter, route};

#[cfg(test)]
mod tests;

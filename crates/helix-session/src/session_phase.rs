use serde::Serialize;

/// Top-level lifecycle state of a [`SessionStore`](crate::SessionStore).
///
/// `Uninitialized -> Loading -> {Authenticated, Anonymous}`, then
/// `Authenticated <-> Anonymous` via logout/login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Constructed, `initialize()` not yet run
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

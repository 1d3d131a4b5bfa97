use helix_core::Identity;

use serde::Serialize;

/// Result of hydrating the session slot.
///
/// Distinguishes "no slot" from "slot present but unusable" for diagnostics.
/// Only `identity` affects the session; the error fields are informational.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadOutcome {
    pub identity: Option<Identity>,
    /// Present if the slot exists but does not decode as an identity
    pub corruption_error: Option<String>,
    /// Present if the slot could not be read at all
    pub read_error: Option<String>,
}

impl LoadOutcome {
    pub(crate) fn empty() -> Self {
        Self {
            identity: None,
            corruption_error: None,
            read_error: None,
        }
    }

    pub(crate) fn loaded(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            ..Self::empty()
        }
    }

    pub(crate) fn corrupted(message: String) -> Self {
        Self {
            corruption_error: Some(message),
            ..Self::empty()
        }
    }

    pub(crate) fn unreadable(message: String) -> Self {
        Self {
            read_error: Some(message),
            ..Self::empty()
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}

use crate::route;

use helix_core::{Identity, View};

use serde::Serialize;

/// Read-only copy of the observable session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn view(&self) -> View {
        route(self.loading, self.identity.as_ref())
    }
}

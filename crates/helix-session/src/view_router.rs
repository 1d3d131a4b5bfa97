use crate::{SessionStore, SessionStorage};

use helix_core::{Identity, UserRole, View};

/// Selects the view for a session state.
///
/// Total over every `(loading, identity)` pair: loading wins, then the
/// absence of an identity, then the identity's role.
pub fn route(loading: bool, identity: Option<&Identity>) -> View {
    if loading {
        return View::LoadingIndicator;
    }

    match identity.map(Identity::role) {
        None => View::LoginForm,
        Some(UserRole::Hr) => View::HrDashboard,
        Some(UserRole::Employee) => View::EmployeeDashboard,
    }
}

/// Routes the live state of a session store. Never mutates it.
pub struct ViewRouter<'a, S> {
    store: &'a SessionStore<S>,
}

impl<'a, S: SessionStorage> ViewRouter<'a, S> {
    pub fn new(store: &'a SessionStore<S>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> View {
        route(self.store.is_loading(), self.store.identity())
    }
}

use crate::{
    LoadOutcome, SessionError, SessionPhase, SessionResult, SessionSnapshot, SessionStorage,
    route,
};

use helix_core::{DEFAULT_HR_EMAIL, DEFAULT_SESSION_KEY, Identity, UserRole, View};

use std::str::FromStr;

use log::{debug, error, info, warn};

/// Owner of the single current identity and its persisted slot.
///
/// Mutators take `&mut self`: one writer at a time. Share across threads by
/// wrapping the whole store in a `Mutex`.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    hr_email: String,
    identity: Option<Identity>,
    loading: bool,
    hydrated: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// A store in the `Uninitialized` phase. Routes to the loading indicator
    /// until [`initialize`](Self::initialize) runs.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: String::from(DEFAULT_SESSION_KEY),
            hr_email: String::from(DEFAULT_HR_EMAIL),
            identity: None,
            loading: true,
            hydrated: false,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Override the address that signs in with the HR role.
    pub fn with_hr_email(mut self, hr_email: impl Into<String>) -> Self {
        self.hr_email = hr_email.into();
        self
    }

    /// Hydrate the current identity from the persisted slot.
    ///
    /// Never fails: a missing, unreadable or undecodable slot leaves the store
    /// anonymous. `loading` is false afterwards in every case.
    pub fn initialize(&mut self) -> LoadOutcome {
        self.loading = true;

        let outcome = match self.storage.read(&self.key) {
            Ok(None) => {
                info!("No persisted session in slot '{}'", self.key);
                LoadOutcome::empty()
            }
            Ok(Some(raw)) => self.decode(&raw),
            Err(e) => {
                warn!(
                    "Unable to read session slot '{}': {e} ({})",
                    self.key,
                    e.recovery_hint()
                );
                LoadOutcome::unreadable(e.to_string())
            }
        };

        self.identity = outcome.identity.clone();
        self.hydrated = true;
        self.loading = false;

        outcome
    }

    /// Sign in as `email`.
    ///
    /// The role and profile follow from the email alone. `password` is
    /// accepted and ignored; there is no credential check and no rejection
    /// path. Any previous identity is overwritten.
    pub fn login(&mut self, email: &str, _password: &str) -> SessionResult<&Identity> {
        self.loading = true;

        let identity = Identity::sign_in(email, &self.hr_email);
        let persisted = self.persist(&identity);

        self.loading = false;
        persisted?;

        info!(
            "Signed in {} as {} ({})",
            identity.email(),
            identity.role(),
            identity.id()
        );

        self.hydrated = true;
        let identity = &*self.identity.insert(identity);
        Ok(identity)
    }

    /// Sign out, clearing both the slot and the in-memory identity.
    ///
    /// No-op when nobody is signed in. On storage failure the identity is kept
    /// so memory and slot stay consistent.
    pub fn logout(&mut self) -> SessionResult<()> {
        let Some(identity) = self.identity.as_ref() else {
            debug!("Logout with no active session; nothing to do");
            return Ok(());
        };

        let email = identity.email().to_string();
        self.storage.remove(&self.key)?;
        self.identity = None;

        info!("Signed out {email}");
        Ok(())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The current identity, or `NotSignedIn`.
    #[track_caller]
    pub fn require_identity(&self) -> SessionResult<&Identity> {
        self.identity.as_ref().ok_or_else(SessionError::not_signed_in)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.hydrated {
            SessionPhase::Uninitialized
        } else if self.loading {
            SessionPhase::Loading
        } else if self.identity.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity: self.identity.clone(),
            loading: self.loading,
        }
    }

    pub fn view(&self) -> View {
        route(self.loading, self.identity.as_ref())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn hr_email(&self) -> &str {
        &self.hr_email
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, identity: &Identity) -> SessionResult<()> {
        let json = serde_json::to_string(identity)?;
        self.storage.write(&self.key, &json)?;
        Ok(())
    }

    fn decode(&self, raw: &str) -> LoadOutcome {
        match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => {
                info!(
                    "Restored session for {} ({})",
                    identity.email(),
                    identity.role()
                );
                LoadOutcome::loaded(identity)
            }
            Err(e) => {
                match unrecognized_role(raw) {
                    Some(role) => error!(
                        "Session slot '{}' holds unrecognized role '{role}'; ignoring it",
                        self.key
                    ),
                    None => warn!("Session slot '{}' is corrupted: {e}", self.key),
                }
                LoadOutcome::corrupted(e.to_string())
            }
        }
    }
}

/// The `role` field of a JSON object, if it is present and not a known role.
fn unrecognized_role(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let role = value.get("role")?;

    match role.as_str() {
        Some(name) if UserRole::from_str(name).is_ok() => None,
        Some(name) => Some(name.to_string()),
        None => Some(role.to_string()),
    }
}

//! Identity - the single durable entity of a session.

use crate::{IdentityProfile, UserRole};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user as held by the session store and persisted in the
/// identity slot.
///
/// Fields are read-only once constructed: the role never changes for the
/// lifetime of an identity, and `created_at` is fixed at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    email: String,
    role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    created_at: String,
}

impl Identity {
    /// Build the identity for a sign-in attempt, stamped with the current time.
    pub fn sign_in(email: &str, hr_email: &str) -> Self {
        Self::sign_in_at(email, hr_email, Utc::now())
    }

    /// Build the identity for a sign-in attempt at a given instant.
    pub fn sign_in_at(email: &str, hr_email: &str, at: DateTime<Utc>) -> Self {
        let profile = IdentityProfile::for_email(email, hr_email);
        Self {
            id: profile.id.to_string(),
            email: email.to_string(),
            role: profile.role,
            name: Some(profile.name.to_string()),
            department: Some(profile.department.to_string()),
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// First word of the display name, used for greetings.
    pub fn first_name(&self) -> Option<&str> {
        self.name().and_then(|name| name.split_whitespace().next())
    }

    pub fn is_hr(&self) -> bool {
        self.role == UserRole::Hr
    }
}

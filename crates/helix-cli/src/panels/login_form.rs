use crate::panels::BRAND;

use helix_session::{SessionStorage, SessionStore};

use std::fmt;

/// Sign-in prompt shown when nobody is signed in.
#[derive(Debug, Clone)]
pub struct LoginForm {
    hr_email: String,
}

impl LoginForm {
    pub fn open<S: SessionStorage>(store: &SessionStore<S>) -> Self {
        Self {
            hr_email: store.hr_email().to_string(),
        }
    }
}

impl fmt::Display for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BRAND} HR assistant")?;
        writeln!(f, "Sign in to continue:")?;
        writeln!(f, "  helix login --email <address> [--password <password>]")?;
        writeln!(f)?;
        writeln!(f, "Demo accounts:")?;
        writeln!(f, "  HR:       {}", self.hr_email)?;
        writeln!(f, "  Employee: any other address")
    }
}

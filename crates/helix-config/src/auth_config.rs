use crate::{ConfigError, ConfigErrorResult, DEFAULT_HR_EMAIL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Sign-in address that receives the HR role
    pub hr_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hr_email: String::from(DEFAULT_HR_EMAIL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let email = self.hr_email.trim();
        if email.is_empty() || !email.contains('@') || email != self.hr_email {
            return Err(ConfigError::auth(format!(
                "auth.hr_email must be an email address without surrounding whitespace, got '{}'",
                self.hr_email
            )));
        }

        Ok(())
    }
}

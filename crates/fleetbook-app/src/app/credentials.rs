//! Admin password and list key checks

use crate::config::Config;

/// Secrets the site checks visitors against
///
/// An unset or empty secret never matches.
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    admin_password: Option<String>,
    list_key: Option<String>,
}

impl AdminCredentials {
    pub fn new(admin_password: Option<String>, list_key: Option<String>) -> Self {
        Self {
            admin_password,
            list_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_password.clone(), config.list_key.clone())
    }

    pub fn verify_password(&self, provided: &str) -> bool {
        matches_secret(self.admin_password.as_deref(), Some(provided))
    }

    pub fn validate_list_key(&self, provided: Option<&str>) -> bool {
        matches_secret(self.list_key.as_deref(), provided)
    }

    /// Whether admin login is possible at all
    pub fn login_enabled(&self) -> bool {
        self.admin_password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

fn matches_secret(expected: Option<&str>, provided: Option<&str>) -> bool {
    match (expected, provided) {
        (Some(expected), Some(provided)) => !expected.is_empty() && expected == provided,
        _ => false,
    }
}

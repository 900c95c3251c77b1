// src/auth.rs

/// Access level granted by a successful sign-in.
///
/// The core exposes no admin-only operations; the role is surfaced so the
/// presentation layer can unlock its own screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Admin,
}

/// Pluggable credential check for the login gate.
pub trait Authenticator {
    /// Returns the granted role, or `None` if the credentials are rejected
    fn validate(&self, username: &str, password: &str) -> Option<Role>;
}

/// Fixed-account authenticator: one privileged account, every other
/// non-empty credential pair signs in as a regular player.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    admin_username: String,
    admin_password: String,
}

impl StaticAuthenticator {
    pub fn new(admin_username: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
        }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::new("admin", "change-me")
    }
}

impl Authenticator for StaticAuthenticator {
    fn validate(&self, username: &str, password: &str) -> Option<Role> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        if username == self.admin_username && password == self.admin_password {
            Some(Role::Admin)
        } else {
            Some(Role::Player)
        }
    }
}

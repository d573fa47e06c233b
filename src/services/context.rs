//! Authentication context and state management.

use dioxus::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};

/// Shared authentication state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub token: Signal<Option<String>>,
    pub is_admin: Signal<bool>,
    pub current_user: Signal<Option<String>>,
}

/// Read-only view of [`AuthState`] taken during one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub token: Option<String>,
    pub is_admin: bool,
}

impl AuthSnapshot {
    /// Snapshot used when no auth context is available.
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            is_admin: false,
        }
    }
}

impl AuthState {
    /// Opens a local session for the given username.
    pub fn login(&mut self, username: &str, admin: bool) -> Result<(), String> {
        if !is_valid_username(username) {
            return Err("Username must be 3-16 characters long and can only contain letters, numbers, and underscores".to_string());
        }

        self.token.set(Some(issue_token(username)));
        self.is_admin.set(admin);
        self.current_user.set(Some(username.to_string()));
        tracing::info!(username, admin, "session opened");

        Ok(())
    }

    /// Ends the current session. Guarded pages flip to the login redirect on
    /// their next render pass.
    pub fn logout(&mut self) {
        tracing::info!(username = %self.get_username(), "session closed");
        self.token.set(None);
        self.is_admin.set(false);
        self.current_user.set(None);
    }

    /// Copies the two fields the route guard reads.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            token: self.token.read().clone(),
            is_admin: *self.is_admin.read(),
        }
    }

    /// Gets the current username or returns "Guest" as default.
    pub fn get_username(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map_or_else(|| "Guest".to_string(), Clone::clone)
    }
}

/// Validates if a username meets the requirements.
pub fn is_valid_username(username: &str) -> bool {
    (3..=16).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Opaque stand-in for a real credential; the guard only ever checks presence.
fn issue_token(username: &str) -> String {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    format!("local.{username}.{nonce:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rule_matches_login_form() {
        assert!(is_valid_username("steve"));
        assert!(is_valid_username("Admin_01"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("a_very_long_username"));
        assert!(!is_valid_username("bad name"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn issued_tokens_are_present() {
        let token = issue_token("steve");
        assert!(!token.is_empty());
        assert!(token.starts_with("local.steve."));
    }

    #[test]
    fn anonymous_snapshot_has_no_token() {
        let snapshot = AuthSnapshot::anonymous();
        assert_eq!(snapshot.token, None);
        assert!(!snapshot.is_admin);
    }
}

//! Simulated sign-in state.
//!
//! # Invariants
//! - Logged out means `display_name == DEFAULT_DISPLAY_NAME`.
//! - No credential is verified; the caller checks the email shape before `login`.

use serde::{Deserialize, Serialize};

/// Display name shown while nobody is signed in.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Sign-in flag plus the name rendered in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    is_authenticated: bool,
    display_name: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session signed in and derives the display name from `email`.
    ///
    /// The caller must ensure `email` contains `@`. Without one, the whole
    /// input becomes the display name.
    pub fn login(&mut self, email: &str) {
        self.is_authenticated = true;
        self.display_name = display_name_from_email(email).to_string();
    }

    /// Resets to the signed-out defaults.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.display_name = DEFAULT_DISPLAY_NAME.to_string();
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Returns the local part of an email address (text before the first `@`).
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

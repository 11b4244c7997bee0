#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and bootstrap status.
///
/// `loading` is true only while a stored token is being verified at app
/// start; pages hold their login redirect until it settles.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Owner identity used for session listing and creation.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Tear down after logout or a rejected token.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

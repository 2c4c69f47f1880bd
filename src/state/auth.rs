#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::AuthCheckError;
use crate::net::types::User;

/// Phase of the one-shot session check run at application start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// The check is in flight; the router must not render yet.
    #[default]
    Checking,
    /// The check returned a user. Terminal for this application load.
    Authenticated,
    /// The check failed for any reason. Terminal for this application load.
    Unauthenticated,
}

/// Authentication state: the gate phase and the single session user slot.
///
/// Provided to the component tree as an `RwSignal` context. The session gate
/// writes it exactly once per application load; afterwards only a successful
/// login or registration replaces the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
}

impl AuthState {
    /// True while the initial session check has not settled.
    pub fn is_checking(&self) -> bool {
        self.phase == AuthPhase::Checking
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// Settle the gate with the outcome of the session check.
    ///
    /// Every failure variant collapses to [`AuthPhase::Unauthenticated`]: a
    /// visitor without a session and an unreachable server are
    /// indistinguishable at this layer.
    pub fn resolve(&mut self, outcome: Result<User, AuthCheckError>) {
        match outcome {
            Ok(user) => {
                self.phase = AuthPhase::Authenticated;
                self.user = Some(user);
            }
            Err(_) => {
                self.phase = AuthPhase::Unauthenticated;
                self.user = None;
            }
        }
    }

    /// Replace the session user after a successful login or registration.
    pub fn sign_in(&mut self, user: User) {
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
    }
}

use super::*;
use crate::net::types::Role;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        username: "jdoe".to_owned(),
        email: "jdoe@example.com".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        role: Role::Student,
        profile_photo: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_checking() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Checking);
    assert!(state.is_checking());
    assert!(state.user.is_none());
}

#[test]
fn checking_is_distinct_from_unauthenticated() {
    // Both carry no user, but the gate must tell them apart: one renders
    // the loading placeholder, the other the route table.
    let checking = AuthState::default();
    let mut settled = AuthState::default();
    settled.resolve(Err(AuthCheckError::Denied(401)));
    assert_ne!(checking.phase, settled.phase);
}

// =============================================================
// Resolving the session check
// =============================================================

#[test]
fn resolve_success_stores_exactly_that_user() {
    let mut state = AuthState::default();
    state.resolve(Ok(user("u-1")));
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(user("u-1")));
}

#[test]
fn resolve_failure_collapses_every_cause() {
    // 401, 500, transport error and malformed body all land in the same
    // terminal state with no distinguishing signal.
    let failures = [
        AuthCheckError::Denied(401),
        AuthCheckError::Denied(500),
        AuthCheckError::Transport("connection refused".to_owned()),
        AuthCheckError::Malformed("unexpected end of input".to_owned()),
    ];
    let mut expected = AuthState::default();
    expected.resolve(Err(AuthCheckError::Denied(401)));

    for err in failures {
        let mut state = AuthState::default();
        state.resolve(Err(err));
        assert_eq!(state, expected);
        assert_eq!(state.phase, AuthPhase::Unauthenticated);
        assert!(state.user.is_none());
    }
}

#[test]
fn resolve_failure_clears_a_previous_user() {
    let mut state = AuthState::default();
    state.resolve(Ok(user("u-1")));
    state.resolve(Err(AuthCheckError::Denied(401)));
    assert_eq!(state.phase, AuthPhase::Unauthenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Signing in after the gate
// =============================================================

#[test]
fn sign_in_replaces_the_user_wholesale() {
    let mut state = AuthState::default();
    state.resolve(Err(AuthCheckError::Denied(401)));

    state.sign_in(user("u-2"));
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-2"));

    state.sign_in(user("u-3"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-3"));
}

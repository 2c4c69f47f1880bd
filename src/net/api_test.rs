use super::*;

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/auth/user/"), "http://127.0.0.1:8000/api/auth/user/");
    assert_eq!(endpoint("/auth/login/"), "http://127.0.0.1:8000/api/auth/login/");
    assert_eq!(
        endpoint("/auth/register/"),
        "http://127.0.0.1:8000/api/auth/register/"
    );
}

#[test]
fn base_address_is_fixed() {
    assert!(endpoint("/anything").starts_with(API_BASE));
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn error_variants_are_distinguishable() {
    let denied = AuthCheckError::Denied(401);
    let transport = AuthCheckError::Transport("refused".to_owned());
    let malformed = AuthCheckError::Malformed("eof".to_owned());
    assert_ne!(denied, transport);
    assert_ne!(transport, malformed);
    assert_ne!(denied, AuthCheckError::Denied(500));
}

#[test]
fn error_display_names_the_cause() {
    assert_eq!(
        AuthCheckError::Denied(401).to_string(),
        "request denied with status 401"
    );
    assert_eq!(
        AuthCheckError::Transport("refused".to_owned()).to_string(),
        "transport failure: refused"
    );
}

use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), admin: false, active: true }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unauthenticated_and_unchecked() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(!state.checked);
    assert!(state.user.is_none());
    assert!(state.username().is_none());
}

// =============================================================
// AuthReducer
// =============================================================

#[test]
fn sign_in_sets_user_and_flags() {
    let state = AuthReducer::reduce(&AuthState::default(), AuthAction::SignIn(alice()));
    assert!(state.is_authenticated);
    assert!(state.checked);
    assert_eq!(state.username().as_deref(), Some("alice"));
}

#[test]
fn sign_out_clears_user_but_stays_checked() {
    let signed_in = AuthReducer::reduce(&AuthState::default(), AuthAction::SignIn(alice()));
    let state = AuthReducer::reduce(&signed_in, AuthAction::SignOut);
    assert!(!state.is_authenticated);
    assert!(state.checked);
    assert!(state.user.is_none());
}

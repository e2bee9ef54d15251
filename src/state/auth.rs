//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the root layout to gate navigation chrome and by route guards to
//! redirect to login. Written only in response to sign-in / sign-out events.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::store::Reducer;
use crate::net::types::User;

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// True once the session has been checked with the server at least once.
    pub checked: bool,
    pub user: Option<User>,
}

impl AuthState {
    pub fn username(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.username.clone())
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SignIn(User),
    SignOut,
}

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(_state: &AuthState, action: AuthAction) -> AuthState {
        match action {
            AuthAction::SignIn(user) => AuthState { is_authenticated: true, checked: true, user: Some(user) },
            AuthAction::SignOut => AuthState { is_authenticated: false, checked: true, user: None },
        }
    }
}

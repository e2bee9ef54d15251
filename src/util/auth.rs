//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior. The
//! redirect waits until the session has been checked so a slow `/users/me`
//! does not bounce a signed-in user to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a protected page should send the user to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.checked && !state.is_authenticated
}

/// Redirect to `/login` whenever auth has been checked and no session exists.
pub fn install_unauth_redirect<F>(auth: ReadSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

//! Login page with username + password sign-in.
//!
//! Rendered without navigation chrome. Hides the full-page spinner on mount
//! because nothing else on this route loads data.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthReducer;
use crate::state::spinner::{SpinnerAction, SpinnerReducer};
use crate::state::store::{use_action_context, use_slice, use_state_context};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_state_context::<AuthReducer>();
    let set_auth = use_action_context::<AuthReducer>();
    let set_spinner = use_action_context::<SpinnerReducer>();
    let navigate = use_navigate();

    set_spinner.dispatch(SpinnerAction::Hide);

    let is_authenticated = use_slice(&auth, |s| s.is_authenticated);
    Effect::new(move || {
        if is_authenticated.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(username_value) = normalized_username(&username.get()) else {
            info.set("Enter a username.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let set_auth = set_auth.clone();
            let credentials = crate::net::types::Credentials { username: username_value, password: password.get() };
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(()) => match crate::net::api::fetch_current_user().await {
                        Some(user) => set_auth.dispatch(crate::state::auth::AuthAction::SignIn(user)),
                        None => info.set("Signed in, but the session could not be loaded.".to_owned()),
                    },
                    Err(e) => info.set(format!("Sign in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&set_auth, username_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trimmed username, or `None` when nothing usable was typed.
fn normalized_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

//! Fallback for unknown routes.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;

use crate::state::spinner::{SpinnerAction, SpinnerReducer};
use crate::state::store::use_action_context;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Nothing loads here, so the startup spinner must not outlive the mount.
    use_action_context::<SpinnerReducer>().dispatch(SpinnerAction::Hide);

    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}

//! Top navigation bar for authenticated sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows cluster identity from the Info store, the signed-in user, a theme
//! toggle, and sign-out.

use leptos::prelude::*;

use crate::state::info::InfoReducer;
use crate::state::store::{use_slice, use_state_context};
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn NavBar(#[prop(into)] username: Signal<Option<String>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let info = use_state_context::<InfoReducer>();
    let cluster_name = use_slice(&info, |s| s.info.as_ref().map(|i| i.cluster_name.clone()).unwrap_or_default());

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // Hard navigation drops every store along with the session.
            crate::util::browser::assign("/login");
        });
    };

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "Cluster"
            </a>
            <span class="nav-bar__cluster">{move || cluster_name.get()}</span>
            <div class="nav-bar__spacer"></div>
            <button class="nav-bar__button" on:click=on_toggle_theme title="Toggle theme">
                {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
            </button>
            <span class="nav-bar__user">{move || username.get().unwrap_or_default()}</span>
            <button class="nav-bar__button" on:click=on_sign_out>
                "Sign Out"
            </button>
        </header>
    }
}

//! Collapsible side navigation.

use leptos::prelude::*;

use crate::state::ui::UiState;

const LINKS: &[(&str, &str)] = &[("/", "Dashboard"), ("/cluster", "Cluster")];

#[component]
pub fn SideBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_collapse = move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);

    view! {
        <nav class=move || if ui.get().sidebar_collapsed { "side-bar side-bar--collapsed" } else { "side-bar" }>
            {LINKS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <a href=*href class="side-bar__link">
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
            <button class="side-bar__collapse" on:click=on_collapse>
                {move || if ui.get().sidebar_collapsed { ">" } else { "<" }}
            </button>
        </nav>
    }
}

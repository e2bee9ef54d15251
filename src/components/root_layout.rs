//! Root layout: navigation chrome gated on auth, routed content, overlays.
//!
//! ARCHITECTURE
//! ============
//! What to render is decided by `LayoutPlan`, a pure function of auth and
//! spinner state, so the gating rules are testable without a DOM. The
//! component only maps the plan onto views. The spinner overlay is rendered
//! last so it covers everything else.

#[cfg(test)]
#[path = "root_layout_test.rs"]
mod root_layout_test;

use leptos::prelude::*;

use crate::components::app_contexts::AppContexts;
use crate::components::nav_bar::NavBar;
use crate::components::notification_stack::NotificationStack;
use crate::components::side_bar::SideBar;
use crate::components::spinner::Spinner;
use crate::state::spinner::SpinnerState;

/// Which layout pieces are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutPlan {
    pub show_nav_bar: bool,
    pub show_app_contexts: bool,
    pub show_side_bar: bool,
    /// Full-page overlay; `Some(opaque)` when showing.
    pub spinner: Option<bool>,
}

impl LayoutPlan {
    pub fn resolve(is_authenticated: bool, spinner: SpinnerState) -> Self {
        Self {
            show_nav_bar: is_authenticated,
            show_app_contexts: is_authenticated,
            show_side_bar: is_authenticated,
            spinner: spinner.is_showing.then_some(spinner.is_opaque),
        }
    }
}

/// Application frame around the routed page content.
#[component]
pub fn RootLayout(
    #[prop(into)] is_authenticated: Signal<bool>,
    #[prop(into)] username: Signal<Option<String>>,
    #[prop(into)] spinner: Signal<SpinnerState>,
    children: ChildrenFn,
) -> impl IntoView {
    let plan = Memo::new(move |_| LayoutPlan::resolve(is_authenticated.get(), spinner.get()));

    view! {
        <div class="app">
            <Show when=move || plan.get().show_nav_bar>
                <NavBar username=username/>
            </Show>
            <Show when=move || plan.get().show_app_contexts>
                <AppContexts/>
            </Show>
            <div class="app__body">
                <Show when=move || plan.get().show_side_bar>
                    <SideBar/>
                </Show>
                <main class="app__main">{children()}</main>
            </div>
            <NotificationStack/>
            {move || plan.get().spinner.map(|opaque| view! { <Spinner full_page=true opaque=opaque/> })}
        </div>
    }
}

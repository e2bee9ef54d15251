//! Loading indicator, optionally covering the whole page.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] full_page: bool, #[prop(optional)] opaque: bool) -> impl IntoView {
    view! {
        <div class=spinner_class(full_page, opaque) role="progressbar" aria-busy="true">
            <div class="spinner__ring"></div>
        </div>
    }
}

fn spinner_class(full_page: bool, opaque: bool) -> String {
    let mut class = String::from("spinner");
    if full_page {
        class.push_str(" spinner--full-page");
    }
    if opaque {
        class.push_str(" spinner--opaque");
    }
    class
}

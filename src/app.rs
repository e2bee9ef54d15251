//! Root application component: provider composition, bootstrap flows, routing.
//!
//! ARCHITECTURE
//! ============
//! `App` mounts every domain store through the provider composer, outermost
//! first, so each store is visible to all later providers and to the routed
//! pages. `AppView` runs inside that scope and starts the session-wide flows:
//! the auth check, platform info polling, the version-skew and telemetry
//! watchers, and the busy favicon.
//!
//! `start_bootstrap` holds the store wiring so it can run against plain
//! stores; `AppView` only adds the browser timers and teardown.
//!
//! TRADE-OFFS
//! ==========
//! Watchers are plain store subscriptions rather than Leptos effects so they
//! fire exactly once per dispatched update, including updates carrying an
//! identical payload.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::root_layout::RootLayout;
use crate::config::AppConfig;
use crate::pages::{
    cluster::ClusterPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
};
use crate::state::auth::AuthReducer;
use crate::state::cluster::ClusterReducer;
use crate::state::collections::{
    ActiveExperimentsReducer, AgentsReducer, CommandsReducer, ExperimentsReducer, NotebooksReducer, ShellsReducer,
    TensorboardsReducer, UsersReducer,
};
use crate::state::info::InfoReducer;
use crate::state::notifications::NotificationsReducer;
use crate::state::spinner::{SpinnerAction, SpinnerReducer};
use crate::state::store::{
    Dispatcher, Reducer, StateReader, Subscription, store_provider, use_action_context, use_slice,
    use_state_context,
};
use crate::state::ui::UiState;
use crate::util::compose::{Provider, Subtree, compose};
use crate::util::info_refresh::InfoRefresh;
use crate::util::telemetry::{self, AnalyticsClient, PageTracker, SegmentAnalytics};
use crate::util::version_skew::VersionSkewNotifier;
use crate::util::{dark_mode, favicon};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=favicon::icon_href(false)/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// One named entry of the provider stack.
fn named<R: Reducer>(name: &'static str) -> (&'static str, Provider<AnyView>)
where
    R::State: Default,
{
    (name, store_provider::<R>())
}

/// Store providers in mount order; earlier entries enclose later ones.
fn store_providers() -> Vec<(&'static str, Provider<AnyView>)> {
    vec![
        named::<AuthReducer>("auth"),
        named::<InfoReducer>("info"),
        named::<UsersReducer>("users"),
        named::<AgentsReducer>("agents"),
        named::<ClusterReducer>("cluster"),
        named::<ActiveExperimentsReducer>("active_experiments"),
        named::<ExperimentsReducer>("experiments"),
        named::<CommandsReducer>("commands"),
        named::<NotebooksReducer>("notebooks"),
        named::<ShellsReducer>("shells"),
        named::<TensorboardsReducer>("tensorboards"),
        named::<SpinnerReducer>("spinner"),
        named::<NotificationsReducer>("notifications"),
    ]
}

fn compose_stores(subtree: Subtree<AnyView>) -> Subtree<AnyView> {
    let providers = store_providers()
        .into_iter()
        .map(|(name, provider)| {
            log::debug!("mounting {name} store");
            provider
        })
        .collect();
    compose(providers, subtree)
}

/// Session-wide watchers plus the info refresher they react to.
pub struct Bootstrap {
    refresh: InfoRefresh,
    watches: Vec<Subscription>,
}

impl Bootstrap {
    pub fn refresh(&self) -> &InfoRefresh {
        &self.refresh
    }

    /// Stop reacting to Info and discard any in-flight info response.
    pub fn shutdown(self) {
        self.refresh.cancel();
        drop(self.watches);
    }
}

/// Wire the Info-driven flows: favicon, version-skew banner, telemetry.
pub fn start_bootstrap<C, F>(
    build_version: &str,
    info: &StateReader<InfoReducer>,
    set_info: Dispatcher<InfoReducer>,
    notifications: Dispatcher<NotificationsReducer>,
    cluster: &StateReader<ClusterReducer>,
    analytics: C,
    set_icon: F,
) -> Bootstrap
where
    C: AnalyticsClient + Send + 'static,
    F: FnMut(bool) + Send + 'static,
{
    let watches = vec![
        favicon::watch(cluster, set_icon),
        VersionSkewNotifier::new(build_version).watch(info, notifications),
        telemetry::watch(info, analytics),
    ];
    Bootstrap { refresh: InfoRefresh::new(set_info), watches }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let prefers_dark = dark_mode::read_preference();
    dark_mode::apply(prefers_dark);
    provide_context(AppConfig::default());
    provide_context(RwSignal::new(UiState { dark_mode: prefers_dark, ..UiState::default() }));

    let tree = compose_stores(Box::new(|| view! { <AppView/> }.into_any()));

    view! {
        <Stylesheet id="leptos" href="/pkg/webui.css"/>
        <Title text="Cluster WebUI"/>
        {tree()}
    }
}

/// Everything below the store providers: bootstrap flows plus the routed layout.
#[component]
fn AppView() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = use_state_context::<AuthReducer>();
    let info = use_state_context::<InfoReducer>();
    let cluster = use_state_context::<ClusterReducer>();
    let spinner = use_state_context::<SpinnerReducer>();

    // Blocks the first paint until a page reports it is ready.
    use_action_context::<SpinnerReducer>().dispatch(SpinnerAction::Show { opaque: true });

    let bootstrap = start_bootstrap(
        &config.build_version,
        &info,
        use_action_context::<InfoReducer>(),
        use_action_context::<NotificationsReducer>(),
        &cluster,
        SegmentAnalytics,
        favicon::apply,
    );
    #[cfg(feature = "hydrate")]
    {
        let poll_refresh = bootstrap.refresh().clone();
        crate::util::polling::use_polling(
            move || poll_refresh.spawn(),
            Signal::stored(config.info_poll_delay_ms),
        );
        check_session(use_action_context::<AuthReducer>());
    }
    on_cleanup(move || bootstrap.shutdown());

    let is_authenticated = use_slice(&auth, |s| s.is_authenticated);
    let username = use_slice(&auth, |s| s.username());
    let spinner_state = use_slice(&spinner, |s| *s);

    view! {
        <Router>
            <RouteAnalytics/>
            <RootLayout is_authenticated=is_authenticated username=username spinner=spinner_state>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("cluster") view=ClusterPage/>
                </Routes>
            </RootLayout>
        </Router>
    }
}

/// Record a page view for each client-side route change.
#[component]
fn RouteAnalytics() -> impl IntoView {
    let info = use_state_context::<InfoReducer>();
    let telemetry = use_slice(&info, |s| s.info.as_ref().map(|i| i.telemetry.clone()).unwrap_or_default());
    let location = use_location();
    let tracker = StoredValue::new(PageTracker::default());

    Effect::new(move || {
        let path = location.pathname.get();
        let telemetry = telemetry.get_untracked();
        tracker.update_value(|t| {
            t.visit(&path, &telemetry, &SegmentAnalytics);
        });
    });
}

/// Resolve the current session once on startup.
#[cfg(feature = "hydrate")]
fn check_session(auth: Dispatcher<AuthReducer>) {
    use crate::state::auth::AuthAction;

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(user) => {
                log::info!("session active for {}", user.username);
                auth.dispatch(AuthAction::SignIn(user));
            }
            None => auth.dispatch(AuthAction::SignOut),
        }
    });
}

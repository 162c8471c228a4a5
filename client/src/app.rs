//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{notification_stack::NotificationStack, slideshow_modal::SlideshowModal};
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, registration::RegistrationPage, tracks::TracksPage,
};
use crate::state::{
    notifications::NotificationsState, session::SessionState, slideshow::SlideshowState, ui::UiState,
};
use crate::util::{navigation, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

/// Restores the stored session on every route change. Must live inside the router.
#[component]
fn SessionRestore() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();
    navigation::install_session_restore(session, move || location.pathname.get(), navigate);
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let slideshow = RwSignal::new(SlideshowState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(notifications);
    provide_context(slideshow);
    provide_context(ui);

    Effect::new(move || {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|s| s.theme = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/outliers.css"/>
        <Title text="The Outliers"/>

        <NotificationStack/>
        <Router>
            <SessionRestore/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("registration") view=RegistrationPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("tracks") view=TracksPage/>
                </Routes>
            </main>
        </Router>
        <SlideshowModal/>
    }
}

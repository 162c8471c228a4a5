//! Post-login dashboard: a single call to action into the tracks page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo_button::LogoButton;
use crate::state::session::SessionState;
use crate::util::navigation;

/// Page name recorded when leaving the dashboard for the tracks page.
const TRACKS_PAGE: &str = "tracks";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    let on_home = Callback::new(move |()| navigation::go_home(session, &navigate_home));

    let on_explore = move |_| {
        navigation::save_session(session, true, Some(TRACKS_PAGE), "/dashboard");
        navigate("/tracks", NavigateOptions::default());
    };

    view! {
        <div class="dashboard">
            <img class="dashboard__background" src="/assets/yourein.png" alt="Background"/>
            <LogoButton on_home=on_home/>
            <div class="dashboard__content">
                <div class="dashboard__text">
                    <h1 class="dashboard__title">"it's "<br/>"time!"</h1>
                    <button class="hover-button" on:click=on_explore>
                        <span class="hover-button__label">"explore tracks"</span>
                        <span class="hover-button__arrow">"→"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

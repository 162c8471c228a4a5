//! Landing page with the join/login calls to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::logo_button::LOGO_SRC;
use crate::state::session::{DASHBOARD_PAGE, SessionState};
use crate::state::slideshow::SlideshowState;
use crate::state::ui::{Theme, UiState};
use crate::util::{navigation, theme};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let slideshow = expect_context::<RwSignal<SlideshowState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_know_more = move |_| slideshow.update(SlideshowState::open);
    let on_toggle_theme = move |_| ui.update(|s| s.theme = theme::toggle(s.theme));

    let nav_dashboard = navigate.clone();
    let on_dashboard = move |_| {
        navigation::save_session(session, true, Some(DASHBOARD_PAGE), "/");
        nav_dashboard("/dashboard", NavigateOptions::default());
    };
    let nav_logout = navigate.clone();
    let on_logout = move |_| {
        navigation::save_session(session, false, None, "/");
        nav_logout("/", NavigateOptions::default());
    };
    let nav_join = navigate.clone();
    let on_join = move |_| nav_join("/registration", NavigateOptions::default());
    let on_login = move |_| navigate("/login", NavigateOptions::default());

    let theme_label = move || match ui.get().theme {
        Theme::Dark => "light mode",
        Theme::Light => "dark mode",
    };

    view! {
        <div class="home">
            <div class="logo-corner">
                <img src=LOGO_SRC alt="Logo" class="logo-button__img"/>
            </div>
            <button class="theme-toggle" on:click=on_toggle_theme>{theme_label}</button>
            <div class="home__text">
                <h1 class="home__title">"hi, this is "<br/>"The Outliers."</h1>
                <p class="home__blurb">
                    "this is where the boldest biology students come to play, solve, and stand out. "
                    "where biology meets ideas, innovation, and imagination. "
                    <button class="link-button" on:click=on_know_more>"know more..."</button>
                </p>
                <div class="home__actions">
                    <Show
                        when=move || session.get().logged_in
                        fallback=move || {
                            let on_join = on_join.clone();
                            let on_login = on_login.clone();
                            view! {
                                <button class="button button--accent" on:click=on_join>"ready to join"</button>
                                <button class="button button--outline" on:click=on_login>"login"</button>
                            }
                        }
                    >
                        {
                            let on_dashboard = on_dashboard.clone();
                            let on_logout = on_logout.clone();
                            view! {
                                <button class="button button--accent" on:click=on_dashboard>"go to dashboard"</button>
                                <button class="button button--outline" on:click=on_logout>"logout"</button>
                            }
                        }
                    </Show>
                </div>
            </div>
            <div class="home__image">
                <img src="/assets/home.jpg" alt="Background"/>
                <div class="home__image-shade"></div>
            </div>
        </div>
    }
}

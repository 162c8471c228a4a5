//! Tracks showcase: four hoverable image panels and a content column.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::logo_button::LogoButton;
use crate::state::session::SessionState;
use crate::state::tracks::{REVEAL_DELAY_MS, TRACKS, content_for, drop_delay_ms, flex_basis};
use crate::util::navigation;

#[component]
pub fn TracksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let on_home = Callback::new(move |()| navigation::go_home(session, &navigate));

    let hovered = RwSignal::new(None::<u8>);
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REVEAL_DELAY_MS).await;
        revealed.set(true);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = REVEAL_DELAY_MS;

    let panels = TRACKS
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let id = track.id;
            let style = move || {
                format!(
                    "flex-basis: {}; transition-delay: {}ms",
                    flex_basis(id, hovered.get()),
                    drop_delay_ms(index)
                )
            };
            view! {
                <div
                    class="track-panel"
                    class:track-panel--visible=move || revealed.get()
                    class:track-panel--hovered=move || hovered.get() == Some(id)
                    style=style
                    on:mouseenter=move |_| hovered.set(Some(id))
                    on:mouseleave=move |_| hovered.set(None)
                >
                    <img class="track-panel__image" src=track.image alt=track.title/>
                    <div class="track-panel__overlay">
                        <span class="track-panel__title">{track.title}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let content = move || content_for(hovered.get());

    view! {
        <div class="tracks">
            <LogoButton on_home=on_home/>
            <div class="tracks__panels">{panels}</div>
            <div class="tracks__content">
                {move || {
                    let c = content();
                    view! {
                        <div class="tracks__text">
                            <h1 class="tracks__heading">{c.heading}</h1>
                            <p class="tracks__description">{c.description}</p>
                            <p class="tracks__detail">
                                {c.detail}
                                {c.emphasis.map(|e| view! { " "<span class="tracks__emphasis">{e}</span> })}
                            </p>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

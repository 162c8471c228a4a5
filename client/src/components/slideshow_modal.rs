//! Fullscreen "know more" slideshow with button and swipe paging.

use leptos::prelude::*;

use crate::state::slideshow::SlideshowState;

#[cfg(feature = "hydrate")]
fn first_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.target_touches().get(0).map(|t| f64::from(t.client_x()))
}

/// Slideshow modal driven by the `SlideshowState` in context.
#[component]
pub fn SlideshowModal() -> impl IntoView {
    let slideshow = expect_context::<RwSignal<SlideshowState>>();

    let on_close = move |_| slideshow.update(SlideshowState::close);
    let on_prev = move |_| slideshow.update(SlideshowState::prev);
    let on_next = move |_| slideshow.update(SlideshowState::next);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            slideshow.update(SlideshowState::close);
        }
        "ArrowLeft" => slideshow.update(SlideshowState::prev),
        "ArrowRight" => slideshow.update(SlideshowState::next),
        _ => {}
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(x) = first_touch_x(&ev) {
            slideshow.update(|s| s.touch_start(x));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "hydrate")]
        if let Some(x) = first_touch_x(&ev) {
            slideshow.update(|s| s.touch_move(x));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_touch_end = move |_| slideshow.update(SlideshowState::touch_end);

    view! {
        <Show when=move || slideshow.get().open>
            <div class="slideshow__backdrop" tabindex="0" on:keydown=on_keydown>
                <button
                    class="slideshow__nav slideshow__nav--prev"
                    title="Previous page"
                    disabled=move || !slideshow.get().can_prev()
                    on:click=on_prev
                >
                    "<"
                </button>
                <button
                    class="slideshow__nav slideshow__nav--next"
                    title="Next page"
                    disabled=move || !slideshow.get().can_next()
                    on:click=on_next
                >
                    ">"
                </button>
                <button class="slideshow__close" title="Close" on:click=on_close>
                    "×"
                </button>
                <div class="slideshow">
                    <div
                        class="slideshow__viewport"
                        on:touchstart=on_touch_start
                        on:touchmove=on_touch_move
                        on:touchend=on_touch_end
                    >
                        <img
                            class="slideshow__image"
                            src=move || slideshow.get().image_src()
                            alt=move || format!("Know More - Page {}", slideshow.get().page)
                        />
                    </div>
                    <div class="slideshow__page">{move || slideshow.get().page_label()}</div>
                </div>
            </div>
        </Show>
    }
}

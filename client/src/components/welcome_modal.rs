//! Post-registration modal revealing the generated password.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Success modal. The backdrop runs `on_close`; the "let's go" button runs `on_continue`.
#[component]
pub fn WelcomeModal(password: String, on_close: Callback<()>, on_continue: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let gradient = move || format!("--card-gradient: {}", ui.get().theme.card_gradient());

    view! {
        <div class="modal">
            <div class="modal__backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal__content">
                <div class="magic-card" style=gradient>
                    <div class="modal__body">
                        <div class="modal__icon">"✓"</div>
                        <h2 class="modal__title">"welcome to The Outliers"</h2>
                        <p class="modal__message">"you're officially part of something different."</p>
                        <div class="modal__password">
                            <p class="modal__password-label">"your permanent password:"</p>
                            <code class="modal__password-value">{password}</code>
                            <p class="modal__password-hint">"save this - you'll need it to login"</p>
                        </div>
                        <button class="button button--accent" on:click=move |_| on_continue.run(())>
                            "let's go"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

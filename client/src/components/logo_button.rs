//! Site logo that doubles as the home button.

use leptos::prelude::*;

/// Logo used on image backgrounds.
pub const LOGO_SRC: &str = "/assets/imagetrans.png";

/// Logo variant used on the form pages.
pub const FORM_LOGO_SRC: &str = "/assets/image2.png";

/// Logo in the top-left corner. Clicking it runs `on_home`.
#[component]
pub fn LogoButton(on_home: Callback<()>, #[prop(default = LOGO_SRC)] src: &'static str) -> impl IntoView {
    view! {
        <div class="logo-corner">
            <button class="logo-button" title="Home" on:click=move |_| on_home.run(())>
                <img src=src alt="Logo" class="logo-button__img"/>
            </button>
        </div>
    }
}

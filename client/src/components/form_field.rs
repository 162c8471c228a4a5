//! Labeled text input with an inline validation message.

use leptos::prelude::*;

/// One form row. `on_input` receives the new value on every keystroke.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>{label}</label>
            <input
                id=id
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

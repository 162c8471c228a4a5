//! Registration page posting member details to the registration webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! The member never types a password: one is generated per submission, sent
//! with the form, and shown once in the welcome modal when the webhook reports
//! a new member.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::logo_button::{FORM_LOGO_SRC, LogoButton};
use crate::components::welcome_modal::WelcomeModal;
use crate::forms::{FormErrors, RegistrationForm, field, validate_registration};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::webhook::WebhookError;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::navigation;

/// Static description of one registration input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

/// Inputs in display order, rendered two per row.
pub(crate) const FIELDS: [FieldSpec; 8] = [
    FieldSpec { id: field::NAME, label: "Name *", input_type: "text", placeholder: "Your full name" },
    FieldSpec { id: field::EMAIL, label: "Email *", input_type: "email", placeholder: "name@example.com" },
    FieldSpec { id: field::WHATSAPP, label: "WhatsApp Number *", input_type: "tel", placeholder: "+1234567890" },
    FieldSpec {
        id: field::LINKEDIN,
        label: "LinkedIn Profile *",
        input_type: "url",
        placeholder: "https://linkedin.com/in/yourprofile",
    },
    FieldSpec { id: field::COLLEGE, label: "College *", input_type: "text", placeholder: "Your college/university" },
    FieldSpec { id: field::COURSE, label: "Course *", input_type: "text", placeholder: "Your course/major" },
    FieldSpec { id: field::CITY, label: "City *", input_type: "text", placeholder: "Your city" },
    FieldSpec { id: field::AGE, label: "Age *", input_type: "number", placeholder: "25" },
];

/// Alert copy for a failed registration request.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn registration_alert_message(err: &WebhookError) -> &'static str {
    match err {
        WebhookError::Status(_) => "Registration failed. Please try again.",
        WebhookError::Network(_) | WebhookError::Encode(_) | WebhookError::Decode(_) => {
            "Network error. Please check your connection and try again."
        }
    }
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Registering..." } else { "Register" }
}

/// Registration page with the eight-field form and the welcome modal.
#[component]
pub fn RegistrationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    // Password issued by the last successful registration; shows the modal.
    let issued_password = RwSignal::new(None::<String>);

    let navigate_home = navigate.clone();
    let on_home = Callback::new(move |()| navigation::go_home(session, &navigate_home));

    let navigate_login = navigate.clone();
    let on_login_instead = move |_| navigate_login("/login", NavigateOptions::default());

    let on_modal_close = Callback::new(move |()| {
        issued_password.set(None);
        form.set(RegistrationForm::default());
    });
    let navigate_after = navigate.clone();
    let on_modal_continue = Callback::new(move |()| {
        on_modal_close.run(());
        navigate_after("/login", NavigateOptions::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let details = form.get_untracked();
        let found = validate_registration(&details);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::forms::generate_password;
            use crate::net::webhook::{RegistrationOutcome, submit_registration};
            use crate::state::notifications::{NotificationKind, notify};

            let password = generate_password();
            let result = submit_registration(&details.with_password(password.clone())).await;
            busy.set(false);
            match result {
                Ok(RegistrationOutcome::Created) => {
                    issued_password.set(Some(password));
                    notify(notifications, NotificationKind::Registration);
                }
                Ok(RegistrationOutcome::AlreadyRegistered) => {
                    notify(notifications, NotificationKind::Warning);
                }
                Err(e) => {
                    log::error!("registration request failed: {e}");
                    crate::util::browser::alert(registration_alert_message(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (details, notifications);
    };

    let gradient = move || format!("--card-gradient: {}", ui.get().theme.card_gradient());

    let fields = FIELDS
        .chunks(2)
        .map(|row| {
            let inputs = row
                .iter()
                .map(|spec| {
                    let id = spec.id;
                    let on_input = Callback::new(move |value: String| {
                        form.update(|f| {
                            if let Some(slot) = f.field_mut(id) {
                                *slot = value;
                            }
                        });
                        errors.update(|e| e.clear(id));
                    });
                    view! {
                        <FormField
                            id=id
                            label=spec.label
                            input_type=spec.input_type
                            placeholder=spec.placeholder
                            value=Signal::derive(move || form.with(|f| f.field(id).unwrap_or_default().to_owned()))
                            error=Signal::derive(move || errors.with(|e| e.get(id)))
                            on_input=on_input
                        />
                    }
                })
                .collect_view();
            view! { <div class="form-card__row">{inputs}</div> }
        })
        .collect_view();

    view! {
        <div class="form-page">
            <div class="meteors"></div>
            <Show when=move || issued_password.get().is_some()>
                <WelcomeModal
                    password=issued_password.get_untracked().unwrap_or_default()
                    on_close=on_modal_close
                    on_continue=on_modal_continue
                />
            </Show>
            <LogoButton on_home=on_home src=FORM_LOGO_SRC/>
            <div class="form-page__center">
                <div class="magic-card form-card" style=gradient>
                    <div class="form-card__header">
                        <h1 class="form-card__title">"Join The Outliers"</h1>
                        <p class="form-card__description">
                            "Fill in your details to become part of our community"
                        </p>
                    </div>
                    <form class="form-card__body" on:submit=on_submit>
                        {fields}
                        <div class="form-card__footer">
                            <button class="button button--accent button--full" type="submit" disabled=move || busy.get()>
                                {move || submit_label(busy.get())}
                            </button>
                            <button class="button button--accent button--full" type="button" on:click=on_login_instead>
                                "Login Instead"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

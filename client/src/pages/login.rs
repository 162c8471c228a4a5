//! Login page posting credentials to the login webhook.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::components::logo_button::{FORM_LOGO_SRC, LogoButton};
use crate::forms::{FormErrors, LoginForm, field, validate_login};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::webhook::WebhookError;
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::navigation;

/// Alert copy for a failed login request.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_alert_message(err: &WebhookError) -> &'static str {
    match err {
        WebhookError::Status(_) => "Login failed. Please try again.",
        WebhookError::Network(_) | WebhookError::Encode(_) | WebhookError::Decode(_) => {
            "Network error. Please check your connection and try again."
        }
    }
}

pub(crate) fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing In..." } else { "Sign In" }
}

/// Login page: email + password, redirects to `/dashboard` on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_email = Callback::new(move |value: String| {
        form.update(|f| f.email = value);
        errors.update(|e| e.clear(field::EMAIL));
    });
    let on_password = Callback::new(move |value: String| {
        form.update(|f| f.password = value);
        errors.update(|e| e.clear(field::PASSWORD));
    });

    let navigate_home = navigate.clone();
    let on_home = Callback::new(move |()| navigation::go_home(session, &navigate_home));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = form.get_untracked();
        let found = validate_login(&credentials);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::net::webhook::{LoginOutcome, submit_login};
                use crate::state::notifications::{NotificationKind, notify};
                use crate::state::session::DASHBOARD_PAGE;

                let result = submit_login(&credentials).await;
                busy.set(false);
                match result {
                    Ok(LoginOutcome::Accepted) => {
                        notify(notifications, NotificationKind::Login);
                        navigation::save_session(session, true, Some(DASHBOARD_PAGE), "/login");
                        form.set(LoginForm::default());
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Ok(LoginOutcome::Rejected) => notify(notifications, NotificationKind::Error),
                    Err(e) => {
                        log::error!("login request failed: {e}");
                        crate::util::browser::alert(login_alert_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, notifications, &navigate);
    };

    let gradient = move || format!("--card-gradient: {}", ui.get().theme.card_gradient());

    view! {
        <div class="form-page">
            <div class="meteors"></div>
            <LogoButton on_home=on_home src=FORM_LOGO_SRC/>
            <div class="form-page__center">
                <div class="magic-card form-card form-card--narrow" style=gradient>
                    <div class="form-card__header">
                        <h1 class="form-card__title">"Login"</h1>
                        <p class="form-card__description">"Enter your credentials to access your account"</p>
                    </div>
                    <form class="form-card__body" on:submit=on_submit>
                        <FormField
                            id=field::EMAIL
                            label="Email *"
                            input_type="email"
                            placeholder="name@example.com"
                            value=Signal::derive(move || form.get().email)
                            error=Signal::derive(move || errors.get().get(field::EMAIL))
                            on_input=on_email
                        />
                        <FormField
                            id=field::PASSWORD
                            label="Password *"
                            input_type="password"
                            placeholder="Your password"
                            value=Signal::derive(move || form.get().password)
                            error=Signal::derive(move || errors.get().get(field::PASSWORD))
                            on_input=on_password
                        />
                        <div class="form-card__footer">
                            <button class="button button--accent button--full" type="submit" disabled=move || busy.get()>
                                {move || submit_label(busy.get())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

//! Toast stack for webhook notifications, pinned top-right.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationsState};

#[component]
fn NotificationCard(notification: Notification) -> impl IntoView {
    let kind = notification.kind;
    view! {
        <figure class="notification">
            <div class="notification__row">
                <div class="notification__icon" style=format!("background-color: {}", kind.color())>
                    <span>{kind.icon()}</span>
                </div>
                <div class="notification__body">
                    <figcaption class="notification__caption">
                        <span class="notification__title">{kind.title()}</span>
                        <span class="notification__dot">"·"</span>
                        <span class="notification__time">{notification.time}</span>
                    </figcaption>
                    <p class="notification__description">{kind.description()}</p>
                </div>
            </div>
        </figure>
    }
}

/// Renders the notifications in context, newest first. Renders nothing when empty.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <Show when=move || !notifications.get().is_empty()>
            <div class="notification-stack">
                <For
                    each=move || notifications.get().items
                    key=|n| n.id.clone()
                    children=|n| view! { <NotificationCard notification=n/> }
                />
            </div>
        </Show>
    }
}

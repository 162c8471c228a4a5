//! Transient toast notifications raised by webhook outcomes.
//!
//! DESIGN
//! ======
//! A single `RwSignal<NotificationsState>` lives in context; pages call
//! [`notify`] instead of reaching for a global callback. Entries are newest
//! first, capped at [`MAX_NOTIFICATIONS`], and each one removes itself after
//! [`NOTIFICATION_TTL_MS`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

/// Maximum number of visible notifications.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Lifetime of a notification before it dismisses itself.
pub const NOTIFICATION_TTL_MS: u64 = 5_000;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// A new member registered.
    Registration,
    /// A member logged in.
    Login,
    /// Registration hit an email that already exists.
    Warning,
    /// Login credentials were rejected.
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Registration => "user registered",
            Self::Login => "user logged in",
            Self::Warning => "email registered",
            Self::Error => "login failed",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Registration => "new member joined",
            Self::Login => "welcome back",
            Self::Warning => "please login instead",
            Self::Error => "wrong email, pass combination",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Registration => "🎉",
            Self::Login => "👋",
            Self::Warning | Self::Error => "⚠️",
        }
    }

    /// Badge background color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Registration | Self::Login => "#1E86FF",
            Self::Warning => "#FF6B35",
            Self::Error => "#DC2626",
        }
    }
}

/// A single rendered notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    /// Relative time label shown next to the title.
    pub time: &'static str,
}

/// Visible notifications, newest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Prepend a notification of `kind` and drop the oldest beyond the cap.
    ///
    /// Returns the new notification's id.
    pub fn push(&mut self, kind: NotificationKind) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.insert(0, Notification { id: id.clone(), kind, time: "now" });
        self.items.truncate(MAX_NOTIFICATIONS);
        id
    }

    /// Remove the notification with `id`, if still present.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Raise a notification and schedule its removal.
pub fn notify(notifications: RwSignal<NotificationsState>, kind: NotificationKind) {
    let mut id = String::new();
    notifications.update(|s| id = s.push(kind));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(
            u32::try_from(NOTIFICATION_TTL_MS).unwrap_or(u32::MAX),
        )
        .await;
        notifications.update(|s| s.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

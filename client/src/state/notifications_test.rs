use super::*;

#[test]
fn push_prepends_newest_first() {
    let mut state = NotificationsState::default();
    state.push(NotificationKind::Registration);
    state.push(NotificationKind::Login);
    let kinds: Vec<_> = state.items.iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::Login, NotificationKind::Registration]);
}

#[test]
fn push_caps_list_at_five() {
    let mut state = NotificationsState::default();
    let first = state.push(NotificationKind::Warning);
    for _ in 0..5 {
        state.push(NotificationKind::Error);
    }
    assert_eq!(state.items.len(), MAX_NOTIFICATIONS);
    assert!(state.items.iter().all(|n| n.id != first));
}

#[test]
fn push_returns_unique_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(NotificationKind::Login);
    let b = state.push(NotificationKind::Login);
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_matching_entry() {
    let mut state = NotificationsState::default();
    let keep = state.push(NotificationKind::Registration);
    let drop = state.push(NotificationKind::Warning);
    state.dismiss(&drop);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotificationsState::default();
    state.push(NotificationKind::Login);
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn new_notification_is_labeled_now() {
    let mut state = NotificationsState::default();
    state.push(NotificationKind::Login);
    assert_eq!(state.items[0].time, "now");
}

#[test]
fn kind_copy_matches_site_text() {
    assert_eq!(NotificationKind::Warning.title(), "email registered");
    assert_eq!(NotificationKind::Warning.description(), "please login instead");
    assert_eq!(NotificationKind::Error.title(), "login failed");
    assert_eq!(NotificationKind::Error.description(), "wrong email, pass combination");
    assert_eq!(NotificationKind::Registration.icon(), "🎉");
    assert_eq!(NotificationKind::Login.icon(), "👋");
}

#[test]
fn kind_colors() {
    assert_eq!(NotificationKind::Registration.color(), "#1E86FF");
    assert_eq!(NotificationKind::Login.color(), "#1E86FF");
    assert_eq!(NotificationKind::Warning.color(), "#FF6B35");
    assert_eq!(NotificationKind::Error.color(), "#DC2626");
}

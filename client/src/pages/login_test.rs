use super::*;

#[test]
fn status_errors_use_login_failed_copy() {
    assert_eq!(login_alert_message(&WebhookError::Status(500)), "Login failed. Please try again.");
}

#[test]
fn transport_errors_use_network_copy() {
    for err in [
        WebhookError::Network("offline".to_owned()),
        WebhookError::Decode("bad json".to_owned()),
        WebhookError::Encode("bad body".to_owned()),
    ] {
        assert_eq!(
            login_alert_message(&err),
            "Network error. Please check your connection and try again."
        );
    }
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing In...");
}

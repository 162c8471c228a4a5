use super::*;
use serde_json::json;

fn text(s: &str) -> WebhookBody {
    WebhookBody::Text(s.to_owned())
}

// =============================================================
// Login responses
// =============================================================

#[test]
fn login_json_array_with_true_flag_succeeds() {
    assert!(is_login_success(&WebhookBody::Json(json!([{ "login": "true" }]))));
}

#[test]
fn login_text_encoded_array_succeeds() {
    assert!(is_login_success(&text(r#"[{"login":"true"}]"#)));
}

#[test]
fn login_false_flag_fails() {
    assert!(!is_login_success(&WebhookBody::Json(json!([{ "login": "false" }]))));
}

#[test]
fn login_boolean_flag_is_not_the_expected_string() {
    assert!(!is_login_success(&WebhookBody::Json(json!([{ "login": true }]))));
}

#[test]
fn login_bare_object_fails() {
    assert!(!is_login_success(&WebhookBody::Json(json!({ "login": "true" }))));
}

#[test]
fn login_empty_array_fails() {
    assert!(!is_login_success(&WebhookBody::Json(json!([]))));
}

#[test]
fn login_plain_string_fails() {
    assert!(!is_login_success(&text("Accepted")));
}

#[test]
fn login_malformed_json_text_fails() {
    assert!(!is_login_success(&text(r#"[{"login":"true""#)));
}

#[test]
fn login_only_first_entry_counts() {
    assert!(!is_login_success(&WebhookBody::Json(json!([{ "login": "false" }, { "login": "true" }]))));
}

// =============================================================
// Registration responses
// =============================================================

#[test]
fn registration_new_yes_is_created() {
    assert!(is_new_registration(&WebhookBody::Json(json!([{ "new": "yes" }]))));
}

#[test]
fn registration_new_no_is_existing() {
    assert!(!is_new_registration(&WebhookBody::Json(json!([{ "new": "no" }]))));
}

#[test]
fn registration_welcome_text_is_created() {
    assert!(is_new_registration(&text("Welcome to The Outliers <3")));
    assert!(is_new_registration(&text("hey! Welcome to The Outliers <3 see you soon")));
}

#[test]
fn registration_text_encoded_array_is_created() {
    assert!(is_new_registration(&text(r#"[{"new":"yes"}]"#)));
}

#[test]
fn registration_welcome_json_string_is_created() {
    assert!(is_new_registration(&WebhookBody::Json(json!("Welcome to The Outliers <3"))));
}

#[test]
fn login_json_string_holding_array_succeeds() {
    assert!(is_login_success(&WebhookBody::Json(json!(r#"[{"login":"true"}]"#))));
}

#[test]
fn registration_malformed_text_is_existing() {
    assert!(!is_new_registration(&text("{oops")));
}

// =============================================================
// Content type and errors
// =============================================================

#[test]
fn json_content_type_detection() {
    assert!(is_json_content_type(Some("application/json")));
    assert!(is_json_content_type(Some("application/json; charset=utf-8")));
    assert!(!is_json_content_type(Some("text/plain")));
    assert!(!is_json_content_type(None));
}

#[test]
fn webhook_error_messages() {
    assert_eq!(WebhookError::Status(502).to_string(), "webhook responded with status 502");
    assert_eq!(WebhookError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn endpoints_are_https() {
    assert!(REGISTRATION_WEBHOOK_URL.starts_with("https://"));
    assert!(LOGIN_WEBHOOK_URL.starts_with("https://"));
}

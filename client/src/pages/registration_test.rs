use super::*;

#[test]
fn status_errors_use_registration_failed_copy() {
    assert_eq!(
        registration_alert_message(&WebhookError::Status(400)),
        "Registration failed. Please try again."
    );
}

#[test]
fn transport_errors_use_network_copy() {
    assert_eq!(
        registration_alert_message(&WebhookError::Network("dns".to_owned())),
        "Network error. Please check your connection and try again."
    );
    assert_eq!(
        registration_alert_message(&WebhookError::Decode("eof".to_owned())),
        "Network error. Please check your connection and try again."
    );
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Register");
    assert_eq!(submit_label(true), "Registering...");
}

#[test]
fn every_form_field_except_password_is_rendered_once() {
    let ids: Vec<&str> = FIELDS.iter().map(|f| f.id).collect();
    assert_eq!(
        ids,
        vec![
            field::NAME,
            field::EMAIL,
            field::WHATSAPP,
            field::LINKEDIN,
            field::COLLEGE,
            field::COURSE,
            field::CITY,
            field::AGE,
        ]
    );
    let mut form = RegistrationForm::default();
    assert!(FIELDS.iter().all(|f| form.field_mut(f.id).is_some()));
}

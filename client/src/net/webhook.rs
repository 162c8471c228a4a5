//! HTTP client for the registration and login webhooks.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! RESPONSE SHAPES
//! ===============
//! The webhooks answer with either a JSON array holding one flag object
//! (`[{"login":"true"}]`, `[{"new":"yes"}]`) or free text, sometimes JSON
//! served as text. Anything that does not match the success shape is treated
//! as "not successful"; it is never an error.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures surface as [`WebhookError`] so pages
//! can pick the right alert copy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use serde::Serialize;
use serde_json::Value;

use crate::forms::{LoginForm, RegistrationForm};

/// Registration webhook. Override at build time with `OUTLIERS_REGISTRATION_WEBHOOK`.
pub const REGISTRATION_WEBHOOK_URL: &str = match option_env!("OUTLIERS_REGISTRATION_WEBHOOK") {
    Some(url) => url,
    None => "https://pzon8n.app.n8n.cloud/webhook/a5bc2a96-fb8b-4dde-b7a0-d562b93fbd7d",
};

/// Login webhook. Override at build time with `OUTLIERS_LOGIN_WEBHOOK`.
pub const LOGIN_WEBHOOK_URL: &str = match option_env!("OUTLIERS_LOGIN_WEBHOOK") {
    Some(url) => url,
    None => "https://tavs.app.n8n.cloud/webhook/bf9c8b45-6f1a-4024-b173-a6ccc01aa34f",
};

/// Marker text the registration webhook sends for a brand-new member.
pub const WELCOME_MARKER: &str = "Welcome to The Outliers <3";

/// Failure talking to a webhook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("network error: {0}")]
    Network(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Successful (2xx) response body.
#[derive(Clone, Debug, PartialEq)]
pub enum WebhookBody {
    /// Served with a JSON content type.
    Json(Value),
    /// Served as anything else.
    Text(String),
}

/// Result of a registration attempt that reached the webhook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new member was created with the submitted password.
    Created,
    /// The email was already registered.
    AlreadyRegistered,
}

/// Result of a login attempt that reached the webhook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// Whether a `Content-Type` header value denotes JSON.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// Whether `value` is a non-empty array whose first element has `key == expected`.
fn first_entry_flag(value: &Value, key: &str, expected: &str) -> bool {
    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get(key))
        .and_then(Value::as_str)
        .is_some_and(|flag| flag == expected)
}

impl WebhookBody {
    /// The body as text: a text body, or a JSON body that is a bare string.
    fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(value) => value.as_str(),
        }
    }
}

/// Check the flag on a JSON body, or on a text body that parses as JSON.
fn body_flag(body: &WebhookBody, key: &str, expected: &str) -> bool {
    if let Some(text) = body.as_text() {
        return serde_json::from_str::<Value>(text).is_ok_and(|value| first_entry_flag(&value, key, expected));
    }
    match body {
        WebhookBody::Json(value) => first_entry_flag(value, key, expected),
        WebhookBody::Text(_) => false,
    }
}

/// Whether the login webhook accepted the credentials (`[{"login":"true"}]`).
#[must_use]
pub fn is_login_success(body: &WebhookBody) -> bool {
    body_flag(body, "login", "true")
}

/// Whether the registration webhook created a new member.
///
/// Accepts `[{"new":"yes"}]` as JSON or text, or a text body containing
/// [`WELCOME_MARKER`]. A JSON string body counts as text.
#[must_use]
pub fn is_new_registration(body: &WebhookBody) -> bool {
    if body.as_text().is_some_and(|text| text.contains(WELCOME_MARKER)) {
        return true;
    }
    body_flag(body, "new", "yes")
}

/// POST `body` as JSON to `url` and read the response according to its content type.
///
/// # Errors
///
/// Returns [`WebhookError`] when the request cannot be sent, the status is not
/// 2xx, or a JSON-typed response does not parse.
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<WebhookBody, WebhookError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| WebhookError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;
        if !resp.ok() {
            let detail = resp.text().await.unwrap_or_default();
            log::error!("webhook {url} failed with {}: {detail}", resp.status());
            return Err(WebhookError::Status(resp.status()));
        }
        let content_type = resp.headers().get("Content-Type");
        if is_json_content_type(content_type.as_deref()) {
            let value = resp.json::<Value>().await.map_err(|e| WebhookError::Decode(e.to_string()))?;
            Ok(WebhookBody::Json(value))
        } else {
            let text = resp.text().await.map_err(|e| WebhookError::Decode(e.to_string()))?;
            Ok(WebhookBody::Text(text))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(WebhookError::Network("not available on server".to_owned()))
    }
}

/// Send a completed registration (password included) to the registration webhook.
///
/// # Errors
///
/// Propagates [`post_json`] failures.
pub async fn submit_registration(form: &RegistrationForm) -> Result<RegistrationOutcome, WebhookError> {
    let body = post_json(REGISTRATION_WEBHOOK_URL, form).await?;
    #[cfg(feature = "hydrate")]
    log::debug!("registration response: {body:?}");
    Ok(if is_new_registration(&body) {
        RegistrationOutcome::Created
    } else {
        RegistrationOutcome::AlreadyRegistered
    })
}

/// Send credentials to the login webhook.
///
/// # Errors
///
/// Propagates [`post_json`] failures.
pub async fn submit_login(form: &LoginForm) -> Result<LoginOutcome, WebhookError> {
    let body = post_json(LOGIN_WEBHOOK_URL, form).await?;
    #[cfg(feature = "hydrate")]
    log::debug!("login response: {body:?}");
    Ok(if is_login_success(&body) { LoginOutcome::Accepted } else { LoginOutcome::Rejected })
}

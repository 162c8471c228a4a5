//! Registration and login form models with client-side validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation here only checks input shape before the webhook call. The
//! webhooks decide whether an account exists or credentials match.
//!
//! Error messages are user-facing copy and are asserted verbatim in tests.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Length of the generated registration password.
pub const PASSWORD_LENGTH: usize = 12;

/// Minimum accepted login password length.
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 100;

const PASSWORD_ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

/// Field names, shared by form structs, error maps and input ids.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const WHATSAPP: &str = "whatsapp";
    pub const LINKEDIN: &str = "linkedin";
    pub const COLLEGE: &str = "college";
    pub const COURSE: &str = "course";
    pub const CITY: &str = "city";
    pub const AGE: &str = "age";
    pub const PASSWORD: &str = "password";
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Drop the message for `field`, as happens when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Body posted to the registration webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub linkedin: String,
    pub college: String,
    pub course: String,
    pub city: String,
    pub age: String,
    pub password: String,
}

impl RegistrationForm {
    /// Current value of a text field by name. Unknown names return `None`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            field::NAME => &self.name,
            field::EMAIL => &self.email,
            field::WHATSAPP => &self.whatsapp,
            field::LINKEDIN => &self.linkedin,
            field::COLLEGE => &self.college,
            field::COURSE => &self.course,
            field::CITY => &self.city,
            field::AGE => &self.age,
            field::PASSWORD => &self.password,
            _ => return None,
        };
        Some(value)
    }

    /// Mutable access to a text field by name. Unknown names return `None`.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            field::NAME => Some(&mut self.name),
            field::EMAIL => Some(&mut self.email),
            field::WHATSAPP => Some(&mut self.whatsapp),
            field::LINKEDIN => Some(&mut self.linkedin),
            field::COLLEGE => Some(&mut self.college),
            field::COURSE => Some(&mut self.course),
            field::CITY => Some(&mut self.city),
            field::AGE => Some(&mut self.age),
            field::PASSWORD => Some(&mut self.password),
            _ => None,
        }
    }

    /// Copy of the form carrying `password`, ready to send.
    #[must_use]
    pub fn with_password(&self, password: String) -> Self {
        Self { password, ..self.clone() }
    }
}

/// Body posted to the login webhook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn require(errors: &mut FormErrors, value: &str, name: &'static str, message: &'static str) -> bool {
    if value.trim().is_empty() {
        errors.insert(name, message);
        false
    } else {
        true
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if require(errors, email, field::EMAIL, "Email is required") && !EMAIL_RE.is_match(email) {
        errors.insert(field::EMAIL, "Please enter a valid email");
    }
}

/// Leading base-10 integer of `raw`, ignoring leading whitespace and any
/// trailing garbage (`"25 years"` is 25, `"2.5"` is 2).
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Validate every registration field. An empty result means the form may be sent.
#[must_use]
pub fn validate_registration(form: &RegistrationForm) -> FormErrors {
    let mut errors = FormErrors::default();

    require(&mut errors, &form.name, field::NAME, "Name is required");
    check_email(&mut errors, &form.email);
    if require(&mut errors, &form.whatsapp, field::WHATSAPP, "WhatsApp number is required")
        && !PHONE_RE.is_match(&form.whatsapp)
    {
        errors.insert(field::WHATSAPP, "Please enter a valid phone number");
    }
    require(&mut errors, &form.linkedin, field::LINKEDIN, "LinkedIn profile is required");
    require(&mut errors, &form.college, field::COLLEGE, "College is required");
    require(&mut errors, &form.course, field::COURSE, "Course is required");
    require(&mut errors, &form.city, field::CITY, "City is required");
    if require(&mut errors, &form.age, field::AGE, "Age is required")
        && !parse_leading_int(&form.age).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age))
    {
        errors.insert(field::AGE, "Please enter a valid age (16-100)");
    }

    errors
}

/// Validate the login fields.
#[must_use]
pub fn validate_login(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::default();

    check_email(&mut errors, &form.email);
    // Length in UTF-16 code units, as the browser measures input values.
    if require(&mut errors, &form.password, field::PASSWORD, "Password is required")
        && form.password.encode_utf16().count() < MIN_LOGIN_PASSWORD_LENGTH
    {
        errors.insert(field::PASSWORD, "Password must be at least 6 characters");
    }

    errors
}

/// Map random bytes onto the alphanumeric alphabet.
///
/// Bytes at or above the largest multiple of the alphabet size are skipped so
/// every character is equally likely. Stops after [`PASSWORD_LENGTH`]
/// characters; may return fewer when `bytes` runs out.
#[must_use]
pub fn password_from_bytes(bytes: &[u8]) -> String {
    const LIMIT: u8 = 248; // 62 * 4
    bytes
        .iter()
        .filter(|&&b| b < LIMIT)
        .take(PASSWORD_LENGTH)
        .map(|&b| char::from(PASSWORD_ALPHABET[usize::from(b) % PASSWORD_ALPHABET.len()]))
        .collect()
}

/// Generate a fresh 12-character alphanumeric password.
///
/// Randomness comes from v4 UUIDs, skipping their fixed version and variant
/// bytes.
#[must_use]
pub fn generate_password() -> String {
    let mut pool = Vec::with_capacity(32);
    loop {
        let id = uuid::Uuid::new_v4();
        pool.extend(
            id.as_bytes()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 6 && *i != 8)
                .map(|(_, b)| *b),
        );
        let password = password_from_bytes(&pool);
        if password.len() == PASSWORD_LENGTH {
            return password;
        }
    }
}

//! Partial-update payload validation.

use serde_json::{Map, Value};

use crate::customer::Field;

/// Checks the updatable fields present in `payload` and returns every
/// violation, in field order. An empty vector means the payload is valid.
///
/// Absent fields are never checked, and every present field is checked even
/// if an earlier one already failed. Lengths count characters, not bytes.
pub fn validate_update(payload: &Map<String, Value>) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(value) = payload.get(Field::PhoneNumber.as_str()) {
        if !text_len_within(value, 10, 20) {
            violations.push("phone_number must be a string between 10 and 20 characters".to_owned());
        }
    }

    if let Some(value) = payload.get(Field::Address.as_str()) {
        if !text_len_within(value, 5, 200) {
            violations.push("address must be a string between 5 and 200 characters".to_owned());
        }
    }

    if let Some(value) = payload.get(Field::Email.as_str()) {
        if !value.as_str().is_some_and(|email| email.contains('@')) {
            violations.push("email must be a valid email address".to_owned());
        }
    }

    violations
}

fn text_len_within(value: &Value, min: usize, max: usize) -> bool {
    value
        .as_str()
        .map(|s| s.chars().count())
        .is_some_and(|len| (min..=max).contains(&len))
}

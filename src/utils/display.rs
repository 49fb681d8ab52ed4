//! Turns either error shape into one string a screen can show.
//!
//! Swallow-policy operations hand back a JSON sentinel such as
//! `{"message": "No Network Connection"}`, propagate-policy operations return a
//! [`GatewayError`]. Both implement [`DisplayMessage`].

use crate::utils::error::{GatewayError, GENERIC_ERROR_MESSAGE};
use serde_json::Value;

pub trait DisplayMessage {
    fn display_message(&self) -> String;
}

impl DisplayMessage for GatewayError {
    fn display_message(&self) -> String {
        self.user_friendly_message()
    }
}

impl DisplayMessage for Value {
    fn display_message(&self) -> String {
        sentinel_message(self).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

/// `message` (or the older `error`) field of a sentinel object, if any.
pub fn sentinel_message(value: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(message_text)
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a server-provided message. Validation layers send a list of
/// messages, which are joined.
pub fn message_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    })
}

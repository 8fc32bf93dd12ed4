//! Small helpers for validating url-encoded form fields.

use crate::error::AppError;

/// True when the value is a non-empty ASCII digit string.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Extract a required, non-empty form field or halt with the given message.
pub fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request(message))
}

/// HTML checkboxes submit the literal string "on" when ticked and nothing
/// at all otherwise.
pub fn checkbox(value: Option<&String>) -> bool {
    value.map(String::as_str) == Some("on")
}

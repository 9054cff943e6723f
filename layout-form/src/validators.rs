//! Built-in validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::{REQUIRED_FIELD_MESSAGE, Validator};

static LATIN_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("Invalid latin letters regex"));

/// Local part (dot-atom or quoted) `@` domain with a final label of two or more characters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#,
    )
    .expect("Invalid email regex")
});

/// Non-empty string.
pub fn required() -> Validator {
    Validator::new(|value| !value.is_empty(), REQUIRED_FIELD_MESSAGE)
}

/// Only ASCII latin letters, at least one.
pub fn latin_letters() -> Validator {
    Validator::new(|value| LATIN_LETTERS.is_match(value), "Only latin letters")
}

/// Email address, matched case-insensitively.
pub fn email() -> Validator {
    Validator::new(|value| EMAIL.is_match(value), "Incorrect email format")
}

/// Exact equality with `target_value`, captured at construction.
pub fn password_confirmation(target_value: impl Into<String>) -> Validator {
    let target_value = target_value.into();
    Validator::new(
        move |value| value == target_value,
        "Passwords are not equal",
    )
}

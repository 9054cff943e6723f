//! Validation engine.
//!
//! A field's validator list is assembled from its metadata every time it is
//! evaluated: the required check first, then the confirmation check (which
//! captures the target's current value), then the caller's validators in
//! declaration order. The first failing validator decides the result.

use crate::{
    Field, FieldValue, FormValues, REQUIRED_FIELD_MESSAGE, ValidationResult, Validator, validators,
};

/// Run `validators` in order against `value`, stopping at the first failure.
pub fn evaluate(value: &str, validators: &[Validator]) -> ValidationResult {
    validators
        .iter()
        .find(|validator| !validator.validate(value))
        .map(|failed| ValidationResult::invalid(failed.error_message()))
        .unwrap_or_else(ValidationResult::valid)
}

/// The full validator list for a text-valued field.
///
/// Returns an empty list for kinds that are not validated as text.
pub fn validators_for(field: &Field, values: &FormValues) -> Vec<Validator> {
    if !field.kind().is_text_valued() {
        return Vec::new();
    }

    let mut list = Vec::with_capacity(field.validators().len() + 2);

    if field.is_required() {
        list.push(validators::required());
    }

    if let Some(target_value) = field
        .confirmation_target()
        .and_then(|target| values.get(target.as_str()))
        .and_then(FieldValue::as_str)
    {
        list.push(validators::password_confirmation(target_value));
    }

    list.extend(field.validators().iter().cloned());
    list
}

/// Evaluate one field against the current form values.
///
/// Fields without a value (buttons, gaps, or a name missing from `values`)
/// evaluate to an unknown result.
pub fn evaluate_field(field: &Field, values: &FormValues) -> ValidationResult {
    let Some(value) = field.name().and_then(|name| values.get(name.as_str())) else {
        return ValidationResult::unknown();
    };

    match (field, value) {
        (Field::Checkbox(checkbox), FieldValue::Checked(checked)) => {
            if *checked || !checkbox.is_required {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(REQUIRED_FIELD_MESSAGE)
            }
        }
        (_, FieldValue::Text(text)) if field.kind().is_text_valued() => {
            evaluate(text, &validators_for(field, values))
        }
        _ => ValidationResult::unknown(),
    }
}

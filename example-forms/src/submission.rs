use layout_form::{FieldValue, FormValues};

/// Copy of `values` with every character of the named text fields replaced
/// by `*`.
pub fn mask_secrets(values: &FormValues, secrets: &[&str]) -> FormValues {
    values
        .iter()
        .map(|(name, value)| {
            let value = match value {
                FieldValue::Text(text) if secrets.contains(&name.as_str()) => {
                    FieldValue::Text("*".repeat(text.chars().count()))
                }
                other => other.clone(),
            };
            (name.clone(), value)
        })
        .collect()
}

/// Log a submitted form with its secrets masked.
pub fn log_submission(page: &str, values: &FormValues, secrets: &[&str]) {
    let masked = mask_secrets(values, secrets);

    let mut fields: Vec<_> = masked.iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    tracing::info!(page, values = ?fields, "form submitted");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_only_named_fields() {
        let values: FormValues = [
            ("email", FieldValue::from("jane@example.com")),
            ("password", FieldValue::from("hunter2")),
            ("policy", FieldValue::from(true)),
        ]
        .into_iter()
        .collect();

        let masked = mask_secrets(&values, &["password", "policy"]);
        assert_eq!(masked.get_text("email").unwrap(), "jane@example.com");
        assert_eq!(masked.get_text("password").unwrap(), "*******");
        assert!(masked.get_checked("policy").unwrap());
        assert_eq!(values.get_text("password").unwrap(), "hunter2");
    }

    #[test]
    fn masks_per_character() {
        let values: FormValues = [("password", "pässwörd")].into_iter().collect();
        let masked = mask_secrets(&values, &["password"]);
        assert_eq!(masked.get_text("password").unwrap(), "********");
    }
}

use crate::FieldName;

/// A structural problem with a layout, detected when a form is built.
///
/// These are programming errors in the layout description, not user input
/// problems, and a form is never constructed from an offending layout.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Two or more data-bearing fields share a name.
    #[error("Duplicate names in form items: {}", join(.0))]
    DuplicateNames(Vec<FieldName>),

    /// A confirmation field names a field that is not in the layout.
    #[error("Confirmation field '{field}' targets unknown field '{target}'")]
    UnknownConfirmationTarget { field: FieldName, target: FieldName },

    /// A confirmation field names itself or a field without a text value.
    #[error("Confirmation field '{field}' cannot target '{target}'")]
    InvalidConfirmationTarget { field: FieldName, target: FieldName },
}

fn join(names: &[FieldName]) -> String {
    names
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type for operations on a constructed form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(FieldName),

    #[error("Type mismatch at field '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: FieldName,
        expected: &'static str,
        actual: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_lists_names() {
        let err = LayoutError::DuplicateNames(vec!["email".into(), "password".into()]);
        assert_eq!(
            err.to_string(),
            "Duplicate names in form items: email, password"
        );
    }
}

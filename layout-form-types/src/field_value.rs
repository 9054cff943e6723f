/// The current value of a single data-bearing field.
///
/// Checkboxes hold `Checked`; every other data-bearing kind holds `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string value (from text, email, password and confirmation fields).
    Text(String),

    /// A boolean value (from checkbox fields).
    Checked(bool),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Checked(_) => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Checked(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Checked(_) => "Checked",
        }
    }

    /// Check whether two values are of the same kind.
    pub fn same_kind(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Checked(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let text = FieldValue::from("Jane");
        assert_eq!(text.as_str(), Some("Jane"));
        assert_eq!(text.as_bool(), None);

        let checked = FieldValue::from(true);
        assert_eq!(checked.as_bool(), Some(true));
        assert_eq!(checked.as_str(), None);
    }

    #[test]
    fn same_kind() {
        assert!(FieldValue::from("a").same_kind(&FieldValue::from("b")));
        assert!(!FieldValue::from("a").same_kind(&FieldValue::from(false)));
    }
}

use std::collections::HashMap;

use crate::{FieldName, FieldValue};

/// Error type for typed value access.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    Missing(FieldName),

    #[error("Type mismatch at field '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: FieldName,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Current values of a form, keyed by field name.
///
/// Holds exactly one entry per data-bearing field of the layout the form was
/// built from. Values are never persisted; a snapshot is handed to the submit
/// handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: HashMap<FieldName, FieldValue>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value for the given field, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Get the value of the given field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Check if a value exists for the given field.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get an iterator over all name-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a string value for the given field.
    pub fn get_text(&self, name: &str) -> Result<&str, ValueError> {
        match self.get(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(ValueError::TypeMismatch {
                name: FieldName::new(name),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(FieldName::new(name))),
        }
    }

    /// Get a boolean value for the given field.
    pub fn get_checked(&self, name: &str) -> Result<bool, ValueError> {
        match self.get(name) {
            Some(FieldValue::Checked(b)) => Ok(*b),
            Some(other) => Err(ValueError::TypeMismatch {
                name: FieldName::new(name),
                expected: "Checked",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(FieldName::new(name))),
        }
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldName, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<FieldName, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldName, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldName, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<N: Into<FieldName>, V: Into<FieldValue>> FromIterator<(N, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut values = FormValues::new();
        values.insert("firstName", "Jane");
        values.insert("policy", true);

        assert_eq!(values.get_text("firstName").unwrap(), "Jane");
        assert!(values.get_checked("policy").unwrap());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn insert_replaces() {
        let mut values = FormValues::new();
        values.insert("email", "");
        let previous = values.insert("email", "a@b.co");

        assert_eq!(previous, Some(FieldValue::from("")));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn type_mismatch_error() {
        let mut values = FormValues::new();
        values.insert("policy", false);

        let result = values.get_text("policy");
        assert!(matches!(result, Err(ValueError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_error() {
        let values = FormValues::new();
        assert!(matches!(
            values.get_checked("policy"),
            Err(ValueError::Missing(_))
        ));
    }

    #[test]
    fn collect_from_pairs() {
        let values: FormValues = [("firstName", "Jane"), ("lastName", "Doe")]
            .into_iter()
            .collect();
        assert_eq!(values.get_text("lastName").unwrap(), "Doe");
    }
}

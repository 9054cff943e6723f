use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Message reported by the required check for both text and checkbox fields.
pub const REQUIRED_FIELD_MESSAGE: &str = "Required field";

/// A pure predicate over a field's text value plus a fixed error message.
///
/// Validators carry no mutable state. Cloning is cheap: the predicate is shared.
#[derive(Clone)]
pub struct Validator {
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    error_message: Cow<'static, str>,
}

impl Validator {
    /// Create a validator from a predicate and the message reported when it fails.
    pub fn new(
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        error_message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
            error_message: error_message.into(),
        }
    }

    /// Run the predicate.
    pub fn validate(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// The message reported when the predicate fails.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

/// Outcome of validating one field.
///
/// `is_valid == None` means the field has not been evaluated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: Option<bool>,
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// A result that has not been evaluated.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: Some(true),
            error_message: None,
        }
    }

    /// A failing result with the message to surface.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: Some(false),
            error_message: Some(message.into()),
        }
    }

    /// Check if the result is known and passing.
    pub fn is_valid(&self) -> bool {
        self.is_valid == Some(true)
    }

    /// Check if the result is known and failing.
    pub fn is_invalid(&self) -> bool {
        self.is_valid == Some(false)
    }

    /// Check if the field has been evaluated.
    pub fn is_known(&self) -> bool {
        self.is_valid.is_some()
    }

    /// The error message, if the result is failing.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

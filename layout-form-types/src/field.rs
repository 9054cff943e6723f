use std::fmt;
use std::sync::Arc;

use crate::{FieldName, FieldValue, Validator};

/// A caller-supplied action, e.g. what a secondary button does.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// A single declaratively described form element.
#[derive(Debug, Clone)]
pub enum Field {
    /// Single-line text input.
    Text(TextField),

    /// Single-line text input hinted as an email address.
    Email(TextField),

    /// Masked input.
    Password(PasswordField),

    /// Masked input that must equal another field's value.
    PasswordConfirmation(PasswordConfirmationField),

    /// Boolean toggle.
    Checkbox(CheckboxField),

    /// Secondary button running a caller-supplied action.
    Button(ButtonField),

    /// Primary button submitting the form.
    Submit(SubmitField),

    /// Layout spacer.
    Gap,
}

impl Field {
    /// Get the kind tag of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Email(_) => FieldKind::Email,
            Self::Password(_) => FieldKind::Password,
            Self::PasswordConfirmation(_) => FieldKind::PasswordConfirmation,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::Button(_) => FieldKind::Button,
            Self::Submit(_) => FieldKind::Submit,
            Self::Gap => FieldKind::Gap,
        }
    }

    /// Get the field name. `None` for button, submit and gap.
    pub fn name(&self) -> Option<&FieldName> {
        match self {
            Self::Text(f) | Self::Email(f) => Some(&f.name),
            Self::Password(f) => Some(&f.name),
            Self::PasswordConfirmation(f) => Some(&f.name),
            Self::Checkbox(f) => Some(&f.name),
            Self::Button(_) | Self::Submit(_) | Self::Gap => None,
        }
    }

    /// Get the label (or checkbox text / button text).
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Text(f) | Self::Email(f) => Some(&f.label),
            Self::Password(f) => Some(&f.label),
            Self::PasswordConfirmation(f) => Some(&f.label),
            Self::Checkbox(f) => Some(&f.text),
            Self::Button(f) => Some(&f.text),
            Self::Submit(f) => Some(&f.text),
            Self::Gap => None,
        }
    }

    /// Check whether the field must be filled in (or checked).
    pub fn is_required(&self) -> bool {
        match self {
            Self::Text(f) | Self::Email(f) => f.is_required,
            Self::Password(f) => f.is_required,
            Self::PasswordConfirmation(f) => f.is_required,
            Self::Checkbox(f) => f.is_required,
            Self::Button(_) | Self::Submit(_) | Self::Gap => false,
        }
    }

    /// The value a form starts with for this field. `None` if not data-bearing.
    pub fn initial_value(&self) -> Option<FieldValue> {
        match self {
            Self::Text(f) | Self::Email(f) => Some(FieldValue::Text(
                f.default_value.clone().unwrap_or_default(),
            )),
            Self::Password(_) | Self::PasswordConfirmation(_) => {
                Some(FieldValue::Text(String::new()))
            }
            Self::Checkbox(f) => Some(FieldValue::Checked(f.is_default_checked)),
            Self::Button(_) | Self::Submit(_) | Self::Gap => None,
        }
    }

    /// Caller-declared validators. Required and confirmation checks are not included.
    pub fn validators(&self) -> &[Validator] {
        match self {
            Self::Text(f) | Self::Email(f) => &f.validators,
            _ => &[],
        }
    }

    /// The field a confirmation compares against, if this is a confirmation field.
    pub fn confirmation_target(&self) -> Option<&FieldName> {
        match self {
            Self::PasswordConfirmation(f) => Some(&f.target),
            _ => None,
        }
    }

    pub fn is_data_bearing(&self) -> bool {
        self.kind().is_data_bearing()
    }
}

impl From<TextField> for Field {
    fn from(f: TextField) -> Self {
        Self::Text(f)
    }
}

impl From<PasswordField> for Field {
    fn from(f: PasswordField) -> Self {
        Self::Password(f)
    }
}

impl From<PasswordConfirmationField> for Field {
    fn from(f: PasswordConfirmationField) -> Self {
        Self::PasswordConfirmation(f)
    }
}

impl From<CheckboxField> for Field {
    fn from(f: CheckboxField) -> Self {
        Self::Checkbox(f)
    }
}

impl From<ButtonField> for Field {
    fn from(f: ButtonField) -> Self {
        Self::Button(f)
    }
}

impl From<SubmitField> for Field {
    fn from(f: SubmitField) -> Self {
        Self::Submit(f)
    }
}

/// The kind tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    PasswordConfirmation,
    Checkbox,
    Button,
    Submit,
    Gap,
}

impl FieldKind {
    /// Check if fields of this kind carry a name and a value.
    pub fn is_data_bearing(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Password | Self::PasswordConfirmation | Self::Checkbox
        )
    }

    /// Check if fields of this kind hold a text value.
    pub fn is_text_valued(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Password | Self::PasswordConfirmation
        )
    }

    /// The input type hint for text-valued kinds.
    pub fn input_type(&self) -> Option<InputType> {
        match self {
            Self::Text => Some(InputType::Text),
            Self::Email => Some(InputType::Email),
            Self::Password | Self::PasswordConfirmation => Some(InputType::Password),
            _ => None,
        }
    }
}

/// Input type hint passed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    /// The HTML `type` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Configuration for a text (or email) input.
#[derive(Debug, Clone)]
pub struct TextField {
    pub name: FieldName,
    pub label: String,
    pub default_value: Option<String>,
    pub is_required: bool,
    pub validators: Vec<Validator>,
}

impl TextField {
    /// Create a new optional text field without validators.
    pub fn new(name: impl Into<FieldName>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default_value: None,
            is_required: false,
            validators: Vec::new(),
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Set the initial value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Append a validator. Validators run in the order they were added.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Turn this configuration into an email field.
    pub fn email(self) -> Field {
        Field::Email(self)
    }
}

/// Configuration for a password input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordField {
    pub name: FieldName,
    pub label: String,
    pub is_required: bool,
}

impl PasswordField {
    pub fn new(name: impl Into<FieldName>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            is_required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

/// Configuration for a password confirmation input.
///
/// Valid only while its value equals the current value of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfirmationField {
    pub name: FieldName,
    pub label: String,
    pub is_required: bool,
    pub target: FieldName,
}

impl PasswordConfirmationField {
    pub fn new(
        name: impl Into<FieldName>,
        label: impl Into<String>,
        target: impl Into<FieldName>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            is_required: false,
            target: target.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }
}

/// Configuration for a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxField {
    pub name: FieldName,
    pub text: String,
    pub is_required: bool,
    pub is_default_checked: bool,
}

impl CheckboxField {
    pub fn new(name: impl Into<FieldName>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            is_required: false,
            is_default_checked: false,
        }
    }

    /// Require the box to be checked before the form is valid.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Start checked.
    pub fn checked(mut self) -> Self {
        self.is_default_checked = true;
        self
    }
}

/// Configuration for a secondary button.
#[derive(Debug, Clone)]
pub struct ButtonField {
    pub text: String,
    pub on_activate: Callback,
}

impl ButtonField {
    pub fn new(text: impl Into<String>, on_activate: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            text: text.into(),
            on_activate: Callback::new(on_activate),
        }
    }
}

/// Configuration for the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitField {
    pub text: String,
}

impl SubmitField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

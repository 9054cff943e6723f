//! Core types for the layout-form crate.
//!
//! This crate provides the foundational types for describing forms:
//! - `Layout` and `Row` - The ordered, optionally two-column form structure
//! - `Field` and `FieldKind` - Individual form elements and their kinds
//! - `FormValues`, `FieldName` and `FieldValue` - Current data keyed by field name
//! - `Validator` and `ValidationResult` - Per-field checks and their outcome
//! - `LayoutError` and `FormError` - Construction and runtime errors

mod field_name;
pub use field_name::FieldName;

mod field_value;
pub use field_value::FieldValue;

mod values;
pub use values::{FormValues, ValueError};

mod validation;
pub use validation::{REQUIRED_FIELD_MESSAGE, ValidationResult, Validator};

mod field;
pub use field::{
    ButtonField, Callback, CheckboxField, Field, FieldKind, InputType, PasswordConfirmationField,
    PasswordField, SubmitField, TextField,
};

mod layout;
pub use layout::{Layout, Row};

mod error;
pub use error::{FormError, LayoutError};

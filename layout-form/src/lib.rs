//! # layout-form
//!
//! A declarative form engine. Frontend-agnostic.
//!
//! A form is described as an ordered `Layout` of fields, optionally paired
//! into two-column rows. From that description the engine derives initial
//! values, per-field validation, duplicate-name detection, when validation
//! results become visible, and whether the form may be submitted.
//!
//! ## Usage
//!
//! ```rust
//! use layout_form::{Form, FormOptions, Layout, SubmitField, SubmitOutcome, TextField, validators};
//!
//! let layout = Layout::new()
//!     .pair(
//!         TextField::new("firstName", "First name")
//!             .required()
//!             .with_validator(validators::latin_letters()),
//!         TextField::new("lastName", "Last name")
//!             .required()
//!             .with_validator(validators::latin_letters()),
//!     )
//!     .single(SubmitField::new("Create account"));
//!
//! let mut form = Form::new(layout, FormOptions::new().validate_on_change(true))?
//!     .with_submit_handler(|values| println!("{values:?}"));
//!
//! assert!(!form.is_submit_enabled());
//!
//! form.change("firstName", "Jane")?;
//! form.change("lastName", "Doe")?;
//! assert!(matches!(form.submit(), SubmitOutcome::Submitted(_)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modes
//!
//! - **Deferred** (default): results surface when a field loses focus, and all
//!   at once on a submit attempt. Submitting an invalid form is rejected.
//! - **Immediate** (`validate_on_change(true)`): committed edits surface right
//!   away and the submit control stays disabled while anything is invalid.
//!
//! ## Frontends
//!
//! Frontends implement `FormFrontend`:
//! - `TestFrontend` - scripted events, for tests
//! - `layout-form-html` - static HTML page
//! - `layout-form-egui` - native window via egui

// Re-export all types from layout-form-types
pub use layout_form_types::*;

pub mod registry;
pub use registry::{FieldRegistry, FieldSlot};

pub mod validation;
pub mod validators;

mod form;
pub use form::{Form, FormOptions, SubmitHandler, SubmitOutcome};

pub mod view;
pub use view::{
    ButtonView, CellView, CheckboxView, FormView, InputView, RowView, SubmitView,
};

mod frontend;
pub use frontend::FormFrontend;

// Test frontend for driving forms without user interaction
mod test_frontend;
pub use test_frontend::{TestEvent, TestFrontend, TestFrontendError};

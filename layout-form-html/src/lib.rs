//! HTML document frontend for layout-form.
//!
//! Renders the current state of a `Form` as a static, fillable HTML page:
//! paired rows become two-column grids, revealed validation messages are
//! printed next to their inputs, and the submit button is marked `disabled`
//! while an immediate-mode form is invalid.
//!
//! ```rust
//! use layout_form::{Form, FormOptions, Layout, SubmitField, TextField};
//! use layout_form_html::{HtmlOptions, to_html};
//!
//! let layout = Layout::new()
//!     .single(TextField::new("email", "Email").required().email())
//!     .single(SubmitField::new("Sign in"));
//! let form = Form::new(layout, FormOptions::new()).unwrap();
//!
//! let html = to_html(&form, &HtmlOptions::new().with_title("Sign in"));
//! assert!(html.contains("<title>Sign in</title>"));
//! ```

mod generator;

pub use generator::{HtmlOptions, to_html};

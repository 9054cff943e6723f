//! # layout-form-egui
//!
//! An egui frontend for layout-form that runs a form in a native window.
//!
//! This frontend uses the `eframe` and `egui` crates. Every row of the
//! layout is drawn from `Form::view`, two-column rows become egui columns,
//! and focus, edits, blur, checkbox toggles and submit clicks are fed back
//! into the form as events. The window closes after a successful submit.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use layout_form::{Form, FormFrontend, FormOptions, Layout, SubmitField, TextField};
//! use layout_form_egui::EguiFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let layout = Layout::new()
//!         .single(TextField::new("nickname", "Nickname").required())
//!         .single(SubmitField::new("Save"));
//!     let mut form = Form::new(layout, FormOptions::new())?;
//!
//!     let frontend = EguiFrontend::new()
//!         .with_title("Profile")
//!         .with_window_size([400.0, 300.0]);
//!
//!     let values = frontend.run(&mut form)?;
//!     println!("{values:?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{EguiError, EguiFrontend};

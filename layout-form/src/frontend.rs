use crate::{Form, FormValues};

/// Trait for presentation layers that drive a form until it is submitted.
///
/// A frontend owns the event loop: it renders `Form::view`, forwards focus,
/// change, blur, toggle and submit events, and decides how rows are presented
/// (native window, scripted replay, ...).
pub trait FormFrontend {
    /// The error type for this frontend.
    type Error: Into<anyhow::Error>;

    /// Drive the form until a successful submit.
    ///
    /// # Returns
    /// * `Ok(values)` with the snapshot that was handed to the submit handler
    /// * `Err` on cancellation or frontend failure
    fn run(&self, form: &mut Form) -> Result<FormValues, Self::Error>;
}

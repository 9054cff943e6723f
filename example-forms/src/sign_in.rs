use layout_form::{
    ButtonField, Form, FormOptions, Layout, LayoutError, PasswordField, SubmitField, TextField,
    validators,
};

use crate::log_submission;

/// Email and password, then the submit and Github buttons side by side.
pub fn sign_in_layout() -> Layout {
    Layout::new()
        .single(
            TextField::new("email", "Email")
                .required()
                .with_validator(validators::email()),
        )
        .single(PasswordField::new("password", "Password").required())
        .gap()
        .pair(
            SubmitField::new("Sign in"),
            ButtonField::new("Sign in with Github", || {
                tracing::info!("github sign-in requested");
            }),
        )
}

/// The sign-in form in deferred mode, logging submissions with the password
/// masked.
pub fn sign_in_form() -> Result<Form, LayoutError> {
    let form = Form::new(sign_in_layout(), FormOptions::new())?
        .with_submit_handler(|values| log_submission("sign-in", values, &["password"]));
    Ok(form)
}

use layout_form::{
    ButtonField, CheckboxField, Form, FormOptions, Layout, LayoutError,
    PasswordConfirmationField, PasswordField, SubmitField, TextField, validators,
};

use crate::log_submission;

/// Account creation: names side by side, email, password twice, the policy
/// checkbox, then the submit and Github buttons side by side.
pub fn sign_up_layout() -> Layout {
    Layout::new()
        .pair(
            TextField::new("firstName", "First name")
                .required()
                .with_validator(validators::latin_letters()),
            TextField::new("lastName", "Last name")
                .required()
                .with_validator(validators::latin_letters()),
        )
        .single(
            TextField::new("email", "Email")
                .required()
                .with_validator(validators::email())
                .email(),
        )
        .single(PasswordField::new("password", "Password").required())
        .single(
            PasswordConfirmationField::new(
                "password-confirmation",
                "Password confirmation",
                "password",
            )
            .required(),
        )
        .gap()
        .single(
            CheckboxField::new(
                "policy",
                "I've read and agree with Terms of Service and our Privacy Policy",
            )
            .required(),
        )
        .gap()
        .pair(
            SubmitField::new("Create account"),
            ButtonField::new("Sign up with Github", || {
                tracing::info!("github sign-up requested");
            }),
        )
}

/// The sign-up form in immediate mode, logging submissions with both
/// passwords masked.
pub fn sign_up_form() -> Result<Form, LayoutError> {
    let form = Form::new(sign_up_layout(), FormOptions::new().validate_on_change(true))?
        .with_submit_handler(|values| {
            log_submission("sign-up", values, &["password", "password-confirmation"])
        });
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_form::ValidationResult;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn seeds_six_values() {
        let form = sign_up_form().unwrap();
        assert_eq!(form.values().len(), 6);
        assert!(!form.values().get_checked("policy").unwrap());
        assert!(form.options().validation_on_change);
    }

    #[test]
    fn submit_disabled_until_everything_is_valid() {
        let mut form = sign_up_form().unwrap();
        assert!(!form.is_submit_enabled());

        form.change("firstName", "Jane").unwrap();
        form.change("lastName", "Doe").unwrap();
        form.change("email", "jane@example.com").unwrap();
        form.change("password", "abc").unwrap();
        form.change("password-confirmation", "abd").unwrap();
        form.toggle("policy", true).unwrap();

        assert!(!form.is_submit_enabled());
        assert_eq!(
            form.visible_result("password-confirmation"),
            Some(&ValidationResult::invalid("Passwords are not equal"))
        );

        form.change("password-confirmation", "abc").unwrap();
        assert!(form.is_submit_enabled());
        assert!(form.submit().is_submitted());
    }

    #[test]
    fn submit_logs_masked_passwords() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut form = sign_up_form().unwrap();
            form.change("firstName", "Jane").unwrap();
            form.change("lastName", "Doe").unwrap();
            form.change("email", "jane@example.com").unwrap();
            form.change("password", "hunter2").unwrap();
            form.change("password-confirmation", "hunter2").unwrap();
            form.toggle("policy", true).unwrap();
            assert!(form.submit().is_submitted());
        });

        let logs = buffer.contents();
        assert!(logs.contains("form submitted"));
        assert!(logs.contains("sign-up"));
        assert!(logs.contains("jane@example.com"));
        assert!(logs.contains("*******"));
        assert!(!logs.contains("hunter2"));
    }
}

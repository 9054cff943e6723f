//! Renderer contracts.
//!
//! `Form::view` projects the current state into rows of cells. Frontends only
//! read views and report events back through the `Form` event methods; a view
//! holds no state of its own.

use crate::{
    Callback, CheckboxField, Field, FieldName, Form, InputType, Row, ValidationResult,
};

/// The whole form, row by row.
#[derive(Debug, Clone)]
pub struct FormView<'a> {
    pub rows: Vec<RowView<'a>>,
}

/// One rendered row.
#[derive(Debug, Clone)]
pub enum RowView<'a> {
    FullWidth(CellView<'a>),
    TwoColumn(CellView<'a>, CellView<'a>),
}

impl<'a> RowView<'a> {
    /// The cells of this row, left to right.
    pub fn cells(&self) -> impl Iterator<Item = &CellView<'a>> {
        let (first, second) = match self {
            Self::FullWidth(cell) => (cell, None),
            Self::TwoColumn(left, right) => (left, Some(right)),
        };
        std::iter::once(first).chain(second)
    }
}

/// One rendered cell, resolved from the field's kind.
#[derive(Debug, Clone)]
pub enum CellView<'a> {
    Input(InputView<'a>),
    PasswordInput(InputView<'a>),
    Checkbox(CheckboxView<'a>),
    Button(ButtonView<'a>),
    Submit(SubmitView<'a>),
    Gap,
}

/// A text, email or password input bound to a value and a result.
#[derive(Debug, Clone)]
pub struct InputView<'a> {
    pub name: &'a FieldName,
    pub label: &'a str,
    pub value: &'a str,
    pub input_type: InputType,
    pub is_focused: bool,
    /// The result to display, if the display rule allows it.
    pub result: Option<&'a ValidationResult>,
}

impl InputView<'_> {
    /// The error to print next to the input.
    pub fn error_message(&self) -> Option<&str> {
        self.result
            .filter(|result| result.is_invalid())
            .and_then(ValidationResult::error_message)
    }

    /// Whether to mark the input as accepted.
    pub fn shows_valid_mark(&self) -> bool {
        self.result.is_some_and(ValidationResult::is_valid)
    }
}

#[derive(Debug, Clone)]
pub struct CheckboxView<'a> {
    pub name: &'a FieldName,
    pub text: &'a str,
    pub is_checked: bool,
    pub result: Option<&'a ValidationResult>,
}

impl CheckboxView<'_> {
    pub fn error_message(&self) -> Option<&str> {
        self.result
            .filter(|result| result.is_invalid())
            .and_then(ValidationResult::error_message)
    }
}

#[derive(Debug, Clone)]
pub struct ButtonView<'a> {
    pub text: &'a str,
    on_activate: &'a Callback,
}

impl ButtonView<'_> {
    /// Run the caller's action.
    pub fn activate(&self) {
        self.on_activate.call();
    }
}

#[derive(Debug, Clone)]
pub struct SubmitView<'a> {
    pub text: &'a str,
    pub is_enabled: bool,
}

impl Form {
    /// Project the current state into renderable rows.
    pub fn view(&self) -> FormView<'_> {
        let rows = self
            .layout()
            .rows()
            .iter()
            .map(|row| match row {
                Row::Single(field) => RowView::FullWidth(self.cell(field)),
                Row::Pair(left, right) => RowView::TwoColumn(self.cell(left), self.cell(right)),
            })
            .collect();

        FormView { rows }
    }

    fn cell<'a>(&'a self, field: &'a Field) -> CellView<'a> {
        match field {
            Field::Text(text) => {
                CellView::Input(self.input(&text.name, &text.label, InputType::Text))
            }
            Field::Email(email) => {
                CellView::Input(self.input(&email.name, &email.label, InputType::Email))
            }
            Field::Password(password) => CellView::PasswordInput(self.input(
                &password.name,
                &password.label,
                InputType::Password,
            )),
            Field::PasswordConfirmation(confirmation) => CellView::PasswordInput(self.input(
                &confirmation.name,
                &confirmation.label,
                InputType::Password,
            )),
            Field::Checkbox(checkbox) => CellView::Checkbox(self.checkbox(checkbox)),
            Field::Button(button) => CellView::Button(ButtonView {
                text: &button.text,
                on_activate: &button.on_activate,
            }),
            Field::Submit(submit) => CellView::Submit(SubmitView {
                text: &submit.text,
                is_enabled: self.is_submit_enabled(),
            }),
            Field::Gap => CellView::Gap,
        }
    }

    fn input<'a>(
        &'a self,
        name: &'a FieldName,
        label: &'a str,
        input_type: InputType,
    ) -> InputView<'a> {
        InputView {
            name,
            label,
            value: self
                .value(name.as_str())
                .and_then(|value| value.as_str())
                .unwrap_or_default(),
            input_type,
            is_focused: self.focused() == Some(name),
            result: self.visible_result(name.as_str()),
        }
    }

    fn checkbox<'a>(&'a self, checkbox: &'a CheckboxField) -> CheckboxView<'a> {
        CheckboxView {
            name: &checkbox.name,
            text: &checkbox.text,
            is_checked: self
                .value(checkbox.name.as_str())
                .and_then(|value| value.as_bool())
                .unwrap_or(checkbox.is_default_checked),
            result: self.visible_result(checkbox.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ButtonField, FormOptions, Layout, PasswordField, SubmitField, TextField, validators,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn form(options: FormOptions, pressed: Arc<AtomicBool>) -> Form {
        let layout = Layout::new()
            .single(
                TextField::new("email", "Email")
                    .required()
                    .with_validator(validators::email())
                    .email(),
            )
            .single(PasswordField::new("password", "Password").required())
            .gap()
            .pair(
                SubmitField::new("Sign in"),
                ButtonField::new("Sign in with Github", move || {
                    pressed.store(true, Ordering::SeqCst)
                }),
            );
        Form::new(layout, options).unwrap()
    }

    #[test]
    fn rows_follow_layout() {
        let form = form(FormOptions::new(), Arc::new(AtomicBool::new(false)));
        let view = form.view();

        assert_eq!(view.rows.len(), 4);
        assert!(matches!(view.rows[0], RowView::FullWidth(CellView::Input(_))));
        assert!(matches!(
            view.rows[1],
            RowView::FullWidth(CellView::PasswordInput(_))
        ));
        assert!(matches!(view.rows[2], RowView::FullWidth(CellView::Gap)));
        assert!(matches!(
            view.rows[3],
            RowView::TwoColumn(CellView::Submit(_), CellView::Button(_))
        ));
    }

    #[test]
    fn input_reflects_state() {
        let mut form = form(FormOptions::new(), Arc::new(AtomicBool::new(false)));
        form.focus("email").unwrap();
        form.change("email", "not-an-email").unwrap();

        let view = form.view();
        let RowView::FullWidth(CellView::Input(input)) = &view.rows[0] else {
            panic!("expected an input row");
        };
        assert_eq!(input.value, "not-an-email");
        assert_eq!(input.input_type, InputType::Email);
        assert!(input.is_focused);
        assert_eq!(input.error_message(), None);

        form.blur("email").unwrap();
        let view = form.view();
        let RowView::FullWidth(CellView::Input(input)) = &view.rows[0] else {
            panic!("expected an input row");
        };
        assert_eq!(input.error_message(), Some("Incorrect email format"));
        assert!(!input.shows_valid_mark());
    }

    #[test]
    fn submit_disabled_in_immediate_mode() {
        let form = form(
            FormOptions::new().validate_on_change(true),
            Arc::new(AtomicBool::new(false)),
        );
        let view = form.view();
        let RowView::TwoColumn(CellView::Submit(submit), _) = &view.rows[3] else {
            panic!("expected the submit row");
        };
        assert!(!submit.is_enabled);
    }

    #[test]
    fn button_activates_callback() {
        let pressed = Arc::new(AtomicBool::new(false));
        let form = form(FormOptions::new(), Arc::clone(&pressed));

        let view = form.view();
        let RowView::TwoColumn(_, CellView::Button(button)) = &view.rows[3] else {
            panic!("expected the button row");
        };
        assert_eq!(button.text, "Sign in with Github");
        button.activate();
        assert!(pressed.load(Ordering::SeqCst));
    }
}

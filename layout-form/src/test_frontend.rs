//! Test frontend for driving forms without user interaction.
//!
//! `TestFrontend` replays a scripted sequence of events against a form and
//! then submits it. This is useful for testing layouts and submit handlers.
//!
//! # Example
//!
//! ```rust
//! use layout_form::{Form, FormFrontend, FormOptions, Layout, TestFrontend, TextField};
//!
//! let layout = Layout::new().single(TextField::new("host", "Host").required());
//! let mut form = Form::new(layout, FormOptions::new()).unwrap();
//!
//! let values = TestFrontend::new()
//!     .with_text("host", "localhost")
//!     .run(&mut form)
//!     .unwrap();
//!
//! assert_eq!(values.get_text("host").unwrap(), "localhost");
//! ```

use crate::{CellView, FieldName, Form, FormError, FormFrontend, FormValues, SubmitOutcome};

/// One scripted user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TestEvent {
    Focus(String),
    Change(String, String),
    Blur(String),
    Toggle(String, bool),
    /// Activate the button with this text.
    Press(String),
}

/// A test frontend that replays pre-configured events, then submits.
#[derive(Debug, Clone, Default)]
pub struct TestFrontend {
    events: Vec<TestEvent>,
}

/// Error type for TestFrontend.
#[derive(Debug, thiserror::Error)]
pub enum TestFrontendError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("No button labelled '{0}'")]
    MissingButton(String),

    #[error("Submit rejected, invalid fields: {}", join_names(.0))]
    SubmitRejected(Vec<FieldName>),

    #[error("Submit control is disabled")]
    SubmitDisabled,
}

impl TestFrontend {
    /// Create a new empty test frontend.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add a raw event.
    pub fn with_event(mut self, event: TestEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Type into a field: focus, change, blur.
    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.with_event(TestEvent::Focus(name.clone()))
            .with_event(TestEvent::Change(name.clone(), value.into()))
            .with_event(TestEvent::Blur(name))
    }

    /// Set a checkbox.
    pub fn with_checked(self, name: impl Into<String>, checked: bool) -> Self {
        self.with_event(TestEvent::Toggle(name.into(), checked))
    }

    /// Press a secondary button.
    pub fn with_press(self, text: impl Into<String>) -> Self {
        self.with_event(TestEvent::Press(text.into()))
    }

    /// Replay the events without submitting.
    pub fn replay(&self, form: &mut Form) -> Result<(), TestFrontendError> {
        for event in &self.events {
            match event {
                TestEvent::Focus(name) => form.focus(name)?,
                TestEvent::Change(name, value) => form.change(name, value.as_str())?,
                TestEvent::Blur(name) => form.blur(name)?,
                TestEvent::Toggle(name, checked) => form.toggle(name, *checked)?,
                TestEvent::Press(text) => press(form, text)?,
            }
        }
        Ok(())
    }
}

fn join_names(names: &[FieldName]) -> String {
    names
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn press(form: &Form, text: &str) -> Result<(), TestFrontendError> {
    let view = form.view();
    let button = view
        .rows
        .iter()
        .flat_map(|row| row.cells())
        .find_map(|cell| match cell {
            CellView::Button(button) if button.text == text => Some(button),
            _ => None,
        })
        .ok_or_else(|| TestFrontendError::MissingButton(text.to_string()))?;

    button.activate();
    Ok(())
}

impl FormFrontend for TestFrontend {
    type Error = TestFrontendError;

    fn run(&self, form: &mut Form) -> Result<FormValues, Self::Error> {
        self.replay(form)?;

        match form.submit() {
            SubmitOutcome::Submitted(values) => Ok(values),
            SubmitOutcome::Rejected { invalid } => Err(TestFrontendError::SubmitRejected(invalid)),
            SubmitOutcome::Disabled => Err(TestFrontendError::SubmitDisabled),
        }
    }
}

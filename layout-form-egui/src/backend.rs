//! Egui frontend implementation for the FormFrontend trait.

use eframe::egui;
use layout_form::{
    CellView, CheckboxView, FieldName, Form, FormError, FormFrontend, FormValues, InputView,
    RowView, SubmitOutcome,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Error type for the Egui frontend.
#[derive(Debug, Error)]
pub enum EguiError {
    /// User closed the window before a successful submit.
    #[error("Form cancelled by user")]
    Cancelled,

    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    Egui(String),
}

/// Builder/configuration for the Egui frontend.
#[derive(Debug, Clone)]
pub struct EguiFrontend {
    /// Window title, also shown as the page heading.
    title: String,
    /// Line shown above the heading.
    description: Option<String>,
    /// Window size [width, height].
    window_size: [f32; 2],
}

impl Default for EguiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiFrontend {
    /// Create a new Egui frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Form".to_string(),
            description: None,
            window_size: [480.0, 560.0],
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the line shown above the heading.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the window size.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }
}

/// An interaction captured while drawing one frame.
#[derive(Debug, Clone, PartialEq)]
enum UiEvent {
    Focus(FieldName),
    Change(FieldName, String),
    Blur(FieldName),
    Toggle(FieldName, bool),
    Submit,
}

/// Outcome shared between the running app and `run`.
#[derive(Debug, Default)]
struct Session {
    submitted: Option<FormValues>,
}

// A panic elsewhere must not lose a submit, so poisoned locks are recovered.
fn record_submission(session: &Mutex<Session>, values: FormValues) {
    let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
    session.submitted = Some(values);
}

fn take_submission(session: &Mutex<Session>) -> Option<FormValues> {
    let mut session = session.lock().unwrap_or_else(PoisonError::into_inner);
    session.submitted.take()
}

/// Feed captured events into the form.
///
/// Returns the submitted values once a submit succeeds; events after it are
/// dropped.
fn apply_events(
    form: &mut Form,
    events: Vec<UiEvent>,
) -> Result<Option<FormValues>, FormError> {
    for event in events {
        match event {
            UiEvent::Focus(name) => form.focus(name.as_str())?,
            UiEvent::Change(name, text) => form.change(name.as_str(), text)?,
            UiEvent::Blur(name) => form.blur(name.as_str())?,
            UiEvent::Toggle(name, checked) => form.toggle(name.as_str(), checked)?,
            UiEvent::Submit => match form.submit() {
                SubmitOutcome::Submitted(values) => return Ok(Some(values)),
                SubmitOutcome::Rejected { invalid } => {
                    tracing::debug!(invalid = invalid.len(), "submit rejected");
                }
                SubmitOutcome::Disabled => {}
            },
        }
    }
    Ok(None)
}

struct FormApp<'a> {
    form: &'a mut Form,
    session: Arc<Mutex<Session>>,
    heading: String,
    description: Option<String>,
    /// Password inputs currently displayed in clear text.
    revealed: HashSet<FieldName>,
}

fn render_row(
    ui: &mut egui::Ui,
    row: &RowView<'_>,
    revealed: &mut HashSet<FieldName>,
    events: &mut Vec<UiEvent>,
) {
    match row {
        RowView::FullWidth(cell) => render_cell(ui, cell, revealed, events),
        RowView::TwoColumn(left, right) => {
            ui.columns(2, |columns| {
                render_cell(&mut columns[0], left, revealed, events);
                render_cell(&mut columns[1], right, revealed, events);
            });
        }
    }
    ui.add_space(8.0);
}

fn render_cell(
    ui: &mut egui::Ui,
    cell: &CellView<'_>,
    revealed: &mut HashSet<FieldName>,
    events: &mut Vec<UiEvent>,
) {
    match cell {
        CellView::Input(input) => {
            ui.label(input.label);
            render_text_edit(ui, input, false, events);
        }
        CellView::PasswordInput(input) => {
            let hidden = !revealed.contains(input.name);
            ui.horizontal(|ui| {
                ui.label(input.label);
                let icon = if hidden { "👁" } else { "🙈" };
                if ui.small_button(icon).clicked() {
                    if hidden {
                        revealed.insert(input.name.clone());
                    } else {
                        revealed.remove(input.name);
                    }
                }
            });
            render_text_edit(ui, input, hidden, events);
        }
        CellView::Checkbox(checkbox) => render_checkbox(ui, checkbox, events),
        CellView::Button(button) => {
            let width = ui.available_width();
            if ui
                .add(egui::Button::new(button.text).min_size(egui::vec2(width, 28.0)))
                .clicked()
            {
                button.activate();
            }
        }
        CellView::Submit(submit) => {
            let width = ui.available_width();
            if ui
                .add_enabled(
                    submit.is_enabled,
                    egui::Button::new(submit.text).min_size(egui::vec2(width, 28.0)),
                )
                .clicked()
            {
                events.push(UiEvent::Submit);
            }
        }
        CellView::Gap => {
            ui.add_space(16.0);
        }
    }
}

fn render_text_edit(
    ui: &mut egui::Ui,
    input: &InputView<'_>,
    password: bool,
    events: &mut Vec<UiEvent>,
) {
    let mut value = input.value.to_string();

    let response = ui
        .horizontal(|ui| {
            let width = ui.available_width() - 20.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .id_salt(input.name.as_str())
                    .password(password)
                    .desired_width(width),
            );
            if input.shows_valid_mark() {
                ui.colored_label(egui::Color32::GREEN, "✔");
            }
            response
        })
        .inner;

    if response.gained_focus() {
        events.push(UiEvent::Focus(input.name.clone()));
    }
    if response.changed() {
        events.push(UiEvent::Change(input.name.clone(), value));
    }
    if response.lost_focus() {
        events.push(UiEvent::Blur(input.name.clone()));
    }

    if let Some(error) = input.error_message() {
        ui.colored_label(egui::Color32::RED, format!("⚠ {error}"));
    }
}

fn render_checkbox(ui: &mut egui::Ui, checkbox: &CheckboxView<'_>, events: &mut Vec<UiEvent>) {
    let mut checked = checkbox.is_checked;
    if ui.checkbox(&mut checked, checkbox.text).changed() {
        events.push(UiEvent::Toggle(checkbox.name.clone(), checked));
    }

    if let Some(error) = checkbox.error_message() {
        ui.colored_label(egui::Color32::RED, format!("⚠ {error}"));
    }
}

impl eframe::App for FormApp<'_> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let FormApp {
            form,
            session,
            heading,
            description,
            revealed,
        } = self;
        let mut events = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(description) = description {
                ui.weak(description.as_str());
            }
            ui.heading(heading.as_str());
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                // The view borrows the form; events are applied after drawing.
                let view = form.view();
                for row in &view.rows {
                    render_row(ui, row, revealed, &mut events);
                }
            });
        });

        if events.is_empty() {
            return;
        }

        match apply_events(form, events) {
            Ok(Some(values)) => {
                record_submission(session, values);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "dropping ui event"),
        }
    }
}

impl FormFrontend for EguiFrontend {
    type Error = EguiError;

    fn run(&self, form: &mut Form) -> Result<FormValues, Self::Error> {
        let session = Arc::new(Mutex::new(Session::default()));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        };

        let app = FormApp {
            form,
            session: Arc::clone(&session),
            heading: self.title.clone(),
            description: self.description.clone(),
            revealed: HashSet::new(),
        };

        let app: Box<dyn eframe::App + '_> = Box::new(app);

        // Blocks until the window is closed
        eframe::run_native(&self.title, options, Box::new(move |_cc| Ok(app)))
            .map_err(|e| EguiError::Egui(e.to_string()))?;

        take_submission(&session).ok_or(EguiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_form::{
        CheckboxField, FormOptions, Layout, PasswordField, SubmitField, TextField, validators,
    };

    fn form(options: FormOptions) -> Form {
        let layout = Layout::new()
            .single(
                TextField::new("email", "Email")
                    .required()
                    .with_validator(validators::email())
                    .email(),
            )
            .single(PasswordField::new("password", "Password").required())
            .single(CheckboxField::new("remember", "Remember me"))
            .single(SubmitField::new("Sign in"));
        Form::new(layout, options).unwrap()
    }

    fn name(name: &str) -> FieldName {
        FieldName::new(name)
    }

    #[test]
    fn frontend_creation() {
        let frontend = EguiFrontend::new()
            .with_title("Sign in")
            .with_description("Welcome back")
            .with_window_size([800.0, 600.0]);
        assert_eq!(frontend.title, "Sign in");
        assert_eq!(frontend.description.as_deref(), Some("Welcome back"));
        assert_eq!(frontend.window_size, [800.0, 600.0]);

        let _default = EguiFrontend::default();
    }

    #[test]
    fn error_types() {
        let err = EguiError::Cancelled;
        assert_eq!(err.to_string(), "Form cancelled by user");

        let err = EguiError::Egui("test error".to_string());
        assert_eq!(err.to_string(), "Egui error: test error");
    }

    #[test]
    fn typing_session_mirrors_focus_and_blur() {
        let mut form = form(FormOptions::new());

        let submitted = apply_events(
            &mut form,
            vec![
                UiEvent::Focus(name("email")),
                UiEvent::Change(name("email"), "jane".to_string()),
            ],
        )
        .unwrap();
        assert!(submitted.is_none());
        assert_eq!(form.focused(), Some(&name("email")));
        assert!(!form.is_shown("email"));

        apply_events(&mut form, vec![UiEvent::Blur(name("email"))]).unwrap();
        assert!(form.focused().is_none());
        assert_eq!(
            form.visible_result("email")
                .and_then(|result| result.error_message()),
            Some("Incorrect email format")
        );
    }

    #[test]
    fn submit_returns_values_and_drops_trailing_events() {
        let mut form = form(FormOptions::new());

        let submitted = apply_events(
            &mut form,
            vec![
                UiEvent::Change(name("email"), "jane@example.com".to_string()),
                UiEvent::Change(name("password"), "secret".to_string()),
                UiEvent::Toggle(name("remember"), true),
                UiEvent::Submit,
                UiEvent::Change(name("email"), "ignored".to_string()),
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(submitted.get_text("email").unwrap(), "jane@example.com");
        assert!(submitted.get_checked("remember").unwrap());
        assert_eq!(form.values().get_text("email").unwrap(), "jane@example.com");
    }

    #[test]
    fn invalid_submit_keeps_window_open() {
        let mut deferred = form(FormOptions::new());
        assert!(
            apply_events(&mut deferred, vec![UiEvent::Submit])
                .unwrap()
                .is_none()
        );
        assert!(deferred.is_shown("email"));

        let mut immediate = form(FormOptions::new().validate_on_change(true));
        assert!(
            apply_events(&mut immediate, vec![UiEvent::Submit])
                .unwrap()
                .is_none()
        );
        assert!(immediate.shown().is_empty());
    }

    #[test]
    fn submission_survives_a_poisoned_session() {
        let session = Arc::new(Mutex::new(Session::default()));

        let poisoner = Arc::clone(&session);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("render thread died");
        })
        .join();
        assert!(session.is_poisoned());

        let values: FormValues = [("email", "jane@example.com")].into_iter().collect();
        record_submission(&session, values.clone());
        assert_eq!(take_submission(&session), Some(values));
        assert_eq!(take_submission(&session), None);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut form = form(FormOptions::new());
        let err = apply_events(&mut form, vec![UiEvent::Focus(name("nope"))]).unwrap_err();
        assert_eq!(err, FormError::UnknownField(name("nope")));
    }
}

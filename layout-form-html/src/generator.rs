//! HTML form generator implementation.

use layout_form::{
    ButtonView, CellView, CheckboxView, Form, FormView, InputType, InputView, RowView, SubmitView,
};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document, also rendered as the page heading.
    pub title: Option<String>,
    /// Short line rendered above the heading.
    pub description: Option<String>,
    /// Secondary text rendered between the heading and the form.
    pub note: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            note: None,
            include_styles: true,
            full_document: true,
            class_prefix: "form".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the line shown above the heading.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the secondary text shown above the form.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Render the current state of a form as HTML.
///
/// Values, visible validation messages and the submit control's enabled
/// state are taken from `Form::view`, so rendering after a submit attempt
/// shows the revealed errors.
pub fn to_html(form: &Form, options: &HtmlOptions) -> String {
    generate_html(&form.view(), options)
}

fn generate_html(view: &FormView<'_>, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    // Page chrome
    if let Some(description) = &options.description {
        html.push_str(&format!(
            "<h2 class=\"{prefix}-description\">{}</h2>\n",
            escape_html(description)
        ));
    }
    if let Some(title) = &options.title {
        html.push_str(&format!(
            "<h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }
    if let Some(note) = &options.note {
        html.push_str(&format!(
            "<p class=\"{prefix}-note\">{}</p>\n",
            escape_html(note)
        ));
    }

    html.push_str(&format!("<form class=\"{prefix}-form\" novalidate>\n"));

    for row in &view.rows {
        html.push_str(&generate_row(row, prefix));
    }

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

fn generate_row(row: &RowView<'_>, prefix: &str) -> String {
    let class = match row {
        RowView::FullWidth(_) => format!("{prefix}-row"),
        RowView::TwoColumn(..) => format!("{prefix}-row {prefix}-row-pair"),
    };

    let mut html = format!("  <div class=\"{class}\">\n");
    for cell in row.cells() {
        html.push_str(&generate_cell(cell, prefix, 2));
    }
    html.push_str("  </div>\n");
    html
}

fn generate_cell(cell: &CellView<'_>, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);

    match cell {
        CellView::Input(input) | CellView::PasswordInput(input) => {
            generate_input(input, prefix, &ind)
        }
        CellView::Checkbox(checkbox) => generate_checkbox(checkbox, prefix, &ind),
        CellView::Button(button) => generate_button(button, prefix, &ind),
        CellView::Submit(submit) => generate_submit(submit, prefix, &ind),
        CellView::Gap => format!("{ind}<div class=\"{prefix}-gap\"></div>\n"),
    }
}

fn generate_input(input: &InputView<'_>, prefix: &str, ind: &str) -> String {
    let id = escape_html(input.name.as_str());
    let error = input.error_message();

    let mut classes = format!("{prefix}-field");
    if input.is_focused {
        classes.push_str(&format!(" {prefix}-focused"));
    }
    if error.is_some() {
        classes.push_str(&format!(" {prefix}-invalid"));
    }

    // Passwords are never echoed back into the page.
    let (value_attr, autocomplete) = match input.input_type {
        InputType::Password => (String::new(), "new-password"),
        InputType::Text | InputType::Email => (
            format!(" value=\"{}\"", escape_html(input.value)),
            "off",
        ),
    };

    let mut html = String::new();
    html.push_str(&format!("{ind}<div class=\"{classes}\">\n"));
    html.push_str(&format!(
        "{ind}  <label for=\"{id}\">{}</label>\n",
        escape_html(input.label)
    ));
    html.push_str(&format!(
        "{ind}  <input type=\"{}\" id=\"{id}\" name=\"{id}\" class=\"{prefix}-input\" autocomplete=\"{autocomplete}\"{value_attr}>\n",
        input.input_type.as_str()
    ));
    if let Some(message) = error {
        html.push_str(&format!(
            "{ind}  <span class=\"{prefix}-error\">{}</span>\n",
            escape_html(message)
        ));
    }
    if input.shows_valid_mark() {
        html.push_str(&format!(
            "{ind}  <span class=\"{prefix}-valid\">&#10003;</span>\n"
        ));
    }
    html.push_str(&format!("{ind}</div>\n"));
    html
}

fn generate_checkbox(checkbox: &CheckboxView<'_>, prefix: &str, ind: &str) -> String {
    let id = escape_html(checkbox.name.as_str());
    let checked = if checkbox.is_checked { " checked" } else { "" };

    let mut html = String::new();
    html.push_str(&format!("{ind}<div class=\"{prefix}-checkbox\">\n"));
    html.push_str(&format!(
        "{ind}  <input type=\"checkbox\" id=\"{id}\" name=\"{id}\"{checked}>\n"
    ));
    html.push_str(&format!(
        "{ind}  <label for=\"{id}\">{}</label>\n",
        escape_html(checkbox.text)
    ));
    if let Some(message) = checkbox.error_message() {
        html.push_str(&format!(
            "{ind}  <span class=\"{prefix}-error\">{}</span>\n",
            escape_html(message)
        ));
    }
    html.push_str(&format!("{ind}</div>\n"));
    html
}

fn generate_button(button: &ButtonView<'_>, prefix: &str, ind: &str) -> String {
    format!(
        "{ind}<button type=\"button\" class=\"{prefix}-button\">{}</button>\n",
        escape_html(button.text)
    )
}

fn generate_submit(submit: &SubmitView<'_>, prefix: &str, ind: &str) -> String {
    let disabled = if submit.is_enabled { "" } else { " disabled" };
    format!(
        "{ind}<button type=\"submit\" class=\"{prefix}-submit\"{disabled}>{}</button>\n",
        escape_html(submit.text)
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    body {{
      max-width: 520px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-description {{
      margin: 0;
      font-size: 1rem;
      font-weight: normal;
      color: #666;
    }}
    .{prefix}-title {{
      margin: 0.25rem 0 0.5rem;
    }}
    .{prefix}-note {{
      color: #666;
    }}
    .{prefix}-row {{
      margin: 0.5rem 0;
    }}
    .{prefix}-row-pair {{
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 1rem;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-invalid .{prefix}-input {{
      border-color: #d33;
    }}
    .{prefix}-error {{
      color: #d33;
      font-size: 0.85rem;
    }}
    .{prefix}-valid {{
      color: #2a2;
    }}
    .{prefix}-checkbox {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-gap {{
      height: 1rem;
    }}
    .{prefix}-submit, .{prefix}-button {{
      width: 100%;
      padding: 0.5rem 1rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_form::{
        ButtonField, CheckboxField, FormOptions, Layout, PasswordField, SubmitField, TextField,
        validators,
    };

    fn sign_in(options: FormOptions) -> Form {
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
                ButtonField::new("Sign in with Github", || {}),
            );
        Form::new(layout, options).unwrap()
    }

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_title("Sign in")
            .with_description("Welcome back")
            .with_note("Don't have an account?")
            .with_styles(false)
            .full_document(false)
            .with_class_prefix("auth");

        assert_eq!(options.title.as_deref(), Some("Sign in"));
        assert_eq!(options.description.as_deref(), Some("Welcome back"));
        assert_eq!(options.note.as_deref(), Some("Don't have an account?"));
        assert!(!options.include_styles);
        assert!(!options.full_document);
        assert_eq!(options.class_prefix, "auth");
    }

    #[test]
    fn full_document_with_chrome() {
        let form = sign_in(FormOptions::new());
        let html = to_html(
            &form,
            &HtmlOptions::new()
                .with_title("Sign in")
                .with_description("Welcome back"),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sign in</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<h2 class=\"form-description\">Welcome back</h2>"));
        assert!(html.contains("<h1 class=\"form-title\">Sign in</h1>"));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        let form = sign_in(FormOptions::new());
        let html = to_html(&form, &HtmlOptions::new().full_document(false));

        assert!(html.starts_with("<form"));
        assert!(!html.contains("<html"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn rows_and_cells() {
        let form = sign_in(FormOptions::new());
        let html = to_html(&form, &HtmlOptions::new().full_document(false));

        assert_eq!(html.matches("class=\"form-row\"").count(), 3);
        assert_eq!(html.matches("form-row-pair").count(), 1);
        assert!(html.contains("<input type=\"email\" id=\"email\" name=\"email\""));
        assert!(html.contains("<input type=\"password\" id=\"password\""));
        assert!(html.contains("<div class=\"form-gap\"></div>"));
        assert!(html.contains("<button type=\"submit\" class=\"form-submit\">Sign in</button>"));
        assert!(html.contains(
            "<button type=\"button\" class=\"form-button\">Sign in with Github</button>"
        ));
    }

    #[test]
    fn submit_disabled_while_invalid_in_immediate_mode() {
        let mut form = sign_in(FormOptions::new().validate_on_change(true));
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(html.contains("class=\"form-submit\" disabled>"));

        form.change("email", "jane@example.com").unwrap();
        form.change("password", "secret").unwrap();
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(html.contains("class=\"form-submit\">"));
        assert!(html.contains("value=\"jane@example.com\""));
        assert!(html.contains("<span class=\"form-valid\">&#10003;</span>"));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn errors_appear_after_deferred_submit() {
        let mut form = sign_in(FormOptions::new());
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(!html.contains("form-error"));

        form.change("email", "not-an-email").unwrap();
        form.submit();
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(html.contains("<span class=\"form-error\">Incorrect email format</span>"));
        assert!(html.contains("<span class=\"form-error\">Required field</span>"));
        assert!(html.contains("form-field form-invalid"));
    }

    #[test]
    fn checkbox_state_and_error() {
        let mut form = Form::new(
            Layout::new()
                .single(CheckboxField::new("policy", "I agree <fully>").required())
                .single(SubmitField::new("Send")),
            FormOptions::new(),
        )
        .unwrap();

        form.submit();
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(html.contains("<input type=\"checkbox\" id=\"policy\" name=\"policy\">"));
        assert!(html.contains("I agree &lt;fully&gt;"));
        assert!(html.contains("<span class=\"form-error\">Required field</span>"));

        form.toggle("policy", true).unwrap();
        let html = to_html(&form, &HtmlOptions::new().full_document(false));
        assert!(html.contains("name=\"policy\" checked>"));
        assert!(!html.contains("form-error"));
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}

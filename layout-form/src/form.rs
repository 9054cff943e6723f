//! Form state store and the visibility/submission policy.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::registry::FieldRegistry;
use crate::validation::evaluate_field;
use crate::{
    Field, FieldKind, FieldName, FieldValue, FormError, FormValues, Layout, LayoutError,
    ValidationResult,
};

/// Handler receiving the values of a successfully submitted form.
pub type SubmitHandler = Arc<dyn Fn(&FormValues) + Send + Sync>;

/// Options controlling when validation results become visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    /// Immediate mode: reveal results as soon as an edit is committed and
    /// keep the submit control disabled while any field is invalid.
    ///
    /// When `false` (deferred mode) results surface on blur or all at once on
    /// a submit attempt, and the submit control is always enabled.
    pub validation_on_change: bool,
}

impl FormOptions {
    /// Deferred mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable immediate mode.
    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.validation_on_change = enabled;
        self
    }
}

/// What happened when the form was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field was valid; the handler (if any) received these values.
    Submitted(FormValues),

    /// At least one field was invalid; nothing was handed to the handler.
    Rejected { invalid: Vec<FieldName> },

    /// Immediate mode with an invalid form: the submit control is disabled.
    Disabled,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// A live form built from a layout.
///
/// Owns the current values, the last validation result of every data-bearing
/// field, the set of fields whose result is shown to the user, and the
/// focused field. Every event is a synchronous method call.
pub struct Form {
    layout: Layout,
    registry: FieldRegistry,
    options: FormOptions,
    values: FormValues,
    results: HashMap<FieldName, ValidationResult>,
    /// Insertion-ordered, never holds a name twice.
    shown: Vec<FieldName>,
    focused: Option<FieldName>,
    on_submit: Option<SubmitHandler>,
}

impl Form {
    /// Build a form, seeding every value from its field's default and
    /// evaluating every field once.
    pub fn new(layout: Layout, options: FormOptions) -> Result<Self, LayoutError> {
        let registry = FieldRegistry::resolve(&layout)?;

        let values: FormValues = layout
            .fields()
            .filter_map(|field| Some((field.name()?.clone(), field.initial_value()?)))
            .collect();

        let mut form = Self {
            layout,
            registry,
            options,
            values,
            results: HashMap::new(),
            shown: Vec::new(),
            focused: None,
            on_submit: None,
        };

        for name in form.registry.names().to_vec() {
            form.recompute(name.as_str());
        }

        Ok(form)
    }

    /// Set the handler invoked on a successful submit.
    pub fn with_submit_handler(
        mut self,
        handler: impl Fn(&FormValues) + Send + Sync + 'static,
    ) -> Self {
        self.on_submit = Some(Arc::new(handler));
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// The named data-bearing field.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.registry.field(&self.layout, name)
    }

    /// The last validation result of the named field.
    pub fn result(&self, name: &str) -> Option<&ValidationResult> {
        self.results.get(name)
    }

    /// Fields whose result is currently shown, in the order they were revealed.
    pub fn shown(&self) -> &[FieldName] {
        &self.shown
    }

    pub fn is_shown(&self, name: &str) -> bool {
        self.shown.iter().any(|shown| shown == name)
    }

    pub fn focused(&self) -> Option<&FieldName> {
        self.focused.as_ref()
    }

    fn is_focused(&self, name: &str) -> bool {
        self.focused.as_ref().is_some_and(|focused| focused == name)
    }

    fn require(&self, name: &str) -> Result<(), FormError> {
        if self.registry.contains(name) {
            Ok(())
        } else {
            Err(FormError::UnknownField(FieldName::new(name)))
        }
    }

    // === State store ===

    /// Replace one value and re-evaluate the field and every confirmation
    /// field comparing against it.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<&ValidationResult, FormError> {
        let value = value.into();
        let current = self
            .values
            .get(name)
            .ok_or_else(|| FormError::UnknownField(FieldName::new(name)))?;

        if !current.same_kind(&value) {
            return Err(FormError::TypeMismatch {
                name: FieldName::new(name),
                expected: current.type_name(),
                actual: value.type_name(),
            });
        }

        tracing::trace!(field = name, "value changed");
        self.values.insert(name, value);

        self.recompute(name);
        for dependent in self.registry.dependents(name).to_vec() {
            self.recompute(dependent.as_str());
        }

        self.results
            .get(name)
            .ok_or_else(|| FormError::UnknownField(FieldName::new(name)))
    }

    /// Add `name` to or remove it from the shown set.
    pub fn set_shown(&mut self, name: &str, is_shown: bool) -> Result<(), FormError> {
        self.require(name)?;
        self.set_shown_unchecked(name, is_shown);
        Ok(())
    }

    /// Show every data-bearing field's result.
    pub fn reveal_all(&mut self) {
        tracing::debug!(fields = self.registry.len(), "revealing all validation results");
        self.shown = self.registry.names().to_vec();
    }

    fn set_shown_unchecked(&mut self, name: &str, is_shown: bool) {
        if is_shown {
            if !self.is_shown(name) {
                self.shown.push(FieldName::new(name));
            }
        } else {
            self.shown.retain(|shown| shown != name);
        }
    }

    /// Show the field's result if it has been evaluated, hide it otherwise.
    fn show_if_known(&mut self, name: &str) {
        let known = self.results.get(name).is_some_and(ValidationResult::is_known);
        self.set_shown_unchecked(name, known);
    }

    fn recompute(&mut self, name: &str) {
        let result = match self.registry.field(&self.layout, name) {
            Some(field) => evaluate_field(field, &self.values),
            None => return,
        };
        self.results.insert(FieldName::new(name), result);
    }

    // === Events ===

    /// The field received focus.
    pub fn focus(&mut self, name: &str) -> Result<(), FormError> {
        self.require(name)?;
        self.focused = Some(FieldName::new(name));
        Ok(())
    }

    /// The field lost focus. Its result becomes shown once it is known.
    pub fn blur(&mut self, name: &str) -> Result<(), FormError> {
        self.require(name)?;
        if self.is_focused(name) {
            self.focused = None;
        }
        self.show_if_known(name);
        Ok(())
    }

    /// The user edited a text-valued field.
    ///
    /// The result is hidden while the user types. A change arriving while the
    /// field is not focused counts as committed and, in immediate mode, is
    /// shown right away.
    pub fn change(&mut self, name: &str, text: impl Into<String>) -> Result<(), FormError> {
        self.set_value(name, FieldValue::Text(text.into()))?;
        self.set_shown_unchecked(name, false);

        if self.options.validation_on_change && !self.is_focused(name) {
            self.show_if_known(name);
        }
        Ok(())
    }

    /// The user toggled a checkbox.
    pub fn toggle(&mut self, name: &str, checked: bool) -> Result<(), FormError> {
        self.set_value(name, FieldValue::Checked(checked))?;

        if self.options.validation_on_change {
            self.show_if_known(name);
        }
        Ok(())
    }

    /// Submit the form.
    ///
    /// In deferred mode every result is revealed first. The handler only runs
    /// when every field is valid.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_submit_enabled() {
            tracing::debug!("submit ignored: control disabled");
            return SubmitOutcome::Disabled;
        }

        if !self.options.validation_on_change {
            self.reveal_all();
        }

        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            tracing::debug!(invalid = invalid.len(), "submit rejected");
            return SubmitOutcome::Rejected { invalid };
        }

        let snapshot = self.values.clone();
        if let Some(handler) = &self.on_submit {
            handler(&snapshot);
        }
        tracing::debug!(fields = snapshot.len(), "form submitted");
        SubmitOutcome::Submitted(snapshot)
    }

    // === Derived state ===

    /// Names of fields whose last result is not a pass, in render order.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.registry
            .names()
            .iter()
            .filter(|name| !self.results.get(name.as_str()).is_some_and(ValidationResult::is_valid))
            .cloned()
            .collect()
    }

    /// Check if every data-bearing field currently passes.
    pub fn is_form_valid(&self) -> bool {
        self.registry
            .names()
            .iter()
            .all(|name| self.results.get(name.as_str()).is_some_and(ValidationResult::is_valid))
    }

    /// Whether the submit control accepts activation.
    pub fn is_submit_enabled(&self) -> bool {
        !self.options.validation_on_change || self.is_form_valid()
    }

    /// The result a renderer should display next to the field, if any.
    ///
    /// A result must be shown first. Password fields and checkboxes only ever
    /// display failures; text fields display successes too in immediate mode;
    /// confirmation fields always display.
    pub fn visible_result(&self, name: &str) -> Option<&ValidationResult> {
        let field = self.field(name)?;
        let result = self.results.get(name)?;

        if !self.is_shown(name) {
            return None;
        }

        let visible = match field.kind() {
            FieldKind::Text | FieldKind::Email => {
                self.options.validation_on_change || result.is_invalid()
            }
            FieldKind::Password | FieldKind::Checkbox => result.is_invalid(),
            FieldKind::PasswordConfirmation => true,
            FieldKind::Button | FieldKind::Submit | FieldKind::Gap => false,
        };

        visible.then_some(result)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("options", &self.options)
            .field("values", &self.values)
            .field("results", &self.results)
            .field("shown", &self.shown)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

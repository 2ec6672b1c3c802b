//! Per-form state: field values, submit button, and submission phase.

use super::outcome::SubmissionOutcome;
use super::transport::FormRequest;

/// Label shown on the submit button while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
}

/// The form's submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    original: Option<String>,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original: None,
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn begin_sending(&mut self) {
        let original = std::mem::replace(&mut self.label, SENDING_LABEL.to_string());
        self.original = Some(original);
        self.disabled = true;
    }

    fn restore(&mut self) {
        if let Some(original) = self.original.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

/// A form posting to an external endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    action: String,
    fields: Vec<(String, String)>,
    button: SubmitButton,
    phase: FormPhase,
}

impl FormState {
    /// Create a form with empty values for each of `field_names`
    pub fn new<I, S>(action: impl Into<String>, field_names: I, button_label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            action: action.into(),
            fields: field_names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
            button: SubmitButton::new(button_label),
            phase: FormPhase::Idle,
        }
    }

    /// Endpoint URL the form posts to
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    /// Field names and values in declaration order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of a field, empty if unknown
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    /// Set a field's value, adding the field if the form didn't declare it
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, current)) => *current = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Clear every field value
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// Enter the sending state and build the request to post.
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin(&mut self) -> Option<FormRequest> {
        if self.is_sending() {
            tracing::debug!(action = %self.action, "Submit ignored while sending");
            return None;
        }
        self.phase = FormPhase::Sending;
        self.button.begin_sending();
        Some(FormRequest {
            action: self.action.clone(),
            fields: self.fields.clone(),
        })
    }

    /// Leave the sending state. Clears the fields after a success; the
    /// button always gets its label back and is re-enabled.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) {
        if outcome.is_success() {
            self.reset();
        }
        self.button.restore();
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> FormState {
        FormState::new(
            "https://formspree.io/f/test",
            ["name", "email"],
            "Send Message",
        )
    }

    #[test]
    fn begin_relabels_and_disables() {
        let mut form = contact_form();
        form.set_field("email", "skipper@example.com");

        let request = form.begin().unwrap();
        assert_eq!(request.action, "https://formspree.io/f/test");
        assert_eq!(
            request.fields,
            vec![
                ("name".to_string(), String::new()),
                ("email".to_string(), "skipper@example.com".to_string())
            ]
        );
        assert_eq!(form.button().label(), SENDING_LABEL);
        assert!(form.button().is_disabled());
        assert!(form.is_sending());
    }

    #[test]
    fn second_begin_while_sending_is_ignored() {
        let mut form = contact_form();
        assert!(form.begin().is_some());
        assert!(form.begin().is_none());
    }

    #[test]
    fn success_clears_fields_and_restores_button() {
        let mut form = contact_form();
        form.set_field("name", "Ada");
        form.begin();
        form.complete(&SubmissionOutcome::Success);

        assert_eq!(form.field("name"), "");
        assert_eq!(form.button().label(), "Send Message");
        assert!(!form.button().is_disabled());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_restores_button() {
        let mut form = contact_form();
        form.set_field("name", "Ada");
        form.begin();
        form.complete(&SubmissionOutcome::FieldErrors(vec!["Required".into()]));

        assert_eq!(form.field("name"), "Ada");
        assert_eq!(form.button().label(), "Send Message");
        assert!(!form.button().is_disabled());
    }

    #[test]
    fn set_field_adds_undeclared_fields() {
        let mut form = contact_form();
        form.set_field("phone", "555");
        assert_eq!(form.field("phone"), "555");
        assert_eq!(form.field("missing"), "");
        assert_eq!(form.fields().len(), 3);
    }
}

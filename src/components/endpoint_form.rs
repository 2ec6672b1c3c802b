//! Endpoint Form Component
//!
//! A form posting to the configured form endpoint. Submission stays on
//! the page: the button shows "Sending..." while the request is in
//! flight, the outcome becomes a toast, and the fields are cleared after
//! a success.

use dioxus::prelude::*;
use harborline_core::form::{is_form_endpoint, submit};
use harborline_core::{FormState, SubmissionOutcome};
use harborline_ui::{Button, ButtonVariant, Input, TextArea};

use crate::context::{use_site_config, use_toasts, use_transport};

/// One field of an endpoint form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub multiline: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label: Some(label),
            input_type: "text",
            placeholder,
            required: true,
            multiline: false,
        }
    }

    pub const fn with_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub const fn unlabelled(mut self) -> Self {
        self.label = None;
        self
    }
}

/// A form posting to the endpoint: id, fields and button label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSpec {
    /// Element id of the form
    pub form_id: &'static str,
    /// Fields in display order
    pub fields: &'static [FieldSpec],
    /// Submit button label when idle
    pub button_label: &'static str,
}

#[derive(Props, Clone, PartialEq)]
pub struct EndpointFormProps {
    pub spec: &'static FormSpec,
    /// CSS classes for the form
    #[props(default)]
    pub class: Option<&'static str>,
}

#[component]
pub fn EndpointForm(props: EndpointFormProps) -> Element {
    let config = use_site_config();
    let toasts = use_toasts();
    let transport = use_transport();

    let action = config.contact_form_action.clone();
    let wired = is_form_endpoint(&action, &config.form_endpoint_prefix);
    let spec = props.spec;
    let fields = spec.fields;

    let mut form = use_signal(|| {
        FormState::new(
            action.clone(),
            fields.iter().map(|field| field.name),
            spec.button_label,
        )
    });

    let onsubmit = move |evt: FormEvent| {
        if !wired {
            return;
        }
        evt.prevent_default();

        let Some(request) = form.write().begin() else {
            return;
        };
        let transport = transport.clone();
        let toasts = toasts.clone();

        spawn(async move {
            let outcome = match &transport.0 {
                Some(transport) => submit(transport, &request).await,
                None => {
                    tracing::error!("Network error: no HTTP client available");
                    SubmissionOutcome::NetworkError("HTTP client unavailable".to_string())
                }
            };
            form.write().complete(&outcome);
            toasts.push(outcome.toast_message(), outcome.toast_kind());
        });
    };

    let state = form();

    rsx! {
        form {
            id: spec.form_id,
            class: props.class.unwrap_or(""),
            action: "{action}",
            method: "POST",
            onsubmit: onsubmit,

            for field in fields.iter().copied() {
                if field.multiline {
                    TextArea {
                        key: "{field.name}",
                        form_id: spec.form_id.to_string(),
                        name: field.name.to_string(),
                        value: state.field(field.name).to_string(),
                        oninput: move |value: String| form.write().set_field(field.name, value),
                        label: field.label.map(str::to_string),
                        placeholder: field.placeholder.to_string(),
                        required: field.required,
                        disabled: state.is_sending(),
                    }
                } else {
                    Input {
                        key: "{field.name}",
                        form_id: spec.form_id.to_string(),
                        name: field.name.to_string(),
                        value: state.field(field.name).to_string(),
                        oninput: move |value: String| form.write().set_field(field.name, value),
                        label: field.label.map(str::to_string),
                        input_type: field.input_type.to_string(),
                        placeholder: field.placeholder.to_string(),
                        required: field.required,
                        disabled: state.is_sending(),
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                disabled: state.button().is_disabled(),
                "{state.button().label()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CONTACT_FORM;

    #[test]
    fn contact_message_locks_while_sending() {
        let message = CONTACT_FORM
            .fields
            .iter()
            .find(|field| field.name == "message")
            .unwrap();
        assert!(message.multiline);

        let mut state = FormState::new(
            "https://formspree.io/f/test",
            CONTACT_FORM.fields.iter().map(|field| field.name),
            CONTACT_FORM.button_label,
        );
        assert!(!state.is_sending());
        state.begin().unwrap();
        // Inputs and text areas both take `disabled` from this
        assert!(state.is_sending());
    }

    #[test]
    fn field_builders() {
        let phone = FieldSpec::text("phone", "Phone", "Optional")
            .with_type("tel")
            .optional();
        assert_eq!(phone.input_type, "tel");
        assert!(!phone.required);
        assert_eq!(FieldSpec::text("email", "Email", "").unlabelled().label, None);
    }
}

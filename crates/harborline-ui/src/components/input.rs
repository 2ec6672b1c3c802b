//! Input Field Components
//!
//! Controlled text inputs and textareas for the contact and newsletter
//! forms. Values live in the page's form state; these only render them
//! and report edits.

use dioxus::prelude::*;

/// Element id for field `name` of form `form_id`
pub fn field_id(form_id: &str, name: &str) -> String {
    format!("{form_id}-{name}")
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Id of the enclosing form, used to build a unique element id
    pub form_id: String,
    /// Field name, posted as the multipart part name
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, tel, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         form_id: "contact".to_string(),
///         name: "email".to_string(),
///         value: form().field("email").to_string(),
///         oninput: move |value| form.write().set_field("email", value),
///         input_type: "email".to_string(),
///         placeholder: "you@example.com".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(&props.form_id, &props.name);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Id of the enclosing form
    pub form_id: String,
    /// Field name
    pub name: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id(&props.form_id, &props.name);

    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                name: "{props.name}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

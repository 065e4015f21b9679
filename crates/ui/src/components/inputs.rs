//! # Input Components
//!
//! Form input used by the sign-in page.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-gray-700",
                    "{label}"
                }
            }

            input {
                class: INPUT_CLASS,
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Styling
// ============================================================================

/// Classes shared by every form field
const INPUT_CLASS: &str = "w-full px-4 py-2 mt-2 text-gray-700 border rounded-lg \
                           focus:outline-none focus:ring-2 focus:ring-yellow-500";

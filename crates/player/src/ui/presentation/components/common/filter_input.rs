//! Filter input - single-line input used by every detail filter field
//!
//! In numeric mode anything but ASCII digits is stripped before the value
//! reaches `on_change`, so callers only ever see `""` or a digit string.

use dioxus::prelude::*;
use mabiauction_domain::digits_only;

/// What kind of value the input accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Number,
}

impl InputKind {
    fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }

    fn input_mode(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "numeric",
        }
    }

    /// Normalize raw input for this kind.
    pub fn sanitize(&self, raw: String) -> String {
        match self {
            InputKind::Text => raw,
            InputKind::Number => digits_only(&raw),
        }
    }
}

/// Props for the FilterInput component
#[derive(Props, Clone, PartialEq)]
pub struct FilterInputProps {
    #[props(default)]
    pub kind: InputKind,
    #[props(into)]
    pub placeholder: String,
    /// Current value (`""` when empty)
    pub value: String,
    pub on_change: EventHandler<String>,
    /// Extra classes (width helpers such as `w-1/2`)
    #[props(default, into)]
    pub class: String,
}

#[component]
pub fn FilterInput(props: FilterInputProps) -> Element {
    let kind = props.kind;
    let on_change = props.on_change;

    rsx! {
        input {
            class: "border border-slate-300 rounded px-2 py-1 mb-2 {props.class}",
            r#type: kind.html_type(),
            inputmode: kind.input_mode(),
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oninput: move |e| on_change.call(kind.sanitize(e.value())),
        }
    }
}

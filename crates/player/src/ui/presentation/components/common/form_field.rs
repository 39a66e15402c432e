//! Labelled form row.

use dioxus::prelude::*;

#[component]
pub fn FormField(#[props(into)] label: String, children: Element) -> Element {
    rsx! {
        div {
            label {
                class: "block text-sm mb-1 font-semibold",
                "{label}"
            }
            {children}
        }
    }
}

//! Sewing option list - one to three option inputs with add/remove buttons
//!
//! The "-" button is only offered while more than one entry exists and the
//! "+" button only while fewer than three exist; the list itself rejects
//! anything else.

use dioxus::prelude::*;
use mabiauction_domain::DetailFilterForm;

use crate::presentation::components::common::{FilterInput, FormField};

#[component]
pub fn SewingOptionList(form: Signal<DetailFilterForm>) -> Element {
    let mut form = form;
    let (options, can_add, can_remove) = {
        let state = form.read();
        let sewing = state.sewing();
        let options: Vec<String> = sewing.iter().map(str::to_string).collect();
        (options, sewing.can_add(), sewing.can_remove())
    };

    rsx! {
        FormField {
            label: "세공 옵션",
            div {
                for (index, option) in options.into_iter().enumerate() {
                    div { key: "{index}", class: "w-full",
                        div { class: "flex gap-2 justify-between",
                            FilterInput {
                                placeholder: format!("옵션 {}", index + 1),
                                value: option,
                                class: "flex-1",
                                on_change: move |text: String| {
                                    if let Err(e) = form.write().sewing_mut().set(index, text) {
                                        tracing::warn!(index, error = %e, "Rejected sewing option edit");
                                    }
                                },
                            }
                            if can_remove {
                                button {
                                    class: "text-white text-base w-8 mb-2 rounded bg-red-400",
                                    onclick: move |_| {
                                        if let Err(e) = form.write().sewing_mut().remove(index) {
                                            tracing::warn!(index, error = %e, "Rejected sewing option removal");
                                        }
                                    },
                                    "-"
                                }
                            }
                        }
                    }
                }
                if can_add {
                    button {
                        class: "text-white text-base w-8 h-8 mb-2 rounded bg-blue-400",
                        onclick: move |_| {
                            if let Err(e) = form.write().sewing_mut().push() {
                                tracing::warn!(error = %e, "Rejected sewing option add");
                            }
                        },
                        "+"
                    }
                }
            }
        }
    }
}

//! Color part row - R/G/B inputs of one dye slot on a single line.

use dioxus::prelude::*;
use mabiauction_domain::{ColorChannel, ColorSlot, DetailFilterForm};

use crate::presentation::components::common::{FilterInput, FormField, InputKind};

#[component]
pub fn ColorPartRow(slot: ColorSlot, form: Signal<DetailFilterForm>) -> Element {
    let mut form = form;
    let triplet = form.read().color(slot).clone();

    rsx! {
        FormField {
            label: slot.label(),
            div { class: "flex gap-2",
                for channel in ColorChannel::ALL {
                    FilterInput {
                        key: "{channel}",
                        kind: InputKind::Number,
                        placeholder: channel.letter(),
                        value: triplet.get(channel).to_string(),
                        class: "w-1/3",
                        on_change: move |text: String| form.write().set_color(slot, channel, &text),
                    }
                }
            }
        }
    }
}

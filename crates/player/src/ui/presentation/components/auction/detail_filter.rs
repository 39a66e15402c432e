//! Detail Filter (상세 검색) - multi-field auction search form
//!
//! All field values live in one [`DetailFilterForm`] signal. Which stat rows
//! are shown depends on whether the selected category is armor-like; rows
//! hidden by a category switch keep their values. Pressing "적용" compacts the
//! visible, populated fields into a [`FilterCriteria`] and passes it to
//! `on_filter_change`.

use dioxus::prelude::*;
use mabiauction_domain::filter::schema::rows_in;
use mabiauction_domain::{
    Category, CategoryMode, ColorSlot, CriteriaKey, DetailFilterForm, FilterCriteria, Section,
    StatLayout, StatRow, UpgradeKind,
};

use super::color_part_row::ColorPartRow;
use super::sewing_option_list::SewingOptionList;
use crate::presentation::components::common::{FilterInput, FormField, InputKind};

/// Props for the DetailFilter component
#[derive(Props, Clone, PartialEq)]
pub struct DetailFilterProps {
    /// Currently selected auction category
    #[props(default)]
    pub selected_category: Option<Category>,
    /// Receives the compacted criteria when the user applies the filter
    #[props(default)]
    pub on_filter_change: Option<EventHandler<FilterCriteria>>,
}

#[component]
pub fn DetailFilter(props: DetailFilterProps) -> Element {
    let form = use_signal(DetailFilterForm::new);
    let mode = CategoryMode::of(props.selected_category.as_ref());

    let handle_apply = {
        let selected_category = props.selected_category.clone();
        let on_filter_change = props.on_filter_change;

        move |_: MouseEvent| {
            let listener = on_filter_change.map(|handler| {
                move |criteria: FilterCriteria| {
                    tracing::debug!(
                        mode = ?mode,
                        criteria = criteria.len(),
                        "Applying detail filter"
                    );
                    handler.call(criteria);
                }
            });

            if !form.read().apply(selected_category.as_ref(), listener) {
                tracing::trace!("No filter listener attached; skipping notification");
            }
        }
    };

    rsx! {
        div {
            h4 { class: "font-bold mb-4", "상세 검색" }

            for row in rows_in(Section::Stats, mode) {
                StatRowField { key: "{row.label}", row, form }
            }

            // 인챈트
            FormField {
                label: "인챈트",
                div { class: "flex gap-2",
                    TextInput { form, field: CriteriaKey::EnchantPrefix, placeholder: "접두", class: "w-1/2" }
                    TextInput { form, field: CriteriaKey::EnchantSuffix, placeholder: "접미", class: "w-1/2" }
                }
            }

            SpecialUpgradeField { form }

            for slot in ColorSlot::ALL {
                ColorPartRow { key: "{slot}", slot, form }
            }

            for row in rows_in(Section::Sewing, mode) {
                StatRowField { key: "{row.label}", row, form }
            }

            SewingOptionList { form }

            // 세트 효과
            FormField {
                label: "세트 효과",
                TextInput { form, field: CriteriaKey::SetEffect, placeholder: "예: 스매시" }
            }

            for row in rows_in(Section::Exclusive, mode) {
                StatRowField { key: "{row.label}", row, form }
            }

            button {
                class: "bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded w-full",
                onclick: handle_apply,
                "적용"
            }
        }
    }
}

/// One schema row: a single input or a min/max pair.
#[component]
fn StatRowField(row: &'static StatRow, form: Signal<DetailFilterForm>) -> Element {
    rsx! {
        FormField {
            label: row.label,
            {
                match row.layout {
                    StatLayout::Single { key, placeholder } => rsx! {
                        StatInput { form, field: key, placeholder }
                    },
                    StatLayout::Range { min, max } => rsx! {
                        div { class: "flex gap-2",
                            StatInput { form, field: min, placeholder: "최소", class: "w-1/2" }
                            StatInput { form, field: max, placeholder: "최대", class: "w-1/2" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn StatInput(
    form: Signal<DetailFilterForm>,
    field: CriteriaKey,
    placeholder: &'static str,
    #[props(default)] class: &'static str,
) -> Element {
    let mut form = form;
    let value = form.read().number_text(field);

    rsx! {
        FilterInput {
            kind: InputKind::Number,
            placeholder,
            value,
            class,
            on_change: move |text: String| {
                if let Err(e) = form.write().set_number(field, &text) {
                    tracing::warn!(field = %field, error = %e, "Rejected stat input");
                }
            },
        }
    }
}

#[component]
fn TextInput(
    form: Signal<DetailFilterForm>,
    field: CriteriaKey,
    placeholder: &'static str,
    #[props(default)] class: &'static str,
) -> Element {
    let mut form = form;
    let value = form.read().text(field).to_string();

    rsx! {
        FilterInput {
            placeholder,
            value,
            class,
            on_change: move |text: String| {
                if let Err(e) = form.write().set_text(field, &text) {
                    tracing::warn!(field = %field, error = %e, "Rejected text input");
                }
            },
        }
    }
}

/// Tier selector plus the level input of the active tier.
#[component]
fn SpecialUpgradeField(form: Signal<DetailFilterForm>) -> Element {
    let mut form = form;
    let active = form.read().upgrade().active();
    let level = form.read().upgrade_level_text(active);

    rsx! {
        div {
            label {
                r#for: "specialUpgradeType",
                class: "block text-sm mb-1 font-semibold",
                "특별 개조 타입 선택"
            }
            select {
                id: "specialUpgradeType",
                class: "border border-slate-300 rounded px-2 py-1 w-full mb-2",
                value: "{active}",
                onchange: move |e| match e.value().parse::<UpgradeKind>() {
                    Ok(kind) => form.write().set_upgrade_kind(kind),
                    Err(err) => tracing::warn!(error = %err, "Unknown upgrade kind selected"),
                },
                for kind in UpgradeKind::ALL {
                    option { value: "{kind}", selected: kind == active, "{kind.label()}" }
                }
            }
        }
        FormField {
            label: active.label(),
            FilterInput {
                kind: InputKind::Number,
                placeholder: "0 ~ 7",
                value: level,
                on_change: move |text: String| form.write().set_upgrade_level(active, &text),
            }
        }
    }
}

//! Auction view - category selector, detail filter, and listing details
//!
//! The applied criteria are shown as JSON next to the bundled sample
//! listings; there is no search backend behind this view.

use dioxus::prelude::*;
use mabiauction_domain::{Category, FilterCriteria};

use crate::infrastructure::sample_listings::sample_listings;
use crate::presentation::components::auction::{DetailFilter, ItemOptionsPane};
use crate::presentation::components::common::FormField;
use crate::presentation::helpers::criteria_preview;
use crate::ShellKind;

#[component]
pub fn AuctionView() -> Element {
    let shell = use_context::<ShellKind>();
    let mut selected_category: Signal<Option<Category>> = use_signal(|| None);
    let mut applied: Signal<Option<FilterCriteria>> = use_signal(|| None);

    // Parsed once per mount; the error is kept as text so the hook value stays Clone.
    let listings = use_hook(|| {
        sample_listings().map_err(|e| {
            tracing::error!(error = %e, "Failed to load sample listings");
            e.to_string()
        })
    });

    let on_filter_change = use_callback(move |criteria: FilterCriteria| {
        tracing::info!(criteria = criteria.len(), "Detail filter applied");
        applied.set(Some(criteria));
    });

    let applied_text = applied
        .read()
        .as_ref()
        .map(criteria_preview)
        .unwrap_or_else(|| "적용된 필터가 없습니다.".to_string());

    let is_mobile = shell.is_mobile();
    let layout_class = if is_mobile {
        "flex flex-col gap-6 p-4"
    } else {
        "flex gap-6 p-4"
    };
    let filter_column_class = if is_mobile { "w-full" } else { "w-1/3" };

    rsx! {
        div { class: "{layout_class}",
            div { class: "{filter_column_class} overflow-y-auto",
                FormField {
                    label: "카테고리",
                    select {
                        class: "border border-slate-300 rounded px-2 py-1 w-full mb-4",
                        onchange: move |e| {
                            let category = Category::find(&e.value());
                            tracing::debug!(category = ?category.as_ref().map(|c| &c.label), "Category selected");
                            selected_category.set(category);
                        },
                        option { value: "", "전체" }
                        for category in Category::catalog() {
                            option { key: "{category.id}", value: "{category.id}", "{category.label}" }
                        }
                    }
                }

                DetailFilter {
                    selected_category: selected_category.read().clone(),
                    on_filter_change: Some(on_filter_change),
                }
            }

            div { class: "flex-1",
                h3 { class: "font-bold mb-2", "적용된 필터" }
                pre { class: "bg-slate-100 p-4 rounded whitespace-pre", "{applied_text}" }

                {
                    match &listings {
                        Ok(items) => rsx! {
                            for (idx, item) in items.iter().enumerate() {
                                div { key: "{idx}", class: "mt-4",
                                    if is_mobile {
                                        h2 { class: "text-lg font-bold mb-2", "{item.item_display_name}" }
                                    }
                                    ItemOptionsPane { item: item.clone(), is_mobile }
                                }
                            }
                        },
                        Err(message) => rsx! {
                            p { class: "mt-4", "{message}" }
                        },
                    }
                }
            }
        }
    }
}

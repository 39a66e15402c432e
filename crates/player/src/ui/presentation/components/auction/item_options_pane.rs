//! Item options pane - read-only view of one auction listing
//!
//! On desktop the header (name, unit price, expiry) is shown; on mobile the
//! surrounding card already shows it, so only the option list is rendered.

use dioxus::prelude::*;
use mabiauction_domain::AuctionItem;

use crate::presentation::helpers::{format_expiry, format_gold};

#[component]
pub fn ItemOptionsPane(item: AuctionItem, #[props(default)] is_mobile: bool) -> Element {
    rsx! {
        div {
            if !is_mobile {
                h2 { class: "text-lg font-bold mb-2", "{item.item_display_name}" }
                p { "{format_gold(item.auction_price_per_unit)} Gold" }
                p { "만료 시각: {format_expiry(&item.date_auction_expire)}" }
            }

            if item.has_options() {
                div { class: "mt-4",
                    h3 { class: "font-bold text-sm mb-1", "옵션:" }
                    ul { class: "text-md",
                        for (idx, opt) in item.item_option.iter().enumerate() {
                            li { key: "{idx}",
                                strong { "{opt.option_type}" }
                                "{opt.detail_text()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

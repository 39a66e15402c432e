//! Auction marketplace components: the detail filter form and the item
//! option viewer.

mod color_part_row;
mod detail_filter;
mod item_options_pane;
mod sewing_option_list;

pub use detail_filter::{DetailFilter, DetailFilterProps};
pub use item_options_pane::ItemOptionsPane;

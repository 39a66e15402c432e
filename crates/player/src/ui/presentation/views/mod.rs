//! Top-level pages.

mod auction_view;

pub use auction_view::AuctionView;

//! MabiAuction domain crate.
//!
//! Vocabulary shared by the auction UI: categories, auction listings, and the
//! detail-filter form state that compacts into a sparse [`FilterCriteria`].

pub mod auction_item;
pub mod category;
pub mod error;
pub mod filter;

pub use auction_item::{AuctionItem, ItemOption};
pub use category::{Category, CategoryMode, ARMOR_CATEGORY_LABELS, CATEGORY_CATALOG};
pub use error::DomainError;
pub use filter::{
    digits_only, parse_digits, ColorChannel, ColorSlot, ColorTriplet, CriteriaKey, CriteriaValue,
    DetailFilterForm, FilterCriteria, Section, SewingOptions, SpecialUpgrade, SpecialUpgradeDraft,
    StatLayout, StatRow, UpgradeKind, ValueKind, Visibility, STAT_ROWS, TEXT_FIELDS,
};

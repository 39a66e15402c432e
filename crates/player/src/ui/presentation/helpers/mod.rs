//! Pure presentation helpers (no Dioxus dependency).

pub mod display_format;

pub use display_format::{criteria_preview, format_expiry, format_expiry_in, format_gold};

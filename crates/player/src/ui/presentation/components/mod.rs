//! Reusable Dioxus components.

pub mod auction;
pub mod common;

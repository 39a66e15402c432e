//! Auction search player crate.
//!
//! This crate contains the Dioxus UI and the bundled sample data it renders.
//! Desktop and web targets are selected via compile-time `cfg`.

pub mod infrastructure;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::ShellKind;

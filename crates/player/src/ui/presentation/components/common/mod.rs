//! Common reusable UI components.
//!
//! Shared form controls used across the auction views.

mod filter_input;
pub use filter_input::{FilterInput, InputKind};

mod form_field;
pub use form_field::FormField;

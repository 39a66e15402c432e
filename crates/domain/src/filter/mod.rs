//! Detail filter: form state, schema, and the sparse criteria it emits.

mod color;
mod criteria;
mod form;
mod numeric;
pub mod schema;
mod sewing;
mod special_upgrade;

pub use color::{ColorChannel, ColorSlot, ColorTriplet};
pub use criteria::{CriteriaKey, CriteriaValue, FilterCriteria, ValueKind};
pub use form::DetailFilterForm;
pub use numeric::{digits_only, parse_digits};
pub use schema::{Section, StatLayout, StatRow, Visibility, STAT_ROWS, TEXT_FIELDS};
pub use sewing::SewingOptions;
pub use special_upgrade::{SpecialUpgrade, SpecialUpgradeDraft, UpgradeKind};

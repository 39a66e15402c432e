//! Detail filter form state
//!
//! One structured record holding every local field of the detail filter.
//! The form never clears itself: values survive category-mode switches and
//! apply calls, and [`DetailFilterForm::to_criteria`] decides per mode which
//! of them are emitted.

use std::collections::BTreeMap;

use super::color::{ColorChannel, ColorSlot, ColorTriplet};
use super::criteria::{CriteriaKey, FilterCriteria};
use super::numeric::parse_digits;
use super::schema::{self, TEXT_FIELDS};
use super::sewing::SewingOptions;
use super::special_upgrade::{SpecialUpgradeDraft, UpgradeKind};
use crate::category::{Category, CategoryMode};
use crate::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFilterForm {
    /// Filled-in stat values; an absent key is an empty input.
    numbers: BTreeMap<CriteriaKey, u64>,
    texts: BTreeMap<CriteriaKey, String>,
    upgrade: SpecialUpgradeDraft,
    colors: [ColorTriplet; 6],
    sewing: SewingOptions,
}

impl DetailFilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Stat rows
    // =========================================================================

    /// Store the input text of a stat field. Empty text clears the field.
    pub fn set_number(&mut self, key: CriteriaKey, text: &str) -> Result<(), DomainError> {
        if schema::row_for(key).is_none() {
            return Err(DomainError::validation(format!(
                "{} is not a stat field",
                key
            )));
        }
        match parse_digits(text) {
            Some(value) => self.numbers.insert(key, value),
            None => self.numbers.remove(&key),
        };
        Ok(())
    }

    pub fn number(&self, key: CriteriaKey) -> Option<u64> {
        self.numbers.get(&key).copied()
    }

    /// Input text for a stat field (`""` when empty).
    pub fn number_text(&self, key: CriteriaKey) -> String {
        self.number(key).map(|n| n.to_string()).unwrap_or_default()
    }

    // =========================================================================
    // Free text
    // =========================================================================

    pub fn set_text(&mut self, key: CriteriaKey, text: &str) -> Result<(), DomainError> {
        if !schema::is_text_field(key) {
            return Err(DomainError::validation(format!(
                "{} is not a text field",
                key
            )));
        }
        self.texts.insert(key, text.to_string());
        Ok(())
    }

    pub fn text(&self, key: CriteriaKey) -> &str {
        self.texts.get(&key).map(String::as_str).unwrap_or_default()
    }

    // =========================================================================
    // Special upgrade
    // =========================================================================

    pub fn upgrade(&self) -> &SpecialUpgradeDraft {
        &self.upgrade
    }

    pub fn set_upgrade_kind(&mut self, kind: UpgradeKind) {
        self.upgrade.select(kind);
    }

    pub fn set_upgrade_level(&mut self, kind: UpgradeKind, text: &str) {
        self.upgrade.set_level(kind, parse_digits(text));
    }

    pub fn upgrade_level_text(&self, kind: UpgradeKind) -> String {
        self.upgrade
            .level(kind)
            .map(|n| n.to_string())
            .unwrap_or_default()
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn color(&self, slot: ColorSlot) -> &ColorTriplet {
        &self.colors[slot.index()]
    }

    pub fn set_color(&mut self, slot: ColorSlot, channel: ColorChannel, text: &str) {
        self.colors[slot.index()].set(channel, text);
    }

    // =========================================================================
    // Sewing options
    // =========================================================================

    pub fn sewing(&self) -> &SewingOptions {
        &self.sewing
    }

    pub fn sewing_mut(&mut self) -> &mut SewingOptions {
        &mut self.sewing
    }

    // =========================================================================
    // Emission
    // =========================================================================

    /// Compact the populated fields visible in `mode` into a sparse record.
    pub fn to_criteria(&self, mode: CategoryMode) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();

        for key in schema::visible_keys(mode) {
            if let Some(value) = self.number(key) {
                criteria.insert_number(key, value);
            }
        }

        for key in TEXT_FIELDS {
            let text = self.text(key);
            if !is_blank(text) {
                criteria.insert_text(key, text);
            }
        }

        if let Some(upgrade) = self.upgrade.selected() {
            criteria.insert_number(upgrade.criteria_key(), upgrade.level());
        }

        for slot in ColorSlot::ALL {
            let triplet = self.color(slot);
            for channel in ColorChannel::ALL {
                if let Some(value) = triplet.value(channel) {
                    criteria.insert_numbers(CriteriaKey::color(slot, channel), vec![value]);
                }
            }
        }

        for (index, option) in self.sewing.iter().enumerate() {
            if is_blank(option) {
                continue;
            }
            if let Some(key) = CriteriaKey::sewing_option(index) {
                criteria.insert_text(key, option);
            }
        }

        criteria
    }

    /// Build the record for the selected category and hand it to `listener`.
    ///
    /// Returns whether a listener received it. Local state is left untouched.
    pub fn apply<L>(&self, category: Option<&Category>, listener: Option<L>) -> bool
    where
        L: FnOnce(FilterCriteria),
    {
        let Some(listener) = listener else {
            return false;
        };
        listener(self.to_criteria(CategoryMode::of(category)));
        true
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

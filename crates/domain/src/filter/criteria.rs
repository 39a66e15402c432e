//! Sparse filter criteria record
//!
//! The record handed to the filter-change listener. Every key is optional;
//! an absent key means "unconstrained". Serializes as a flat JSON object with
//! camelCase field names, e.g. `{"minAttack": 10, "colorPartAR": [255]}`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::{ColorChannel, ColorSlot};
use super::special_upgrade::UpgradeKind;
use crate::error::DomainError;

/// Every field name the criteria record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriteriaKey {
    // Weapon stats
    MinAttack,
    MaxAttack,
    MinWoundRate,
    MaxWoundRate,
    MinCritical,
    MaxCritical,
    MinBalance,
    MaxBalance,
    // Armor stats
    Defense,
    Protection,
    MagicDefense,
    MagicProtection,
    // Common
    MinDurability,
    MaxDurability,
    EnchantPrefix,
    EnchantSuffix,
    MinErg,
    MaxErg,
    SpecialUpgradeR,
    SpecialUpgradeS,
    ColorPartAR,
    ColorPartAG,
    ColorPartAB,
    ColorPartBR,
    ColorPartBG,
    ColorPartBB,
    ColorPartCR,
    ColorPartCG,
    ColorPartCB,
    ColorPartDR,
    ColorPartDG,
    ColorPartDB,
    ColorPartER,
    ColorPartEG,
    ColorPartEB,
    ColorPartFR,
    ColorPartFG,
    ColorPartFB,
    SewingRank,
    SewingOption1,
    SewingOption2,
    SewingOption3,
    SetEffect,
    RemainingExclusive,
}

/// The JSON shape a key's value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
    Numbers,
}

impl CriteriaKey {
    pub const ALL: [CriteriaKey; 44] = [
        CriteriaKey::MinAttack,
        CriteriaKey::MaxAttack,
        CriteriaKey::MinWoundRate,
        CriteriaKey::MaxWoundRate,
        CriteriaKey::MinCritical,
        CriteriaKey::MaxCritical,
        CriteriaKey::MinBalance,
        CriteriaKey::MaxBalance,
        CriteriaKey::Defense,
        CriteriaKey::Protection,
        CriteriaKey::MagicDefense,
        CriteriaKey::MagicProtection,
        CriteriaKey::MinDurability,
        CriteriaKey::MaxDurability,
        CriteriaKey::EnchantPrefix,
        CriteriaKey::EnchantSuffix,
        CriteriaKey::MinErg,
        CriteriaKey::MaxErg,
        CriteriaKey::SpecialUpgradeR,
        CriteriaKey::SpecialUpgradeS,
        CriteriaKey::ColorPartAR,
        CriteriaKey::ColorPartAG,
        CriteriaKey::ColorPartAB,
        CriteriaKey::ColorPartBR,
        CriteriaKey::ColorPartBG,
        CriteriaKey::ColorPartBB,
        CriteriaKey::ColorPartCR,
        CriteriaKey::ColorPartCG,
        CriteriaKey::ColorPartCB,
        CriteriaKey::ColorPartDR,
        CriteriaKey::ColorPartDG,
        CriteriaKey::ColorPartDB,
        CriteriaKey::ColorPartER,
        CriteriaKey::ColorPartEG,
        CriteriaKey::ColorPartEB,
        CriteriaKey::ColorPartFR,
        CriteriaKey::ColorPartFG,
        CriteriaKey::ColorPartFB,
        CriteriaKey::SewingRank,
        CriteriaKey::SewingOption1,
        CriteriaKey::SewingOption2,
        CriteriaKey::SewingOption3,
        CriteriaKey::SetEffect,
        CriteriaKey::RemainingExclusive,
    ];

    /// Wire name of the key (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            CriteriaKey::MinAttack => "minAttack",
            CriteriaKey::MaxAttack => "maxAttack",
            CriteriaKey::MinWoundRate => "minWoundRate",
            CriteriaKey::MaxWoundRate => "maxWoundRate",
            CriteriaKey::MinCritical => "minCritical",
            CriteriaKey::MaxCritical => "maxCritical",
            CriteriaKey::MinBalance => "minBalance",
            CriteriaKey::MaxBalance => "maxBalance",
            CriteriaKey::Defense => "defense",
            CriteriaKey::Protection => "protection",
            CriteriaKey::MagicDefense => "magicDefense",
            CriteriaKey::MagicProtection => "magicProtection",
            CriteriaKey::MinDurability => "minDurability",
            CriteriaKey::MaxDurability => "maxDurability",
            CriteriaKey::EnchantPrefix => "enchantPrefix",
            CriteriaKey::EnchantSuffix => "enchantSuffix",
            CriteriaKey::MinErg => "minErg",
            CriteriaKey::MaxErg => "maxErg",
            CriteriaKey::SpecialUpgradeR => "specialUpgradeR",
            CriteriaKey::SpecialUpgradeS => "specialUpgradeS",
            CriteriaKey::ColorPartAR => "colorPartAR",
            CriteriaKey::ColorPartAG => "colorPartAG",
            CriteriaKey::ColorPartAB => "colorPartAB",
            CriteriaKey::ColorPartBR => "colorPartBR",
            CriteriaKey::ColorPartBG => "colorPartBG",
            CriteriaKey::ColorPartBB => "colorPartBB",
            CriteriaKey::ColorPartCR => "colorPartCR",
            CriteriaKey::ColorPartCG => "colorPartCG",
            CriteriaKey::ColorPartCB => "colorPartCB",
            CriteriaKey::ColorPartDR => "colorPartDR",
            CriteriaKey::ColorPartDG => "colorPartDG",
            CriteriaKey::ColorPartDB => "colorPartDB",
            CriteriaKey::ColorPartER => "colorPartER",
            CriteriaKey::ColorPartEG => "colorPartEG",
            CriteriaKey::ColorPartEB => "colorPartEB",
            CriteriaKey::ColorPartFR => "colorPartFR",
            CriteriaKey::ColorPartFG => "colorPartFG",
            CriteriaKey::ColorPartFB => "colorPartFB",
            CriteriaKey::SewingRank => "sewingRank",
            CriteriaKey::SewingOption1 => "sewingOption1",
            CriteriaKey::SewingOption2 => "sewingOption2",
            CriteriaKey::SewingOption3 => "sewingOption3",
            CriteriaKey::SetEffect => "setEffect",
            CriteriaKey::RemainingExclusive => "remainingExclusive",
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            CriteriaKey::EnchantPrefix
            | CriteriaKey::EnchantSuffix
            | CriteriaKey::SewingOption1
            | CriteriaKey::SewingOption2
            | CriteriaKey::SewingOption3
            | CriteriaKey::SetEffect => ValueKind::Text,
            key if key.color_component().is_some() => ValueKind::Numbers,
            _ => ValueKind::Number,
        }
    }

    /// Key for one channel of one color slot.
    pub fn color(slot: ColorSlot, channel: ColorChannel) -> CriteriaKey {
        use ColorChannel::{B, G, R};
        use ColorSlot::{A, B as SlotB, C, D, E, F};

        match (slot, channel) {
            (A, R) => CriteriaKey::ColorPartAR,
            (A, G) => CriteriaKey::ColorPartAG,
            (A, B) => CriteriaKey::ColorPartAB,
            (SlotB, R) => CriteriaKey::ColorPartBR,
            (SlotB, G) => CriteriaKey::ColorPartBG,
            (SlotB, B) => CriteriaKey::ColorPartBB,
            (C, R) => CriteriaKey::ColorPartCR,
            (C, G) => CriteriaKey::ColorPartCG,
            (C, B) => CriteriaKey::ColorPartCB,
            (D, R) => CriteriaKey::ColorPartDR,
            (D, G) => CriteriaKey::ColorPartDG,
            (D, B) => CriteriaKey::ColorPartDB,
            (E, R) => CriteriaKey::ColorPartER,
            (E, G) => CriteriaKey::ColorPartEG,
            (E, B) => CriteriaKey::ColorPartEB,
            (F, R) => CriteriaKey::ColorPartFR,
            (F, G) => CriteriaKey::ColorPartFG,
            (F, B) => CriteriaKey::ColorPartFB,
        }
    }

    /// Inverse of [`CriteriaKey::color`].
    pub fn color_component(&self) -> Option<(ColorSlot, ColorChannel)> {
        ColorSlot::ALL.into_iter().find_map(|slot| {
            ColorChannel::ALL
                .into_iter()
                .find(|channel| CriteriaKey::color(slot, *channel) == *self)
                .map(|channel| (slot, channel))
        })
    }

    /// Positional sewing option key (`index` is zero-based).
    pub fn sewing_option(index: usize) -> Option<CriteriaKey> {
        match index {
            0 => Some(CriteriaKey::SewingOption1),
            1 => Some(CriteriaKey::SewingOption2),
            2 => Some(CriteriaKey::SewingOption3),
            _ => None,
        }
    }

    pub fn special_upgrade(kind: UpgradeKind) -> CriteriaKey {
        match kind {
            UpgradeKind::R => CriteriaKey::SpecialUpgradeR,
            UpgradeKind::S => CriteriaKey::SpecialUpgradeS,
        }
    }
}

impl fmt::Display for CriteriaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriteriaKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CriteriaKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown criteria key: {}", s)))
    }
}

/// A criterion value: a number, free text, or a short list of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriteriaValue {
    Number(u64),
    Text(String),
    Numbers(Vec<u64>),
}

impl CriteriaValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            CriteriaValue::Number(_) => ValueKind::Number,
            CriteriaValue::Text(_) => ValueKind::Text,
            CriteriaValue::Numbers(_) => ValueKind::Numbers,
        }
    }
}

/// Sparse mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria(BTreeMap<CriteriaKey, CriteriaValue>);

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: CriteriaKey, value: CriteriaValue) {
        self.0.insert(key, value);
    }

    pub fn insert_number(&mut self, key: CriteriaKey, value: u64) {
        self.insert(key, CriteriaValue::Number(value));
    }

    pub fn insert_text(&mut self, key: CriteriaKey, value: impl Into<String>) {
        self.insert(key, CriteriaValue::Text(value.into()));
    }

    pub fn insert_numbers(&mut self, key: CriteriaKey, values: Vec<u64>) {
        self.insert(key, CriteriaValue::Numbers(values));
    }

    pub fn get(&self, key: CriteriaKey) -> Option<&CriteriaValue> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: CriteriaKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn number(&self, key: CriteriaKey) -> Option<u64> {
        match self.get(key) {
            Some(CriteriaValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, key: CriteriaKey) -> Option<&str> {
        match self.get(key) {
            Some(CriteriaValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn numbers(&self, key: CriteriaKey) -> Option<&[u64]> {
        match self.get(key) {
            Some(CriteriaValue::Numbers(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = CriteriaKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CriteriaKey, &CriteriaValue)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(CriteriaKey, CriteriaValue)> for FilterCriteria {
    fn from_iter<I: IntoIterator<Item = (CriteriaKey, CriteriaValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod key_tests {
        use super::*;

        #[test]
        fn wire_names_match_serde_names() {
            for key in CriteriaKey::ALL {
                let json = serde_json::to_string(&key).expect("key serializes");
                assert_eq!(json, format!("\"{}\"", key.as_str()));
            }
        }

        #[test]
        fn from_str_round_trips_every_key() {
            for key in CriteriaKey::ALL {
                assert_eq!(key.as_str().parse::<CriteriaKey>(), Ok(key));
            }
        }

        #[test]
        fn unknown_key_is_a_parse_error() {
            let err = "minFoo".parse::<CriteriaKey>().expect_err("not a key");
            assert!(matches!(err, DomainError::Parse(_)));
        }

        #[test]
        fn color_keys_map_back_to_their_component() {
            for slot in ColorSlot::ALL {
                for channel in ColorChannel::ALL {
                    let key = CriteriaKey::color(slot, channel);
                    assert_eq!(key.color_component(), Some((slot, channel)));
                    assert_eq!(key.value_kind(), ValueKind::Numbers);
                }
            }
            assert_eq!(CriteriaKey::Defense.color_component(), None);
        }

        #[test]
        fn color_key_name_combines_slot_and_channel() {
            assert_eq!(
                CriteriaKey::color(ColorSlot::C, ColorChannel::G).as_str(),
                "colorPartCG"
            );
        }

        #[test]
        fn sewing_option_keys_are_positional() {
            assert_eq!(CriteriaKey::sewing_option(0), Some(CriteriaKey::SewingOption1));
            assert_eq!(CriteriaKey::sewing_option(2), Some(CriteriaKey::SewingOption3));
            assert_eq!(CriteriaKey::sewing_option(3), None);
        }

        #[test]
        fn value_kinds() {
            assert_eq!(CriteriaKey::MinAttack.value_kind(), ValueKind::Number);
            assert_eq!(CriteriaKey::SpecialUpgradeS.value_kind(), ValueKind::Number);
            assert_eq!(CriteriaKey::EnchantSuffix.value_kind(), ValueKind::Text);
            assert_eq!(CriteriaKey::SewingOption2.value_kind(), ValueKind::Text);
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn empty_record_is_an_empty_object() {
            let json = serde_json::to_value(FilterCriteria::new()).expect("serializes");
            assert_eq!(json, serde_json::json!({}));
        }

        #[test]
        fn values_serialize_as_plain_json() {
            let mut criteria = FilterCriteria::new();
            criteria.insert_number(CriteriaKey::MinAttack, 10);
            criteria.insert_text(CriteriaKey::EnchantPrefix, "창백한");
            criteria.insert_numbers(CriteriaKey::ColorPartAR, vec![255]);

            let json = serde_json::to_value(&criteria).expect("serializes");
            assert_eq!(
                json,
                serde_json::json!({
                    "minAttack": 10,
                    "enchantPrefix": "창백한",
                    "colorPartAR": [255]
                })
            );
        }

        #[test]
        fn json_object_deserializes_into_typed_values() {
            let criteria: FilterCriteria = serde_json::from_str(
                r#"{"defense": 50, "setEffect": "스매시", "colorPartFB": [0]}"#,
            )
            .expect("valid criteria");

            assert_eq!(criteria.number(CriteriaKey::Defense), Some(50));
            assert_eq!(criteria.text(CriteriaKey::SetEffect), Some("스매시"));
            assert_eq!(criteria.numbers(CriteriaKey::ColorPartFB), Some(&[0][..]));
        }

        #[test]
        fn unknown_field_names_are_rejected() {
            let result = serde_json::from_str::<FilterCriteria>(r#"{"minFoo": 1}"#);
            assert!(result.is_err());
        }
    }

    #[test]
    fn typed_accessors_ignore_mismatched_kinds() {
        let mut criteria = FilterCriteria::new();
        criteria.insert_number(CriteriaKey::SewingRank, 1);

        assert_eq!(criteria.text(CriteriaKey::SewingRank), None);
        assert_eq!(criteria.numbers(CriteriaKey::SewingRank), None);
        assert_eq!(criteria.number(CriteriaKey::SewingRank), Some(1));
        assert_eq!(
            criteria.get(CriteriaKey::SewingRank).map(CriteriaValue::kind),
            Some(ValueKind::Number)
        );
    }
}

//! Static schema for the numeric stat rows of the detail filter.
//!
//! The table decides, per [`CategoryMode`], which rows are shown and which
//! keys are emitted. Rows hidden by the current mode keep their values in the
//! form; they are only skipped while hidden.

use super::criteria::CriteriaKey;
use crate::category::CategoryMode;

/// Which category mode a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Always,
    Armor,
    Weapon,
}

impl Visibility {
    pub fn shows(&self, mode: CategoryMode) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::Armor => mode == CategoryMode::Armor,
            Visibility::Weapon => mode == CategoryMode::Weapon,
        }
    }
}

/// Where in the form a row is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Top block: mode-specific stats, erg, durability.
    Stats,
    /// Next to the sewing option list.
    Sewing,
    /// Bottom of the form.
    Exclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLayout {
    Single {
        key: CriteriaKey,
        placeholder: &'static str,
    },
    Range {
        min: CriteriaKey,
        max: CriteriaKey,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub layout: StatLayout,
    pub visibility: Visibility,
    pub section: Section,
}

const fn single(
    label: &'static str,
    key: CriteriaKey,
    placeholder: &'static str,
    visibility: Visibility,
    section: Section,
) -> StatRow {
    StatRow {
        label,
        layout: StatLayout::Single { key, placeholder },
        visibility,
        section,
    }
}

const fn range(
    label: &'static str,
    min: CriteriaKey,
    max: CriteriaKey,
    visibility: Visibility,
) -> StatRow {
    StatRow {
        label,
        layout: StatLayout::Range { min, max },
        visibility,
        section: Section::Stats,
    }
}

/// Numeric rows in render order.
pub const STAT_ROWS: &[StatRow] = &[
    single("방어력", CriteriaKey::Defense, "입력", Visibility::Armor, Section::Stats),
    single("보호", CriteriaKey::Protection, "입력", Visibility::Armor, Section::Stats),
    single("마법방어력", CriteriaKey::MagicDefense, "입력", Visibility::Armor, Section::Stats),
    single("마법보호", CriteriaKey::MagicProtection, "입력", Visibility::Armor, Section::Stats),
    range("공격력", CriteriaKey::MinAttack, CriteriaKey::MaxAttack, Visibility::Weapon),
    range("부상율", CriteriaKey::MinWoundRate, CriteriaKey::MaxWoundRate, Visibility::Weapon),
    range("크리티컬", CriteriaKey::MinCritical, CriteriaKey::MaxCritical, Visibility::Weapon),
    range("밸런스", CriteriaKey::MinBalance, CriteriaKey::MaxBalance, Visibility::Weapon),
    range("에르그", CriteriaKey::MinErg, CriteriaKey::MaxErg, Visibility::Always),
    range("내구력", CriteriaKey::MinDurability, CriteriaKey::MaxDurability, Visibility::Always),
    single("세공 랭크", CriteriaKey::SewingRank, "예: 1", Visibility::Always, Section::Sewing),
    single(
        "남은 전용 해제 횟수",
        CriteriaKey::RemainingExclusive,
        "입력",
        Visibility::Always,
        Section::Exclusive,
    ),
];

/// Free-text fields (besides sewing options).
pub const TEXT_FIELDS: [CriteriaKey; 3] = [
    CriteriaKey::EnchantPrefix,
    CriteriaKey::EnchantSuffix,
    CriteriaKey::SetEffect,
];

impl StatRow {
    /// The one or two keys this row edits.
    pub fn keys(&self) -> impl Iterator<Item = CriteriaKey> {
        let (first, second) = match self.layout {
            StatLayout::Single { key, .. } => (key, None),
            StatLayout::Range { min, max } => (min, Some(max)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Rows of one section visible in `mode`, in render order.
pub fn rows_in(section: Section, mode: CategoryMode) -> impl Iterator<Item = &'static StatRow> {
    STAT_ROWS
        .iter()
        .filter(move |row| row.section == section && row.visibility.shows(mode))
}

/// Keys emitted for `mode`.
pub fn visible_keys(mode: CategoryMode) -> impl Iterator<Item = CriteriaKey> {
    STAT_ROWS
        .iter()
        .filter(move |row| row.visibility.shows(mode))
        .flat_map(StatRow::keys)
}

/// The row that edits `key`, if `key` is a stat key.
pub fn row_for(key: CriteriaKey) -> Option<&'static StatRow> {
    STAT_ROWS.iter().find(|row| row.keys().any(|k| k == key))
}

pub fn is_text_field(key: CriteriaKey) -> bool {
    TEXT_FIELDS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEAPON_KEYS: [CriteriaKey; 8] = [
        CriteriaKey::MinAttack,
        CriteriaKey::MaxAttack,
        CriteriaKey::MinWoundRate,
        CriteriaKey::MaxWoundRate,
        CriteriaKey::MinCritical,
        CriteriaKey::MaxCritical,
        CriteriaKey::MinBalance,
        CriteriaKey::MaxBalance,
    ];

    const ARMOR_KEYS: [CriteriaKey; 4] = [
        CriteriaKey::Defense,
        CriteriaKey::Protection,
        CriteriaKey::MagicDefense,
        CriteriaKey::MagicProtection,
    ];

    #[test]
    fn armor_mode_hides_weapon_keys() {
        let keys: Vec<_> = visible_keys(CategoryMode::Armor).collect();
        for key in WEAPON_KEYS {
            assert!(!keys.contains(&key), "{key}");
        }
        for key in ARMOR_KEYS {
            assert!(keys.contains(&key), "{key}");
        }
    }

    #[test]
    fn weapon_mode_hides_armor_keys() {
        let keys: Vec<_> = visible_keys(CategoryMode::Weapon).collect();
        for key in ARMOR_KEYS {
            assert!(!keys.contains(&key), "{key}");
        }
        for key in WEAPON_KEYS {
            assert!(keys.contains(&key), "{key}");
        }
    }

    #[test]
    fn common_keys_are_visible_in_both_modes() {
        for mode in [CategoryMode::Armor, CategoryMode::Weapon] {
            let keys: Vec<_> = visible_keys(mode).collect();
            for key in [
                CriteriaKey::MinErg,
                CriteriaKey::MaxErg,
                CriteriaKey::MinDurability,
                CriteriaKey::MaxDurability,
                CriteriaKey::SewingRank,
                CriteriaKey::RemainingExclusive,
            ] {
                assert!(keys.contains(&key), "{key} in {mode:?}");
            }
        }
    }

    #[test]
    fn every_stat_key_has_exactly_one_row() {
        let all: Vec<_> = STAT_ROWS.iter().flat_map(StatRow::keys).collect();
        for key in &all {
            assert_eq!(all.iter().filter(|k| *k == key).count(), 1, "{key}");
            assert!(row_for(*key).is_some());
        }
        assert_eq!(all.len(), 18);
    }

    #[test]
    fn non_stat_keys_have_no_row() {
        assert!(row_for(CriteriaKey::EnchantPrefix).is_none());
        assert!(row_for(CriteriaKey::SpecialUpgradeR).is_none());
        assert!(row_for(CriteriaKey::ColorPartAR).is_none());
    }

    #[test]
    fn stats_section_order_for_weapons() {
        let labels: Vec<_> = rows_in(Section::Stats, CategoryMode::Weapon)
            .map(|row| row.label)
            .collect();
        assert_eq!(
            labels,
            vec!["공격력", "부상율", "크리티컬", "밸런스", "에르그", "내구력"]
        );
    }

    #[test]
    fn sewing_and_exclusive_sections_hold_one_row_each() {
        for mode in [CategoryMode::Armor, CategoryMode::Weapon] {
            assert_eq!(rows_in(Section::Sewing, mode).count(), 1);
            assert_eq!(rows_in(Section::Exclusive, mode).count(), 1);
        }
    }

    #[test]
    fn range_row_yields_min_then_max() {
        let row = row_for(CriteriaKey::MaxBalance).expect("balance row");
        assert_eq!(
            row.keys().collect::<Vec<_>>(),
            vec![CriteriaKey::MinBalance, CriteriaKey::MaxBalance]
        );
    }

    #[test]
    fn text_fields() {
        assert!(is_text_field(CriteriaKey::SetEffect));
        assert!(!is_text_field(CriteriaKey::SewingOption1));
        assert!(!is_text_field(CriteriaKey::Defense));
    }
}

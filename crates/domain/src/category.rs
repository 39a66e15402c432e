//! Auction categories and the armor/weapon form mode they select.

use serde::{Deserialize, Serialize};

/// Category labels whose items are filtered by single-value defensive stats.
pub const ARMOR_CATEGORY_LABELS: [&str; 12] = [
    "천옷",
    "경갑옷",
    "중갑옷",
    "모자/가발",
    "방패",
    "신발",
    "장갑",
    "날개",
    "꼬리",
    "로브",
    "액세서리",
    "얼굴 장식",
];

/// Known auction categories as `(id, label)` pairs, in selector order.
pub const CATEGORY_CATALOG: &[(&str, &str)] = &[
    ("one_handed_sword", "한손검"),
    ("two_handed_sword", "양손검"),
    ("axe", "도끼"),
    ("blunt", "둔기"),
    ("lance", "랜스"),
    ("bow", "활"),
    ("crossbow", "석궁"),
    ("staff", "스태프"),
    ("wand", "원드"),
    ("cloth", "천옷"),
    ("light_armor", "경갑옷"),
    ("heavy_armor", "중갑옷"),
    ("headgear", "모자/가발"),
    ("shield", "방패"),
    ("shoes", "신발"),
    ("gloves", "장갑"),
    ("wings", "날개"),
    ("tail", "꼬리"),
    ("robe", "로브"),
    ("accessory", "액세서리"),
    ("face_accessory", "얼굴 장식"),
];

/// A selectable auction category (identifier plus human-readable label).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// All catalog categories, in selector order.
    pub fn catalog() -> Vec<Category> {
        CATEGORY_CATALOG
            .iter()
            .map(|(id, label)| Category::new(*id, *label))
            .collect()
    }

    /// Look up a catalog category by its identifier.
    pub fn find(id: &str) -> Option<Category> {
        CATEGORY_CATALOG
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(id, label)| Category::new(*id, *label))
    }

    /// Whether this category's label is one of the armor-like labels.
    ///
    /// Membership is decided by label, not by identifier.
    pub fn is_armor(&self) -> bool {
        ARMOR_CATEGORY_LABELS.contains(&self.label.as_str())
    }
}

/// Which stat block the detail filter shows and emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMode {
    /// Min/max attack, wound rate, critical and balance.
    #[default]
    Weapon,
    /// Single-value defense, protection and their magic counterparts.
    Armor,
}

impl CategoryMode {
    /// Mode for the (possibly absent) selected category.
    pub fn of(category: Option<&Category>) -> Self {
        match category {
            Some(category) if category.is_armor() => CategoryMode::Armor,
            _ => CategoryMode::Weapon,
        }
    }

    pub fn is_armor(&self) -> bool {
        matches!(self, CategoryMode::Armor)
    }
}

//! Special upgrade (특별 개조): two mutually exclusive tiers, R and S.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::criteria::CriteriaKey;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpgradeKind {
    #[default]
    R,
    S,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 2] = [UpgradeKind::R, UpgradeKind::S];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::R => "R",
            UpgradeKind::S => "S",
        }
    }

    /// Selector / field label, e.g. "특별 개조 (R강)".
    pub fn label(&self) -> &'static str {
        match self {
            UpgradeKind::R => "특별 개조 (R강)",
            UpgradeKind::S => "특별 개조 (S강)",
        }
    }

    fn index(&self) -> usize {
        match self {
            UpgradeKind::R => 0,
            UpgradeKind::S => 1,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpgradeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(UpgradeKind::R),
            "S" => Ok(UpgradeKind::S),
            _ => Err(DomainError::parse(format!("Unknown upgrade kind: {}", s))),
        }
    }
}

/// An upgrade constraint: the tier together with its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialUpgrade {
    R(u64),
    S(u64),
}

impl SpecialUpgrade {
    pub fn new(kind: UpgradeKind, level: u64) -> Self {
        match kind {
            UpgradeKind::R => SpecialUpgrade::R(level),
            UpgradeKind::S => SpecialUpgrade::S(level),
        }
    }

    pub fn kind(&self) -> UpgradeKind {
        match self {
            SpecialUpgrade::R(_) => UpgradeKind::R,
            SpecialUpgrade::S(_) => UpgradeKind::S,
        }
    }

    pub fn level(&self) -> u64 {
        match self {
            SpecialUpgrade::R(level) | SpecialUpgrade::S(level) => *level,
        }
    }

    pub fn criteria_key(&self) -> CriteriaKey {
        CriteriaKey::special_upgrade(self.kind())
    }
}

/// Form-side state: the active tier plus one draft level per tier.
///
/// Switching tiers keeps the other tier's draft; only the active tier ever
/// becomes a [`SpecialUpgrade`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialUpgradeDraft {
    active: UpgradeKind,
    levels: [Option<u64>; 2],
}

impl SpecialUpgradeDraft {
    pub fn active(&self) -> UpgradeKind {
        self.active
    }

    pub fn select(&mut self, kind: UpgradeKind) {
        self.active = kind;
    }

    pub fn level(&self, kind: UpgradeKind) -> Option<u64> {
        self.levels[kind.index()]
    }

    pub fn set_level(&mut self, kind: UpgradeKind, level: Option<u64>) {
        self.levels[kind.index()] = level;
    }

    /// The active tier with its level, if that level is filled in.
    pub fn selected(&self) -> Option<SpecialUpgrade> {
        self.level(self.active)
            .map(|level| SpecialUpgrade::new(self.active, level))
    }
}

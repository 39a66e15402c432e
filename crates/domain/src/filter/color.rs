//! Dye color slots (파트 A–F) and their R/G/B channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::numeric::{digits_only, parse_digits};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorSlot {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 6] = [
        ColorSlot::A,
        ColorSlot::B,
        ColorSlot::C,
        ColorSlot::D,
        ColorSlot::E,
        ColorSlot::F,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            ColorSlot::A => "A",
            ColorSlot::B => "B",
            ColorSlot::C => "C",
            ColorSlot::D => "D",
            ColorSlot::E => "E",
            ColorSlot::F => "F",
        }
    }

    /// Form label, e.g. "파트 A".
    pub fn label(&self) -> String {
        format!("파트 {}", self.letter())
    }

    pub fn index(&self) -> usize {
        match self {
            ColorSlot::A => 0,
            ColorSlot::B => 1,
            ColorSlot::C => 2,
            ColorSlot::D => 3,
            ColorSlot::E => 4,
            ColorSlot::F => 5,
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for ColorSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSlot::ALL
            .into_iter()
            .find(|slot| slot.letter().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown color slot: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    R,
    G,
    B,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::R, ColorChannel::G, ColorChannel::B];

    /// Single-letter input placeholder.
    pub fn letter(&self) -> &'static str {
        match self {
            ColorChannel::R => "R",
            ColorChannel::G => "G",
            ColorChannel::B => "B",
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for ColorChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(ColorChannel::R),
            "G" => Ok(ColorChannel::G),
            "B" => Ok(ColorChannel::B),
            _ => Err(DomainError::parse(format!("Unknown color channel: {}", s))),
        }
    }
}

/// Text-backed R/G/B inputs of one slot. Each channel holds digits only;
/// an empty channel is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTriplet {
    r: String,
    g: String,
    b: String,
}

impl ColorTriplet {
    pub fn get(&self, channel: ColorChannel) -> &str {
        match channel {
            ColorChannel::R => &self.r,
            ColorChannel::G => &self.g,
            ColorChannel::B => &self.b,
        }
    }

    pub fn set(&mut self, channel: ColorChannel, text: &str) {
        let digits = digits_only(text);
        match channel {
            ColorChannel::R => self.r = digits,
            ColorChannel::G => self.g = digits,
            ColorChannel::B => self.b = digits,
        }
    }

    /// Numeric value of a channel; `None` while its text is empty.
    pub fn value(&self, channel: ColorChannel) -> Option<u64> {
        parse_digits(self.get(channel))
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty() && self.g.is_empty() && self.b.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_labels() {
        assert_eq!(ColorSlot::A.label(), "파트 A");
        assert_eq!(ColorSlot::F.label(), "파트 F");
    }

    #[test]
    fn slot_indices_follow_declaration_order() {
        for (i, slot) in ColorSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn slot_and_channel_parse_case_insensitively() {
        assert_eq!("c".parse::<ColorSlot>(), Ok(ColorSlot::C));
        assert_eq!("g".parse::<ColorChannel>(), Ok(ColorChannel::G));
        assert!("Z".parse::<ColorSlot>().is_err());
        assert!("A".parse::<ColorChannel>().is_err());
    }

    #[test]
    fn channels_are_independent() {
        let mut triplet = ColorTriplet::default();
        triplet.set(ColorChannel::G, "128");

        assert_eq!(triplet.value(ColorChannel::R), None);
        assert_eq!(triplet.value(ColorChannel::G), Some(128));
        assert_eq!(triplet.value(ColorChannel::B), None);
        assert!(!triplet.is_empty());
    }

    #[test]
    fn zero_channel_has_a_value() {
        let mut triplet = ColorTriplet::default();
        triplet.set(ColorChannel::B, "0");
        assert_eq!(triplet.value(ColorChannel::B), Some(0));
    }

    #[test]
    fn clearing_a_channel_removes_its_value() {
        let mut triplet = ColorTriplet::default();
        triplet.set(ColorChannel::R, "10");
        triplet.set(ColorChannel::R, "");
        assert_eq!(triplet.value(ColorChannel::R), None);
        assert!(triplet.is_empty());
    }

    #[test]
    fn non_digits_are_dropped_on_set() {
        let mut triplet = ColorTriplet::default();
        triplet.set(ColorChannel::R, "2e5");
        assert_eq!(triplet.get(ColorChannel::R), "25");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let mut triplet = ColorTriplet::default();
        triplet.set(ColorChannel::R, "999");
        assert_eq!(triplet.value(ColorChannel::R), Some(999));
    }
}

//! Auction listing - one item for sale on the marketplace
//!
//! Field names mirror the marketplace's JSON so listings deserialize directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single auction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionItem {
    pub item_display_name: String,
    /// Price of one unit, in gold
    pub auction_price_per_unit: u64,
    pub date_auction_expire: DateTime<Utc>,
    /// Option descriptors in display order (`null` is read as empty)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_option: Vec<ItemOption>,
}

impl AuctionItem {
    pub fn has_options(&self) -> bool {
        !self.item_option.is_empty()
    }
}

/// One option descriptor attached to a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOption {
    pub option_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_sub_type: Option<String>,
    /// Precomputed description; replaces the value text when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_desc: Option<String>,
    pub option_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_value2: Option<f64>,
}

impl ItemOption {
    /// `" (sub type)"` when a non-empty sub-type is present, otherwise empty.
    pub fn sub_type_suffix(&self) -> String {
        match self.option_sub_type.as_deref() {
            Some(sub) if !sub.is_empty() => format!(" ({sub})"),
            _ => String::new(),
        }
    }

    /// The description if one is supplied, else `value` or `value ~ value2`.
    ///
    /// Empty descriptions and a zero secondary value count as absent.
    pub fn value_text(&self) -> String {
        if let Some(desc) = self.option_desc.as_deref().filter(|d| !d.is_empty()) {
            return desc.to_string();
        }

        match self.option_value2.filter(|v| *v != 0.0) {
            Some(second) => format!("{} ~ {}", self.option_value, second),
            None => self.option_value.to_string(),
        }
    }

    /// Everything after the option type: sub-type suffix, colon, value text.
    pub fn detail_text(&self) -> String {
        format!("{}: {}", self.sub_type_suffix(), self.value_text())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: f64) -> ItemOption {
        ItemOption {
            option_type: "공격".to_string(),
            option_sub_type: None,
            option_desc: None,
            option_value: value,
            option_value2: None,
        }
    }

    mod value_text_tests {
        use super::*;

        #[test]
        fn primary_value_alone() {
            assert_eq!(option(10.0).value_text(), "10");
        }

        #[test]
        fn primary_and_secondary_joined_with_tilde() {
            let opt = ItemOption {
                option_value2: Some(25.0),
                ..option(10.0)
            };
            assert_eq!(opt.value_text(), "10 ~ 25");
        }

        #[test]
        fn zero_secondary_is_treated_as_absent() {
            let opt = ItemOption {
                option_value2: Some(0.0),
                ..option(3.0)
            };
            assert_eq!(opt.value_text(), "3");
        }

        #[test]
        fn description_wins_over_values() {
            let opt = ItemOption {
                option_desc: Some("최대 공격력 20 증가".to_string()),
                option_value2: Some(30.0),
                ..option(10.0)
            };
            assert_eq!(opt.value_text(), "최대 공격력 20 증가");
        }

        #[test]
        fn empty_description_falls_back_to_values() {
            let opt = ItemOption {
                option_desc: Some(String::new()),
                ..option(7.0)
            };
            assert_eq!(opt.value_text(), "7");
        }

        #[test]
        fn fractional_values_keep_their_decimals() {
            assert_eq!(option(0.5).value_text(), "0.5");
        }
    }

    mod detail_text_tests {
        use super::*;

        #[test]
        fn sub_type_in_parentheses() {
            let opt = ItemOption {
                option_sub_type: Some("접두".to_string()),
                option_desc: Some("창백한".to_string()),
                ..option(0.0)
            };
            assert_eq!(opt.detail_text(), " (접두): 창백한");
        }

        #[test]
        fn no_sub_type_means_no_parentheses() {
            assert_eq!(option(12.0).detail_text(), ": 12");
        }

        #[test]
        fn empty_sub_type_is_hidden() {
            let opt = ItemOption {
                option_sub_type: Some(String::new()),
                ..option(12.0)
            };
            assert_eq!(opt.sub_type_suffix(), "");
        }
    }

    mod deserialize_tests {
        use super::*;

        #[test]
        fn listing_json_deserializes() {
            let json = r#"{
                "item_display_name": "창백한 나이트 브레이스",
                "auction_price_per_unit": 1250000,
                "date_auction_expire": "2025-03-01T12:30:00Z",
                "item_option": [
                    {"option_type": "공격", "option_value": 10, "option_value2": 20},
                    {"option_type": "인챈트", "option_sub_type": "접두", "option_desc": "창백한", "option_value": 0}
                ]
            }"#;

            let item: AuctionItem = serde_json::from_str(json).expect("valid listing");
            assert_eq!(item.auction_price_per_unit, 1_250_000);
            assert_eq!(item.item_option.len(), 2);
            assert_eq!(item.item_option[0].value_text(), "10 ~ 20");
            assert_eq!(item.item_option[1].detail_text(), " (접두): 창백한");
        }

        #[test]
        fn null_options_read_as_empty() {
            let json = r#"{
                "item_display_name": "빵",
                "auction_price_per_unit": 100,
                "date_auction_expire": "2025-03-01T12:30:00Z",
                "item_option": null
            }"#;

            let item: AuctionItem = serde_json::from_str(json).expect("valid listing");
            assert!(!item.has_options());
        }

        #[test]
        fn missing_options_read_as_empty() {
            let json = r#"{
                "item_display_name": "빵",
                "auction_price_per_unit": 100,
                "date_auction_expire": "2025-03-01T12:30:00Z"
            }"#;

            let item: AuctionItem = serde_json::from_str(json).expect("valid listing");
            assert!(item.item_option.is_empty());
        }
    }
}

//! Listing display formatting
//!
//! Pure helpers for the item option viewer: gold amounts and expiry
//! timestamps, plus the applied-criteria readout. Kept free of Dioxus so they can be tested directly.

use chrono::{DateTime, Local, TimeZone, Utc};
use mabiauction_domain::FilterCriteria;
use std::fmt::Display;

/// Date-time layout used for listing expiry.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a gold amount with thousands separators
///
/// # Examples
/// ```
/// use mabiauction_player::ui::presentation::helpers::format_gold;
///
/// assert_eq!(format_gold(0), "0");
/// assert_eq!(format_gold(999), "999");
/// assert_eq!(format_gold(1_250_000), "1,250,000");
/// ```
pub fn format_gold(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an expiry timestamp in the viewer's local time zone
pub fn format_expiry(expire: &DateTime<Utc>) -> String {
    format_expiry_in(expire, &Local)
}

/// Formats an expiry timestamp in an explicit time zone
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use mabiauction_player::ui::presentation::helpers::format_expiry_in;
///
/// let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).single().expect("valid");
/// assert_eq!(format_expiry_in(&at, &Utc), "2025-03-01 12:30:00");
/// ```
pub fn format_expiry_in<Tz>(expire: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    expire.with_timezone(tz).format(EXPIRY_FORMAT).to_string()
}

/// Pretty JSON of an applied filter, as the search backend would receive it
pub fn criteria_preview(criteria: &FilterCriteria) -> String {
    serde_json::to_string_pretty(criteria)
        .unwrap_or_else(|e| format!("<unserializable criteria: {}>", e))
}

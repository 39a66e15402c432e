//! Digit-only text coercion for numeric form inputs.

/// Strip everything except ASCII digits.
///
/// # Examples
/// ```
/// use mabiauction_domain::digits_only;
///
/// assert_eq!(digits_only("12a3"), "123");
/// assert_eq!(digits_only("-7"), "7");
/// assert_eq!(digits_only(""), "");
/// ```
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Coerce numeric input text: empty means "no value", otherwise the digits as
/// a number. Zero is a real value. Values beyond `u64::MAX` saturate.
///
/// # Examples
/// ```
/// use mabiauction_domain::parse_digits;
///
/// assert_eq!(parse_digits(""), None);
/// assert_eq!(parse_digits("0"), Some(0));
/// assert_eq!(parse_digits("007"), Some(7));
/// ```
pub fn parse_digits(text: &str) -> Option<u64> {
    let digits = digits_only(text);
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

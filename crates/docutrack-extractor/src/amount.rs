//! Monetary amount detection

use regex::Regex;
use std::sync::LazyLock;

/// Currency symbol, optional space, digits with optional thousands commas,
/// optional two-digit fraction.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[$£€¥]\s*[0-9](?:[0-9,]*[0-9])?(?:\.[0-9]{2})?").expect("valid amount regex")
});

/// Return the first monetary amount in the text, exactly as written
pub fn extract_amount(text: &str) -> Option<String> {
    AMOUNT_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_only() {
        assert_eq!(extract_amount("$100 and later $200").as_deref(), Some("$100"));
    }

    #[test]
    fn test_thousands_and_cents() {
        assert_eq!(
            extract_amount("a fee of $12,500.00 per month").as_deref(),
            Some("$12,500.00")
        );
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(extract_amount("rent: £1,200").as_deref(), Some("£1,200"));
        assert_eq!(extract_amount("€ 950.50 due").as_deref(), Some("€ 950.50"));
        assert_eq!(extract_amount("¥300000").as_deref(), Some("¥300000"));
    }

    #[test]
    fn test_fraction_needs_two_digits() {
        assert_eq!(extract_amount("$100.5").as_deref(), Some("$100"));
        assert_eq!(extract_amount("$100.505").as_deref(), Some("$100.50"));
    }

    #[test]
    fn test_trailing_comma_not_included() {
        assert_eq!(extract_amount("pay $5,000, then").as_deref(), Some("$5,000"));
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(extract_amount("one hundred dollars"), None);
        assert_eq!(extract_amount("$ only"), None);
        assert_eq!(extract_amount(""), None);
    }
}

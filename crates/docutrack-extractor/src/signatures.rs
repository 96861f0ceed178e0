//! Signature block names

use regex::Regex;
use std::sync::LazyLock;

static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:signature):\s*([A-Za-z][A-Za-z\s]+?)(?:\n|$)").expect("valid signature regex")
});

/// Names following `Signature:` labels, trimmed, in scan order
///
/// A name is a run of letters and spaces, in either case, that ends its line.
pub fn extract_signatures(text: &str) -> Vec<String> {
    SIGNATURE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_signature_lines() {
        let text = "Signature: Jane Doe\nDate: 01/02/2020\nSIGNATURE: John Smith\n";
        assert_eq!(extract_signatures(text), vec!["Jane Doe", "John Smith"]);
    }

    #[test]
    fn test_lowercase_name() {
        assert_eq!(extract_signatures("signature: jane doe\n"), vec!["jane doe"]);
    }

    #[test]
    fn test_signature_at_end_of_text() {
        assert_eq!(extract_signatures("Signature:Jane Doe  "), vec!["Jane Doe"]);
    }

    #[test]
    fn test_name_on_following_line() {
        assert_eq!(extract_signatures("Signature:\nJane Doe\n"), vec!["Jane Doe"]);
    }

    #[test]
    fn test_blank_signature_line_ignored() {
        assert!(extract_signatures("Signature: ____________\n").is_empty());
    }

    #[test]
    fn test_name_with_punctuation_ignored() {
        assert!(extract_signatures("Signature: Jane Doe, CEO\n").is_empty());
    }

    #[test]
    fn test_no_signatures() {
        assert!(extract_signatures("Signed by the parties").is_empty());
        assert!(extract_signatures("").is_empty());
    }
}

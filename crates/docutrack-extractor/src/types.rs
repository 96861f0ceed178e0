//! Result types for document extraction

use docutrack_domain::{truncate_chars, ExtractedFields};

/// Outcome of extracting one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentExtraction {
    /// Full decoded text
    pub text: String,

    /// Fields extracted from the text
    pub fields: ExtractedFields,

    /// Text excerpt capped for storage
    pub stored_text: String,
}

impl DocumentExtraction {
    /// Assemble an outcome, capping the stored excerpt at `stored_text_cap` characters
    pub fn new(text: String, fields: ExtractedFields, stored_text_cap: usize) -> Self {
        let stored_text = truncate_chars(&text, stored_text_cap).to_string();
        Self {
            text,
            fields,
            stored_text,
        }
    }

    /// Whether the stored excerpt is shorter than the full text
    pub fn is_truncated(&self) -> bool {
        self.stored_text.len() < self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_text_capped() {
        let text = "abcdef".to_string();
        let outcome = DocumentExtraction::new(text, ExtractedFields::empty(6, "m"), 4);
        assert_eq!(outcome.stored_text, "abcd");
        assert!(outcome.is_truncated());
    }

    #[test]
    fn test_short_text_not_truncated() {
        let outcome = DocumentExtraction::new("abc".to_string(), ExtractedFields::empty(3, "m"), 4);
        assert_eq!(outcome.stored_text, "abc");
        assert!(!outcome.is_truncated());
    }
}

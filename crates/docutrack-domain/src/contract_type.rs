//! Contract type table entries

/// Label returned when no table entry matches
pub const UNKNOWN_CONTRACT_TYPE: &str = "Unknown";

/// A contract type label paired with the phrases that identify it
///
/// Keywords are lowercase; matching happens against lowercased text.
/// A table of these is walked in order and the first entry with any keyword
/// present wins, so the position of an entry in its table is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractTypePattern {
    /// Label assigned when one of the keywords is found
    pub label: &'static str,

    /// Lowercase phrases, any one of which selects this label
    pub keywords: &'static [&'static str],
}

impl ContractTypePattern {
    /// Create a table entry
    pub const fn new(label: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { label, keywords }
    }

    /// Check whether any keyword occurs in already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

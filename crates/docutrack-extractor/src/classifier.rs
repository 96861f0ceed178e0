//! Keyword-table contract type classification

use docutrack_domain::{ContractTypePattern, UNKNOWN_CONTRACT_TYPE};

/// Built-in contract type table, in priority order
///
/// The first entry with a keyword present in the text wins.
pub const CONTRACT_TYPE_TABLE: &[ContractTypePattern] = &[
    ContractTypePattern::new(
        "Service Agreement",
        &["service agreement", "services agreement", "consulting agreement"],
    ),
    ContractTypePattern::new(
        "Employment Contract",
        &["employment agreement", "employment contract", "job offer"],
    ),
    ContractTypePattern::new(
        "Lease Agreement",
        &["lease agreement", "rental agreement", "tenancy agreement"],
    ),
    ContractTypePattern::new(
        "Non-Disclosure Agreement",
        &["non-disclosure", "nda", "confidentiality agreement"],
    ),
];

/// Classify text against the built-in table
pub fn classify(text: &str) -> &'static str {
    classify_with(text, CONTRACT_TYPE_TABLE)
}

/// Classify text against a caller-supplied table
///
/// Matching is case-insensitive substring search. Returns `"Unknown"` when
/// no entry matches.
pub fn classify_with(text: &str, table: &[ContractTypePattern]) -> &'static str {
    let lowered = text.to_lowercase();
    table
        .iter()
        .find(|pattern| pattern.matches(&lowered))
        .map(|pattern| pattern.label)
        .unwrap_or(UNKNOWN_CONTRACT_TYPE)
}

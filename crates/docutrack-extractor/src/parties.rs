//! Party names from "between X and Y" phrases

use regex::Regex;
use std::sync::LazyLock;

/// `between <First> and|& <Second>`
///
/// Each name starts with a letter of either case. The first name is the
/// shortest span (letters, whitespace, `&`, `.`, `,`) that reaches the
/// connective. The second name is its first word followed by any capitalized
/// words on the same line, so `Globex Inc` stays whole while a following
/// lowercase clause or sentence break ends it. A single-letter initial keeps
/// its period (`J. Smith`).
static PARTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:between)\s+([A-Za-z][A-Za-z\s&.,]+?)\s+(?i:and|&)\s+((?:[A-Za-z]\.|[A-Za-z&][A-Za-z&]*)(?:,?[ \t]+(?:[A-Z]\.|[A-Z&][A-Za-z&]*))*)(?:[\s,.]|$)",
    )
    .expect("valid party regex")
});

/// Extract party names, two per matched phrase, in scan order
///
/// Names are trimmed. Repeated phrases produce repeated names.
pub fn extract_parties(text: &str) -> Vec<String> {
    let mut parties = Vec::new();
    for caps in PARTY_RE.captures_iter(text) {
        if let (Some(first), Some(second)) = (caps.get(1), caps.get(2)) {
            parties.push(first.as_str().trim().to_string());
            parties.push(second.as_str().trim().to_string());
        }
    }
    parties
}

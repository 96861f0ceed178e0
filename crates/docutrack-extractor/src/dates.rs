//! Effective and expiration date detection

use regex::Regex;
use std::sync::LazyLock;

/// Numeric `D/M/YYYY` or `D-M-YYYY`, or `Month D, YYYY` with optional comma.
/// Day and month ranges are not validated.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b[0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+[0-9]{1,2},?\s+[0-9]{4}\b",
    )
    .expect("valid date regex")
});

/// The two dates a contract exposes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractDates {
    /// First date in the text
    pub date: Option<String>,

    /// Second date in the text, whatever its chronology
    pub expiration_date: Option<String>,
}

/// All date matches in scan order, as written
pub fn find_dates(text: &str) -> Vec<&str> {
    DATE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// First date becomes `date`, second becomes `expiration_date`
///
/// The second match is taken as is; it is not checked to be later than the
/// first. Matches after the second are ignored.
pub fn extract_dates(text: &str) -> ContractDates {
    let mut matches = DATE_RE.find_iter(text).map(|m| m.as_str().to_string());
    let date = matches.next();
    let expiration_date = matches.next();
    ContractDates {
        date,
        expiration_date,
    }
}

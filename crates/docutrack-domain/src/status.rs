//! Extraction status of a stored contract

use std::fmt;

/// How the fields of a contract record were obtained
///
/// - AutoExtracted: Fields came from automatic extraction (upload or reprocess)
/// - ManuallyEdited: A person replaced the fields; automatic runs must not overwrite them
/// - ManualRequired: Extraction was skipped and the fields must be entered by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStatus {
    /// Fields produced by the extractor
    AutoExtracted,

    /// Fields supplied by a person
    ManuallyEdited,

    /// No fields yet; manual entry needed
    ManualRequired,
}

impl ExtractionStatus {
    /// Get the status tag as stored alongside a record
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStatus::AutoExtracted => "auto_extracted",
            ExtractionStatus::ManuallyEdited => "manually_edited",
            ExtractionStatus::ManualRequired => "manual_required",
        }
    }

    /// Parse a status from its tag
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto_extracted" => Some(ExtractionStatus::AutoExtracted),
            "manually_edited" => Some(ExtractionStatus::ManuallyEdited),
            "manual_required" => Some(ExtractionStatus::ManualRequired),
            _ => None,
        }
    }

    /// Whether automatic extraction may replace the fields of a record in this status
    pub fn accepts_automatic_update(&self) -> bool {
        !matches!(self, ExtractionStatus::ManuallyEdited)
    }
}

impl fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExtractionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid extraction status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags() {
        assert_eq!(ExtractionStatus::AutoExtracted.as_str(), "auto_extracted");
        assert_eq!(ExtractionStatus::ManuallyEdited.as_str(), "manually_edited");
        assert_eq!(ExtractionStatus::ManualRequired.as_str(), "manual_required");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "Manually_Edited".parse::<ExtractionStatus>(),
            Ok(ExtractionStatus::ManuallyEdited)
        );
        assert_eq!(
            ExtractionStatus::parse("auto_extracted"),
            Some(ExtractionStatus::AutoExtracted)
        );
        assert!("pending".parse::<ExtractionStatus>().is_err());
    }

    #[test]
    fn test_automatic_update_guard() {
        assert!(ExtractionStatus::AutoExtracted.accepts_automatic_update());
        assert!(ExtractionStatus::ManualRequired.accepts_automatic_update());
        assert!(!ExtractionStatus::ManuallyEdited.accepts_automatic_update());
    }
}

//! Contract records and their extraction lifecycle

use std::fmt;

use crate::fields::ExtractedFields;
use crate::status::ExtractionStatus;

/// Default cap on the stored text excerpt, in characters
pub const DEFAULT_STORED_TEXT_CAP: usize = 5000;

/// Unique identifier for a contract record based on UUIDv7
///
/// UUIDv7 sorts by creation time, so identifiers double as upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractId(u128);

impl ContractId {
    /// Generate a new UUIDv7-based ContractId
    ///
    /// # Examples
    ///
    /// ```
    /// use docutrack_domain::ContractId;
    ///
    /// let id = ContractId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ContractId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ContractId from its UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use docutrack_domain::ContractId;
    ///
    /// let id = ContractId::new();
    /// let parsed = ContractId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid contract id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ContractId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// What caused an extraction result to be applied to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTrigger {
    /// Extraction run without a person asking for it (upload, batch jobs)
    Automatic,

    /// Explicit request to regenerate fields from the stored file
    Reprocess,
}

/// A stored contract and the fields extracted from it
///
/// Fields are replaced wholesale, never patched. Once a person edits the
/// fields, only an explicit [`ExtractionTrigger::Reprocess`] may replace them.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractRecord {
    /// Unique identifier
    pub id: ContractId,

    /// File name as uploaded
    pub original_filename: String,

    /// Size of the uploaded file in bytes
    pub file_size: u64,

    /// Current fields, if any extraction or edit has happened
    pub fields: Option<ExtractedFields>,

    /// How the current fields were obtained
    pub status: ExtractionStatus,

    /// Capped excerpt of the extracted text, kept for audit
    pub extracted_text: Option<String>,
}

impl ContractRecord {
    /// Create a record for a freshly uploaded file
    pub fn new(original_filename: impl Into<String>, file_size: u64) -> Self {
        Self {
            id: ContractId::new(),
            original_filename: original_filename.into(),
            file_size,
            fields: None,
            status: ExtractionStatus::ManualRequired,
            extracted_text: None,
        }
    }

    /// Apply an extraction result
    ///
    /// Returns `false` and leaves the record untouched when an automatic run
    /// meets manually edited fields.
    pub fn apply_extraction(
        &mut self,
        fields: ExtractedFields,
        text: &str,
        trigger: ExtractionTrigger,
        stored_text_cap: usize,
    ) -> bool {
        if trigger == ExtractionTrigger::Automatic && !self.status.accepts_automatic_update() {
            return false;
        }

        self.fields = Some(fields);
        self.status = ExtractionStatus::AutoExtracted;
        self.extracted_text = Some(truncate_chars(text, stored_text_cap).to_string());
        true
    }

    /// Replace the fields with manually supplied values
    pub fn apply_manual_edit(&mut self, fields: ExtractedFields) {
        self.fields = Some(fields);
        self.status = ExtractionStatus::ManuallyEdited;
    }

    /// Record that extraction was skipped for this contract
    pub fn mark_manual_required(&mut self) {
        self.status = ExtractionStatus::ManualRequired;
    }
}

/// Truncate to at most `max_chars` characters without splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

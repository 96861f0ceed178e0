//! Extracted contract fields

use std::collections::BTreeMap;
use std::fmt;

use crate::contract_type::UNKNOWN_CONTRACT_TYPE;

/// Metadata key holding the character count of the source text
pub const TEXT_LENGTH_KEY: &str = "text_length";

/// Metadata key holding the tag of the method that produced the fields
pub const EXTRACTION_METHOD_KEY: &str = "extraction_method";

/// A provenance metadata value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// Integer value (counts, lengths)
    Integer(i64),

    /// Free-form text value (tags, names)
    Text(String),
}

impl MetadataValue {
    /// Get the value as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(value) => Some(*value),
            MetadataValue::Text(_) => None,
        }
    }

    /// Get the value as text, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Integer(_) => None,
            MetadataValue::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(value) => write!(f, "{}", value),
            MetadataValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Structured fields extracted from one contract's text
///
/// Dates and amounts keep the exact matched substring; nothing is parsed or
/// reformatted. `expiration_date` is the *second* date found in the text,
/// whether or not it falls after `date` chronologically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Contract type label, or `"Unknown"`
    pub contract_type: String,

    /// Party names in match order, two per match, duplicates kept
    pub party_names: Vec<String>,

    /// First monetary amount found, including its currency symbol
    pub amount: Option<String>,

    /// First date found
    pub date: Option<String>,

    /// Second date found, if at least two were present
    pub expiration_date: Option<String>,

    /// Signature names in match order
    pub signatures: Vec<String>,

    /// Provenance metadata (always contains `text_length` and `extraction_method`)
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl ExtractedFields {
    /// Create an empty result carrying only provenance metadata
    pub fn empty(text_length: usize, extraction_method: &str) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert(
            TEXT_LENGTH_KEY.to_string(),
            MetadataValue::Integer(i64::try_from(text_length).unwrap_or(i64::MAX)),
        );
        metadata.insert(
            EXTRACTION_METHOD_KEY.to_string(),
            MetadataValue::Text(extraction_method.to_string()),
        );

        Self {
            contract_type: UNKNOWN_CONTRACT_TYPE.to_string(),
            party_names: Vec::new(),
            amount: None,
            date: None,
            expiration_date: None,
            signatures: Vec::new(),
            metadata,
        }
    }

    /// Character count of the text the fields were extracted from
    pub fn text_length(&self) -> Option<i64> {
        self.metadata.get(TEXT_LENGTH_KEY).and_then(MetadataValue::as_integer)
    }

    /// Tag of the method that produced these fields
    pub fn extraction_method(&self) -> Option<&str> {
        self.metadata.get(EXTRACTION_METHOD_KEY).and_then(MetadataValue::as_text)
    }

    /// Whether no contract type was recognised
    pub fn is_unknown_type(&self) -> bool {
        self.contract_type == UNKNOWN_CONTRACT_TYPE
    }
}

//! DocuTrack Domain Layer
//!
//! This crate contains the value types shared by every DocuTrack component.
//! It depends on nothing but `uuid` and defines the result of a contract
//! extraction, the contract type table shape, and the lifecycle rules of a
//! stored contract record.
//!
//! ## Key Concepts
//!
//! - **ExtractedFields**: The structured result of one extraction run
//! - **Contract type**: A coarse category label assigned by keyword matching
//! - **Provenance metadata**: Text length and method tag describing a result
//! - **Extraction status**: Whether a record holds automatic or manual values
//!
//! ## Lifecycle
//!
//! An [`ExtractedFields`] value is produced fresh on every extraction and is
//! never mutated in place. A [`ContractRecord`] swaps the whole value on
//! reprocess or manual edit, and refuses automatic re-extraction once a
//! person has edited it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod contract_type;
pub mod fields;
pub mod status;

// Re-exports for convenience
pub use contract::{
    truncate_chars, ContractId, ContractRecord, ExtractionTrigger, DEFAULT_STORED_TEXT_CAP,
};
pub use contract_type::{ContractTypePattern, UNKNOWN_CONTRACT_TYPE};
pub use fields::{ExtractedFields, MetadataValue, EXTRACTION_METHOD_KEY, TEXT_LENGTH_KEY};
pub use status::ExtractionStatus;

//! DocuTrack Extractor
//!
//! Turns contract documents into structured fields using deterministic text
//! patterns. No model is consulted; every field comes from a regular
//! expression or a keyword table.
//!
//! # Architecture
//!
//! ```text
//! DOCX bytes → extract_text → text → extract_fields → ExtractedFields
//!                                       ├─ classify            (contract type)
//!                                       ├─ extract_parties     (party names)
//!                                       ├─ extract_amount      (first amount)
//!                                       ├─ extract_dates       (date, expiration)
//!                                       └─ extract_signatures  (signature names)
//! ```
//!
//! The extractors are pure functions over `&str` and share no state, so
//! [`extract_fields_parallel`] may run them on separate threads.
//!
//! # Known limitation
//!
//! `expiration_date` is the second date found in the text. It is not checked
//! to be later than `date`.
//!
//! # Example Usage
//!
//! ```no_run
//! use docutrack_extractor::{extract_fields, extract_text};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("lease.docx")?;
//! let text = extract_text(&bytes)?;
//! let fields = extract_fields(&text);
//!
//! println!("Type: {}", fields.contract_type);
//! println!("Parties: {:?}", fields.party_names);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod amount;
mod classifier;
mod config;
mod dates;
mod docx;
mod error;
mod extractor;
mod parties;
mod signatures;
mod types;

#[cfg(test)]
mod tests;

pub use amount::extract_amount;
pub use classifier::{classify, classify_with, CONTRACT_TYPE_TABLE};
pub use config::ExtractorConfig;
pub use dates::{extract_dates, find_dates, ContractDates};
pub use docx::{
    extract_text, extract_text_from_path, extract_text_from_reader, is_docx_path,
    DOCX_EXTENSION,
};
pub use error::ExtractorError;
pub use extractor::{extract_fields, extract_fields_parallel, Extractor, EXTRACTION_METHOD};
pub use parties::extract_parties;
pub use signatures::extract_signatures;
pub use types::DocumentExtraction;

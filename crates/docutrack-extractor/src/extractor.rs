//! Field extraction orchestration and the document Extractor service

use crate::amount::extract_amount;
use crate::classifier::classify;
use crate::config::ExtractorConfig;
use crate::dates::{extract_dates, ContractDates};
use crate::docx;
use crate::error::ExtractorError;
use crate::parties::extract_parties;
use crate::signatures::extract_signatures;
use crate::types::DocumentExtraction;
use docutrack_domain::ExtractedFields;
use std::path::Path;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Tag stored under `extraction_method` for fields produced here
pub const EXTRACTION_METHOD: &str = "deterministic_pattern_v1";

/// Outputs of the individual extractors, before aggregation
struct FieldParts {
    contract_type: &'static str,
    party_names: Vec<String>,
    amount: Option<String>,
    dates: ContractDates,
    signatures: Vec<String>,
}

/// Extract all contract fields from text
///
/// Total: any input, including the empty string, yields a complete result.
/// Missing fields are absent or empty, never errors.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let parts = FieldParts {
        contract_type: classify(text),
        party_names: extract_parties(text),
        amount: extract_amount(text),
        dates: extract_dates(text),
        signatures: extract_signatures(text),
    };
    aggregate(text, parts)
}

/// Same as [`extract_fields`], running each extractor on its own scoped thread
pub fn extract_fields_parallel(text: &str) -> ExtractedFields {
    let parts = std::thread::scope(|scope| {
        let contract_type = scope.spawn(|| classify(text));
        let party_names = scope.spawn(|| extract_parties(text));
        let amount = scope.spawn(|| extract_amount(text));
        let dates = scope.spawn(|| extract_dates(text));
        let signatures = scope.spawn(|| extract_signatures(text));

        FieldParts {
            contract_type: join(contract_type),
            party_names: join(party_names),
            amount: join(amount),
            dates: join(dates),
            signatures: join(signatures),
        }
    });
    aggregate(text, parts)
}

fn join<T>(handle: std::thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

fn aggregate(text: &str, parts: FieldParts) -> ExtractedFields {
    let mut fields = ExtractedFields::empty(text.chars().count(), EXTRACTION_METHOD);
    fields.contract_type = parts.contract_type.to_string();
    fields.party_names = parts.party_names;
    fields.amount = parts.amount;
    fields.date = parts.dates.date;
    fields.expiration_date = parts.dates.expiration_date;
    fields.signatures = parts.signatures;
    fields
}

/// Decodes contract documents and extracts their fields
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create a new Extractor after validating the configuration
    pub fn try_new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::new(config))
    }

    /// Current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract fields from already decoded text
    pub fn extract_from_text(&self, text: &str) -> ExtractedFields {
        let fields = extract_fields(text);
        debug!(
            "Fields: type '{}', {} parties, {} signatures, amount {}, date {}",
            fields.contract_type,
            fields.party_names.len(),
            fields.signatures.len(),
            fields.amount.is_some(),
            fields.date.is_some(),
        );
        fields
    }

    /// Decode a DOCX document to text without extracting fields
    ///
    /// Decoding runs on a blocking task bounded by the configured timeout.
    pub async fn decode_document(&self, bytes: Vec<u8>) -> Result<String, ExtractorError> {
        let byte_len = bytes.len();
        if byte_len > self.config.max_document_bytes {
            return Err(ExtractorError::DocumentTooLarge(
                byte_len,
                self.config.max_document_bytes,
            ));
        }

        debug!("Decoding document of {} bytes", byte_len);

        timeout(
            self.config.decode_timeout(),
            tokio::task::spawn_blocking(move || docx::extract_text(&bytes)),
        )
        .await
        .map_err(|_| {
            warn!("Decoding timed out after {}s", self.config.decode_timeout_secs);
            ExtractorError::Timeout
        })?
        .map_err(|e| ExtractorError::Task(e.to_string()))?
    }

    /// Read a DOCX file and decode it to text without extracting fields
    pub async fn decode_path(&self, path: impl AsRef<Path>) -> Result<String, ExtractorError> {
        let bytes = read_docx_file(path.as_ref()).await?;
        self.decode_document(bytes).await
    }

    /// Decode a DOCX document and extract its fields
    pub async fn extract_document(
        &self,
        bytes: Vec<u8>,
    ) -> Result<DocumentExtraction, ExtractorError> {
        info!("Starting extraction for document of {} bytes", bytes.len());

        let text = self.decode_document(bytes).await?;
        let fields = self.extract_from_text(&text);

        info!(
            "Extraction complete: type '{}', text length {}",
            fields.contract_type,
            fields.text_length().unwrap_or_default()
        );

        Ok(DocumentExtraction::new(text, fields, self.config.stored_text_cap))
    }

    /// Read a DOCX file and extract its fields
    pub async fn extract_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<DocumentExtraction, ExtractorError> {
        let bytes = read_docx_file(path.as_ref()).await?;
        self.extract_document(bytes).await
    }
}

async fn read_docx_file(path: &Path) -> Result<Vec<u8>, ExtractorError> {
    if !docx::is_docx_path(path) {
        return Err(ExtractorError::UnsupportedFormat(format!(
            "Only DOCX files are supported: {}",
            path.display()
        )));
    }

    debug!("Reading {}", path.display());
    Ok(tokio::fs::read(path).await?)
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

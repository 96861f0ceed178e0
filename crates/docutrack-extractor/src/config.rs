//! Configuration for the Extractor

use docutrack_domain::DEFAULT_STORED_TEXT_CAP;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum accepted document size (bytes)
    pub max_document_bytes: usize,

    /// Maximum time for decoding a single document (seconds)
    pub decode_timeout_secs: u64,

    /// Maximum length of the stored text excerpt (characters)
    #[serde(default = "default_stored_text_cap")]
    pub stored_text_cap: usize,
}

fn default_stored_text_cap() -> usize {
    DEFAULT_STORED_TEXT_CAP
}

impl ExtractorConfig {
    /// Get the decode timeout as a Duration
    pub fn decode_timeout(&self) -> Duration {
        Duration::from_secs(self.decode_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        if self.decode_timeout_secs == 0 {
            return Err("decode_timeout_secs must be greater than 0".to_string());
        }
        if self.stored_text_cap == 0 {
            return Err("stored_text_cap must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_document_bytes: 20 * 1024 * 1024,
            decode_timeout_secs: 30,
            stored_text_cap: DEFAULT_STORED_TEXT_CAP,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: small documents, short timeout
    pub fn strict() -> Self {
        Self {
            max_document_bytes: 5 * 1024 * 1024,
            decode_timeout_secs: 10,
            stored_text_cap: DEFAULT_STORED_TEXT_CAP,
        }
    }

    /// Lenient preset: large documents, long timeout, bigger excerpts
    pub fn lenient() -> Self {
        Self {
            max_document_bytes: 100 * 1024 * 1024,
            decode_timeout_secs: 120,
            stored_text_cap: 20_000,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

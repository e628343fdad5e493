//! Configuration management and validation.
//!
//! Controls how the decoding orchestrator reacts to malformed or missing
//! chunks: whether the first error aborts the report, and which chunk kinds
//! a report must contain.

use crate::error::{MetarError, Result};
use crate::models::ChunkKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chunk kinds a complete report is expected to contain
pub const DEFAULT_MANDATORY_CHUNKS: &[ChunkKind] = &[
    ChunkKind::Icao,
    ChunkKind::Datetime,
    ChunkKind::SurfaceWind,
    ChunkKind::Visibility,
    ChunkKind::Temperature,
    ChunkKind::Pressure,
];

/// Chunk kinds that can never be required
const OPTIONAL_ONLY_CHUNKS: &[ChunkKind] = &[ChunkKind::Remarks, ChunkKind::ReportStatus];

/// Settings for the decoding orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Abort on the first malformed or missing chunk instead of collecting
    /// errors and continuing
    pub strict: bool,

    /// Chunk kinds whose absence is reported as an error
    pub mandatory_chunks: Vec<ChunkKind>,

    /// Stop decoding after a `NIL` status; a missing report has no further groups
    pub stop_on_nil: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            mandatory_chunks: DEFAULT_MANDATORY_CHUNKS.to_vec(),
            stop_on_nil: true,
        }
    }
}

impl DecoderConfig {
    /// Create configuration with strict error handling
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replace the set of mandatory chunk kinds
    pub fn with_mandatory(mut self, chunks: impl Into<Vec<ChunkKind>>) -> Self {
        self.mandatory_chunks = chunks.into();
        self
    }

    /// Keep decoding after a `NIL` status
    pub fn without_nil_stop(mut self) -> Self {
        self.stop_on_nil = false;
        self
    }

    /// Whether the given chunk kind must be present
    pub fn is_mandatory(&self, kind: ChunkKind) -> bool {
        self.mandatory_chunks.contains(&kind)
    }

    /// Reject settings the orchestrator cannot honour
    pub fn validate(&self) -> Result<()> {
        if let Some(kind) = self
            .mandatory_chunks
            .iter()
            .find(|kind| OPTIONAL_ONLY_CHUNKS.contains(*kind))
        {
            return Err(MetarError::configuration(format!(
                "{kind} information cannot be mandatory"
            )));
        }

        debug!(
            "Decoder configuration: strict={}, mandatory={:?}",
            self.strict, self.mandatory_chunks
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_lenient_and_valid() {
        let config = DecoderConfig::default();
        assert!(!config.strict);
        assert!(config.stop_on_nil);
        assert!(config.is_mandatory(ChunkKind::Visibility));
        assert!(!config.is_mandatory(ChunkKind::Clouds));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = DecoderConfig::default()
            .with_strict(true)
            .with_mandatory(vec![ChunkKind::Icao])
            .without_nil_stop();
        assert!(config.strict);
        assert!(!config.stop_on_nil);
        assert_eq!(config.mandatory_chunks, vec![ChunkKind::Icao]);
    }

    #[test]
    fn test_remarks_cannot_be_mandatory() {
        let config = DecoderConfig::default().with_mandatory(vec![ChunkKind::Remarks]);
        match config.validate() {
            Err(MetarError::Configuration { message }) => {
                assert!(message.contains("remarks"));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}

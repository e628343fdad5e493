//! Error handling for METAR decoding operations.
//!
//! Distinguishes chunks that are present but malformed from conversions
//! between units that have no tabulated rate. A chunk that is simply absent
//! is not an error and never appears here.

use crate::measurement::Unit;
use crate::models::ChunkKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetarError {
    #[error("Bad format for {chunk} information: '{offending}' ({reason})")]
    MalformedChunk {
        chunk: ChunkKind,
        offending: String,
        reason: String,
    },

    #[error("Conversion rate between \"{from}\" and \"{to}\" is not defined.")]
    UndefinedConversion { from: Unit, to: Unit },

    #[error("Missing mandatory {chunk} information")]
    MissingChunk { chunk: ChunkKind },

    #[error("Report is empty")]
    EmptyReport,

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MetarError {
    /// Create a malformed chunk error for the offending text
    pub fn malformed(
        chunk: ChunkKind,
        offending: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedChunk {
            chunk,
            offending: offending.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Chunk kind the error relates to, if any
    pub fn chunk(&self) -> Option<ChunkKind> {
        match self {
            Self::MalformedChunk { chunk, .. } | Self::MissingChunk { chunk } => Some(*chunk),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetarError>;

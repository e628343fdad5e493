//! Report status decoding (`NIL`, `AUTO`)

use super::{ChunkDecoder, chunk_regex, group};
use crate::error::{MetarError, Result};
use crate::models::{ChunkKind, ReportStatus};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"(?P<status>NIL|AUTO)"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStatusDecoder;

impl ChunkDecoder for ReportStatusDecoder {
    type Chunk = ReportStatus;

    fn kind(&self) -> ChunkKind {
        ChunkKind::ReportStatus
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<ReportStatus> {
        match group(found, "status") {
            Some("NIL") => Ok(ReportStatus::Nil),
            Some("AUTO") => Ok(ReportStatus::Auto),
            other => Err(MetarError::malformed(
                self.kind(),
                other.unwrap_or_default(),
                "unknown report status",
            )),
        }
    }
}

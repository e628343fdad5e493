//! Report type decoding (`METAR`, `SPECI`, optionally corrected with `COR`)

use super::{ChunkDecoder, chunk_regex, group};
use crate::error::{MetarError, Result};
use crate::models::{ChunkKind, ReportType, ReportTypeChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"(?P<type>METAR|SPECI)(?P<corrected> COR)?"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportTypeDecoder;

impl ChunkDecoder for ReportTypeDecoder {
    type Chunk = ReportTypeChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::ReportType
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<ReportTypeChunk> {
        let report_type = match group(found, "type") {
            Some("METAR") => ReportType::Metar,
            Some("SPECI") => ReportType::Speci,
            other => {
                return Err(MetarError::malformed(
                    self.kind(),
                    other.unwrap_or_default(),
                    "unknown report type",
                ));
            }
        };

        Ok(ReportTypeChunk {
            report_type,
            corrected: found.name("corrected").is_some(),
        })
    }
}

//! Remarks decoding: `RMK` and all text after it, kept verbatim

use super::{ChunkDecoder, chunk_regex, group};
use crate::constants::REMARKS_MARKER;
use crate::error::Result;
use crate::models::{ChunkKind, RemarksChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(&format!(r"{REMARKS_MARKER}(?: (?P<text>.*))?$")));

/// Runs first so remark text is never decoded as coded groups
#[derive(Debug, Clone, Copy, Default)]
pub struct RemarksDecoder;

impl ChunkDecoder for RemarksDecoder {
    type Chunk = RemarksChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Remarks
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<RemarksChunk> {
        Ok(RemarksChunk {
            text: group(found, "text").unwrap_or_default().to_string(),
        })
    }
}

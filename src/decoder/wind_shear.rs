//! Wind shear decoding (`WS Rnn[LCR]`, `WS RWYnn[LCR]`, `WS ALL RWY`)

use super::{ChunkDecoder, chunk_regex, chunk_text, compile, group, repeated};
use crate::error::Result;
use crate::models::{ChunkKind, WindShearChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const WIND_SHEAR_GROUP: &str = r"WS (?:(?P<all>ALL RWY)|R(?:WY)?(?P<runway>\d{2}[LCR]?))";

static PATTERN: LazyLock<Regex> = LazyLock::new(|| chunk_regex(&repeated(WIND_SHEAR_GROUP, 3)));

// Groups contain a space, so they are found by scanning rather than by token
static GROUP: LazyLock<Regex> = LazyLock::new(|| compile(WIND_SHEAR_GROUP));

#[derive(Debug, Clone, Copy, Default)]
pub struct WindShearDecoder;

impl ChunkDecoder for WindShearDecoder {
    type Chunk = WindShearChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::WindShear
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<WindShearChunk> {
        let mut chunk = WindShearChunk {
            all_runways: false,
            runways: Vec::new(),
        };

        for shear in GROUP.captures_iter(chunk_text(found)) {
            if shear.name("all").is_some() {
                chunk.all_runways = true;
            } else if let Some(runway) = group(&shear, "runway") {
                chunk.runways.push(runway.to_string());
            }
        }

        Ok(chunk)
    }
}

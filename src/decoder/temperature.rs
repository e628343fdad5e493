//! Air temperature and dew point decoding (`[M]tt/[M]dd`)

use super::{ChunkDecoder, chunk_regex, chunk_text, group};
use crate::error::{MetarError, Result};
use crate::models::{ChunkKind, TemperatureChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"(?P<air>M?\d{2})/(?:(?P<dew>M?\d{2})|//)?"));

static NEAR_MISS: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"M?\d{1,3}/M?\d{0,3}"));

#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureDecoder;

impl TemperatureDecoder {
    /// Signed degrees from `M`-prefixed notation
    fn degrees(&self, found: &Captures<'_>, text: &str) -> Result<i32> {
        let (sign, digits) = match text.strip_prefix('M') {
            Some(digits) => (-1, digits),
            None => (1, text),
        };
        let value: i32 = digits.parse().map_err(|_| {
            MetarError::malformed(self.kind(), chunk_text(found), "invalid temperature")
        })?;
        Ok(sign * value)
    }
}

impl ChunkDecoder for TemperatureDecoder {
    type Chunk = TemperatureChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Temperature
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<TemperatureChunk> {
        let air_temperature = self.degrees(found, group(found, "air").unwrap_or_default())?;
        let dew_point = match group(found, "dew") {
            Some(text) => Some(self.degrees(found, text)?),
            None => None,
        };

        Ok(TemperatureChunk {
            air_temperature,
            dew_point,
        })
    }
}

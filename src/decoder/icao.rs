//! Station identifier decoding
//!
//! Four-character ICAO location indicator. Status and weather codes share the
//! same shape (`AUTO`, `SHRA`, `RERA`), so tokens that read as one of those
//! are skipped and the search continues with the next token.

use super::present_weather::{present_weather_group, weather_body};
use super::{CHUNK_GROUP, ChunkDecoder, Consumed, chunk_regex, group, remove_span, token_regex, unnamed};
use crate::error::Result;
use crate::models::{ChunkKind, IcaoChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"(?P<station>[A-Z][A-Z0-9]{3})"));

static NOT_A_STATION: LazyLock<Regex> = LazyLock::new(|| {
    token_regex(&format!(
        "NIL|AUTO|{}|RE{}",
        unnamed(&present_weather_group()),
        unnamed(&weather_body())
    ))
});

#[derive(Debug, Clone, Copy, Default)]
pub struct IcaoDecoder;

impl ChunkDecoder for IcaoDecoder {
    type Chunk = IcaoChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Icao
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn consume<'t>(&self, remaining: &'t str) -> Consumed<'t> {
        let mut start = 0;
        while let Some(found) = PATTERN.captures_at(remaining, start) {
            let Some(chunk) = found.name(CHUNK_GROUP) else {
                break;
            };
            if NOT_A_STATION.is_match(chunk.as_str()) {
                start = chunk.end();
                continue;
            }
            let remaining = remove_span(remaining, chunk.start(), chunk.end());
            return Consumed {
                found: Some(found),
                remaining,
            };
        }

        Consumed {
            found: None,
            remaining: remaining.to_string(),
        }
    }

    fn decode(&self, found: &Captures<'_>) -> Result<IcaoChunk> {
        Ok(IcaoChunk {
            station: group(found, "station").unwrap_or_default().to_string(),
        })
    }
}

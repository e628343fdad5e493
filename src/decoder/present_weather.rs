//! Present weather decoding
//!
//! Up to three groups, each an optional intensity or proximity prefix
//! (`-`, `+`, `VC`), an optional descriptor and up to three phenomena.
//! Automated stations report `//` when present weather cannot be observed.

use super::{
    ChunkDecoder, chunk_regex, chunk_text, decode_tokens, group, repeated, token_regex,
};
use crate::constants::{MAX_WEATHER_GROUPS, WEATHER_DESCRIPTORS, WEATHER_PHENOMENA};
use crate::error::{MetarError, Result};
use crate::models::{
    ChunkKind, Intensity, PresentWeatherChunk, WeatherCode, WeatherDescriptor, WeatherPhenomenon,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Descriptor and phenomena of a weather group, shared with recent weather
pub fn weather_body() -> String {
    format!(
        r"(?:(?P<missing>//)|(?P<descriptor>{WEATHER_DESCRIPTORS})(?P<phenomena>(?:{WEATHER_PHENOMENA}){{0,3}})|(?P<phenomena_only>(?:{WEATHER_PHENOMENA}){{1,3}}))"
    )
}

/// Build a weather group from a match of [`weather_body`]
pub fn weather_group(kind: ChunkKind, found: &Captures<'_>) -> Result<WeatherPhenomenon> {
    if found.name("missing").is_some() {
        return Ok(WeatherPhenomenon {
            intensity: None,
            descriptor: None,
            phenomena: Vec::new(),
            not_reported: true,
        });
    }

    let run = group(found, "phenomena")
        .or_else(|| group(found, "phenomena_only"))
        .unwrap_or_default();
    let phenomena = WeatherCode::parse_run(run)
        .ok_or_else(|| MetarError::malformed(kind, chunk_text(found), "unknown phenomenon"))?;

    Ok(WeatherPhenomenon {
        intensity: group(found, "intensity").and_then(Intensity::from_code),
        descriptor: group(found, "descriptor").and_then(WeatherDescriptor::from_code),
        phenomena,
        not_reported: false,
    })
}

/// A single present weather group
pub fn present_weather_group() -> String {
    format!(r"(?P<intensity>[-+]|VC)?{}", weather_body())
}

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(&repeated(&present_weather_group(), MAX_WEATHER_GROUPS)));

static GROUP: LazyLock<Regex> = LazyLock::new(|| token_regex(&present_weather_group()));

#[derive(Debug, Clone, Copy, Default)]
pub struct PresentWeatherDecoder;

impl ChunkDecoder for PresentWeatherDecoder {
    type Chunk = PresentWeatherChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::PresentWeather
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<PresentWeatherChunk> {
        let groups = decode_tokens(self.kind(), chunk_text(found), &GROUP, |weather| {
            weather_group(self.kind(), weather)
        })?;

        Ok(PresentWeatherChunk { groups })
    }
}

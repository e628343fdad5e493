//! Recent weather decoding (`RE` followed by descriptor and phenomena)

use super::present_weather::{weather_body, weather_group};
use super::{ChunkDecoder, chunk_regex};
use crate::error::Result;
use crate::models::{ChunkKind, RecentWeatherChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| chunk_regex(&format!("RE{}", weather_body())));

#[derive(Debug, Clone, Copy, Default)]
pub struct RecentWeatherDecoder;

impl ChunkDecoder for RecentWeatherDecoder {
    type Chunk = RecentWeatherChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::RecentWeather
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn decode(&self, found: &Captures<'_>) -> Result<RecentWeatherChunk> {
        Ok(RecentWeatherChunk {
            weather: weather_group(self.kind(), found)?,
        })
    }
}

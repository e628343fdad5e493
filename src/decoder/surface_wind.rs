//! Surface wind decoding
//!
//! `dddff[Gfmfm]KT` with direction in degrees, `VRB` or `///`, speed and
//! optional gust in two or three digits, unit suffix `KT`, `MPS` or `KPH`,
//! and an optional ` dddVddd` variable direction group.

use super::{ChunkDecoder, chunk_regex, chunk_text, group, is_missing, parse_number};
use crate::error::{MetarError, Result};
use crate::measurement::{Measurement, Unit};
use crate::models::{ChunkKind, SurfaceWindChunk, WindDirection};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    chunk_regex(
        r"(?P<direction>\d{3}|VRB|///)(?P<above>P)?(?P<speed>\d{2,3}|//)(?:GP?(?P<gust>\d{2,3}))?(?P<unit>KT|MPS|KPH)(?: (?P<from>\d{3})V(?P<to>\d{3}))?",
    )
});

static NEAR_MISS: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"\S*(?:KT|MPS|KPH)"));

const MAX_DIRECTION: u16 = 360;

#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceWindDecoder;

impl SurfaceWindDecoder {
    fn direction(&self, found: &Captures<'_>, name: &str) -> Result<u16> {
        let degrees: u16 = parse_number(self.kind(), found, name)?;
        if degrees > MAX_DIRECTION {
            return Err(MetarError::malformed(
                self.kind(),
                chunk_text(found),
                format!("wind direction {degrees} is not in [0,360]"),
            ));
        }
        Ok(degrees)
    }
}

impl ChunkDecoder for SurfaceWindDecoder {
    type Chunk = SurfaceWindChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::SurfaceWind
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<SurfaceWindChunk> {
        let unit = group(found, "unit")
            .and_then(Unit::from_wind_suffix)
            .ok_or_else(|| MetarError::malformed(self.kind(), chunk_text(found), "unknown unit"))?;

        let direction = match group(found, "direction").unwrap_or_default() {
            "VRB" => WindDirection::Variable,
            text if is_missing(text) => WindDirection::NotReported,
            _ => WindDirection::Degrees(self.direction(found, "direction")?),
        };

        let speed = match group(found, "speed") {
            Some(text) if !is_missing(text) => {
                let speed: u32 = parse_number(self.kind(), found, "speed")?;
                Some(Measurement::new(speed.into(), unit))
            }
            _ => None,
        };

        let gust = match found.name("gust") {
            Some(_) => {
                let gust: u32 = parse_number(self.kind(), found, "gust")?;
                Some(Measurement::new(gust.into(), unit))
            }
            None => None,
        };

        let direction_variation = match found.name("from") {
            Some(_) => Some((self.direction(found, "from")?, self.direction(found, "to")?)),
            None => None,
        };

        Ok(SurfaceWindChunk {
            direction,
            speed,
            speed_above: found.name("above").is_some(),
            gust,
            direction_variation,
        })
    }
}

//! Runway visual range decoding
//!
//! Up to four `Rnn[LCR]/[PM]dddd[V[PM]dddd][FT][/][UDN]` groups. Values are in
//! meters unless suffixed with `FT`.

use super::{
    ChunkDecoder, chunk_regex, chunk_text, decode_tokens, group, parse_number, repeated, token_regex,
};
use crate::constants::{MAX_RUNWAY_GROUPS, MAX_RUNWAY_NUMBER};
use crate::error::{MetarError, Result};
use crate::measurement::{Measurement, Unit};
use crate::models::{
    ChunkKind, RangeBound, RangeValue, RunwayVisualRange, RunwayVisualRangeChunk, Tendency,
    VisualRange,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const RUNWAY_GROUP: &str = r"R(?P<runway>(?P<number>\d{2})[LCR]?)/(?P<min_bound>[PM])?(?P<min>\d{4})(?:V(?P<max_bound>[PM])?(?P<max>\d{4}))?(?P<feet>FT)?/?(?P<tendency>[UDN])?";

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(&repeated(RUNWAY_GROUP, MAX_RUNWAY_GROUPS)));

static GROUP: LazyLock<Regex> = LazyLock::new(|| token_regex(RUNWAY_GROUP));

static NEAR_MISS: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"R\d{2}[LCR]?/\S*"));

#[derive(Debug, Clone, Copy, Default)]
pub struct RunwayVisualRangeDecoder;

impl RunwayVisualRangeDecoder {
    fn range_value(
        &self,
        found: &Captures<'_>,
        value: &str,
        bound: &str,
        unit: Unit,
    ) -> Result<RangeValue> {
        let distance: u32 = parse_number(self.kind(), found, value)?;
        let bound = match group(found, bound) {
            Some("P") => Some(RangeBound::Above),
            Some("M") => Some(RangeBound::Below),
            _ => None,
        };
        Ok(RangeValue {
            distance: Measurement::new(distance.into(), unit),
            bound,
        })
    }

    fn runway(&self, found: &Captures<'_>) -> Result<RunwayVisualRange> {
        let number: u8 = parse_number(self.kind(), found, "number")?;
        if number > MAX_RUNWAY_NUMBER {
            return Err(MetarError::malformed(
                self.kind(),
                chunk_text(found),
                format!("runway number {number} is above {MAX_RUNWAY_NUMBER}"),
            ));
        }

        let unit = if found.name("feet").is_some() {
            Unit::Feet
        } else {
            Unit::Meter
        };

        let min = self.range_value(found, "min", "min_bound", unit)?;
        let range = match found.name("max") {
            Some(_) => VisualRange::Variable {
                min,
                max: self.range_value(found, "max", "max_bound", unit)?,
            },
            None => VisualRange::Fixed(min),
        };

        let tendency = match group(found, "tendency") {
            Some("U") => Some(Tendency::Upward),
            Some("D") => Some(Tendency::Downward),
            Some("N") => Some(Tendency::NoChange),
            _ => None,
        };

        Ok(RunwayVisualRange {
            runway: group(found, "runway").unwrap_or_default().to_string(),
            range,
            tendency,
        })
    }
}

impl ChunkDecoder for RunwayVisualRangeDecoder {
    type Chunk = RunwayVisualRangeChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::RunwayVisualRange
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<RunwayVisualRangeChunk> {
        let runways = decode_tokens(self.kind(), chunk_text(found), &GROUP, |runway| {
            self.runway(runway)
        })?;

        Ok(RunwayVisualRangeChunk { runways })
    }
}

//! Prevailing visibility decoding
//!
//! Recognised forms:
//! - `CAVOK`
//! - `////` visibility not reported
//! - `dddd[NDV][ dddd[dir]]` meters with optional minimum visibility
//! - `nSM`, `n/dSM`, `w n/dSM` statute miles, `Mn/dSM` below and `PnSM` above

use super::{ChunkDecoder, chunk_regex, chunk_text, group, parse_number};
use crate::constants::{CAVOK, COMPASS_DIRECTIONS};
use crate::error::{MetarError, Result};
use crate::measurement::{Measurement, Unit};
use crate::models::{ChunkKind, CompassDirection, RangeBound, VisibilityChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    chunk_regex(&format!(
        r"(?P<cavok>{CAVOK})|(?P<missing>////)|(?P<meters>\d{{4}})(?P<ndv>NDV)?(?: (?P<minimum>\d{{4}})(?P<direction>{COMPASS_DIRECTIONS})?)?|(?:(?P<whole>\d{{1,2}}) |(?P<below>M))?(?P<numerator>\d{{1,2}})/(?P<denominator>2|4|8|16)SM|(?P<above>P)?(?P<miles>\d{{1,2}})SM"
    ))
});

static NEAR_MISS: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"CAV[A-Z]*|\d{1,3}|\d{5,}|\S*SM"));

/// Decoder for the prevailing visibility group
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityDecoder;

impl ChunkDecoder for VisibilityDecoder {
    type Chunk = VisibilityChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Visibility
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<VisibilityChunk> {
        let mut chunk = VisibilityChunk {
            cavok: false,
            visibility: None,
            bound: None,
            ndv: false,
            minimum_visibility: None,
            minimum_visibility_direction: None,
        };

        if found.name("cavok").is_some() {
            chunk.cavok = true;
        } else if found.name("missing").is_some() {
            // not reported
        } else if found.name("meters").is_some() {
            let meters: u32 = parse_number(self.kind(), found, "meters")?;
            chunk.visibility = Some(Measurement::new(meters.into(), Unit::Meter));
            chunk.ndv = found.name("ndv").is_some();

            if found.name("minimum").is_some() {
                let minimum: u32 = parse_number(self.kind(), found, "minimum")?;
                chunk.minimum_visibility = Some(Measurement::new(minimum.into(), Unit::Meter));
                chunk.minimum_visibility_direction =
                    group(found, "direction").and_then(CompassDirection::from_code);
            }
        } else if found.name("numerator").is_some() {
            let numerator: u32 = parse_number(self.kind(), found, "numerator")?;
            let denominator: u32 = parse_number(self.kind(), found, "denominator")?;
            if numerator == 0 || numerator >= denominator {
                return Err(MetarError::malformed(
                    self.kind(),
                    chunk_text(found),
                    "fraction must be strictly between 0 and 1",
                ));
            }
            let whole: u32 = match found.name("whole") {
                Some(_) => parse_number(self.kind(), found, "whole")?,
                None => 0,
            };
            let miles = f64::from(whole) + f64::from(numerator) / f64::from(denominator);
            chunk.visibility = Some(Measurement::new(miles, Unit::StatuteMile));
            if found.name("below").is_some() {
                chunk.bound = Some(RangeBound::Below);
            }
        } else {
            let miles: u32 = parse_number(self.kind(), found, "miles")?;
            chunk.visibility = Some(Measurement::new(miles.into(), Unit::StatuteMile));
            if found.name("above").is_some() {
                chunk.bound = Some(RangeBound::Above);
            }
        }

        Ok(chunk)
    }
}

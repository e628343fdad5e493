//! Pressure decoding
//!
//! `Qdddd` is the QNH in whole hectopascals; `Adddd` the altimeter setting in
//! hundredths of inches of mercury. `////` marks a value not reported.

use super::{ChunkDecoder, chunk_regex, chunk_text, group, is_missing, parse_number};
use crate::constants::ALTIMETER_FACTOR;
use crate::error::{MetarError, Result};
use crate::measurement::{Measurement, Unit};
use crate::models::{ChunkKind, PressureChunk};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"(?P<prefix>[QA])(?P<value>\d{4}|////)"));

static NEAR_MISS: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"[QA](?:\d{1,3}|\d{5,}|/{1,3}|/{5,})"));

#[derive(Debug, Clone, Copy, Default)]
pub struct PressureDecoder;

impl ChunkDecoder for PressureDecoder {
    type Chunk = PressureChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Pressure
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<PressureChunk> {
        if group(found, "value").is_some_and(is_missing) {
            return Ok(PressureChunk { pressure: None });
        }

        let value: u32 = parse_number(self.kind(), found, "value")?;
        let pressure = match group(found, "prefix") {
            Some("Q") => Measurement::new(value.into(), Unit::HectoPascal),
            Some("A") => Measurement::new(f64::from(value) / ALTIMETER_FACTOR, Unit::MercuryInch),
            _ => {
                return Err(MetarError::malformed(
                    self.kind(),
                    chunk_text(found),
                    "unknown pressure unit",
                ));
            }
        };

        Ok(PressureChunk {
            pressure: Some(pressure),
        })
    }
}

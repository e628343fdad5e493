//! Observation day and time decoding (`DDHHMMZ`)

use super::{ChunkDecoder, chunk_regex, chunk_text, parse_number};
use crate::error::{MetarError, Result};
use crate::models::{ChunkKind, DatetimeChunk};
use chrono::NaiveTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(r"(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z"));

static NEAR_MISS: LazyLock<Regex> = LazyLock::new(|| chunk_regex(r"\d+Z"));

#[derive(Debug, Clone, Copy, Default)]
pub struct DatetimeDecoder;

impl ChunkDecoder for DatetimeDecoder {
    type Chunk = DatetimeChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Datetime
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<DatetimeChunk> {
        let day: u8 = parse_number(self.kind(), found, "day")?;
        let hour: u32 = parse_number(self.kind(), found, "hour")?;
        let minute: u32 = parse_number(self.kind(), found, "minute")?;

        if !(1..=31).contains(&day) {
            return Err(MetarError::malformed(
                self.kind(),
                chunk_text(found),
                format!("day {day} is not a day of month"),
            ));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            MetarError::malformed(
                self.kind(),
                chunk_text(found),
                format!("{hour:02}:{minute:02} is not a valid time"),
            )
        })?;

        Ok(DatetimeChunk { day, time })
    }
}

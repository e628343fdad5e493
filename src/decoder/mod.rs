//! Chunk decoders for METAR report groups
//!
//! Every decoder recognises one semantic group of a report and follows the
//! same extraction protocol, provided by [`ChunkDecoder`]:
//!
//! - the decoder's pattern is searched over the **whole** remaining text, not
//!   only its head, since optional groups are not always reported in order;
//! - a match must cover whole space-separated tokens;
//! - only the first occurrence is removed, together with one adjacent space;
//! - when nothing matches the remaining text is returned unchanged and the
//!   result is `None`.
//!
//! Because matching is search-anywhere, two decoders whose patterns overlap
//! depend on the order they run in. That order is fixed by
//! [`crate::metar_decoder::DECODING_ORDER`].
//!
//! ## Architecture
//!
//! - [`report_type`], [`icao`], [`datetime`], [`report_status`] - report preamble
//! - [`surface_wind`], [`visibility`], [`runway_visual_range`] - wind and visibility
//! - [`present_weather`], [`clouds`], [`recent_weather`], [`wind_shear`] - weather
//! - [`temperature`], [`pressure`] - thermodynamic state
//! - [`remarks`] - free-text remarks section

pub mod clouds;
pub mod datetime;
pub mod icao;
pub mod present_weather;
pub mod pressure;
pub mod recent_weather;
pub mod remarks;
pub mod report_status;
pub mod report_type;
pub mod runway_visual_range;
pub mod surface_wind;
pub mod temperature;
pub mod visibility;
pub mod wind_shear;

#[cfg(test)]
pub mod tests;

pub use clouds::CloudDecoder;
pub use datetime::DatetimeDecoder;
pub use icao::IcaoDecoder;
pub use present_weather::PresentWeatherDecoder;
pub use pressure::PressureDecoder;
pub use recent_weather::RecentWeatherDecoder;
pub use remarks::RemarksDecoder;
pub use report_status::ReportStatusDecoder;
pub use report_type::ReportTypeDecoder;
pub use runway_visual_range::RunwayVisualRangeDecoder;
pub use surface_wind::SurfaceWindDecoder;
pub use temperature::TemperatureDecoder;
pub use visibility::VisibilityDecoder;
pub use wind_shear::WindShearDecoder;

use crate::error::{MetarError, Result};
use crate::models::ChunkKind;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

/// Name of the capture group spanning the whole chunk
pub const CHUNK_GROUP: &str = "chunk";

static NAMED_GROUP: LazyLock<Regex> = LazyLock::new(|| compile(r"\(\?P<\w+>"));

/// Outcome of searching the remaining text for a chunk
#[derive(Debug)]
pub struct Consumed<'t> {
    pub found: Option<Captures<'t>>,
    pub remaining: String,
}

/// Result of parsing one chunk: the typed chunk, if present, and the text
/// left for the next decoder
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub result: Option<T>,
    pub remaining_metar: String,
}

/// Extraction protocol shared by every chunk decoder
pub trait ChunkDecoder {
    type Chunk;

    /// Kind of group this decoder recognises
    fn kind(&self) -> ChunkKind;

    /// Token-bounded recognition pattern, built with [`chunk_regex`]
    fn regex(&self) -> &Regex;

    /// Tokens that resemble this group without being valid
    fn near_miss(&self) -> Option<&Regex> {
        None
    }

    /// Build the typed chunk from a match
    fn decode(&self, found: &Captures<'_>) -> Result<Self::Chunk>;

    /// Search the remaining text and remove the first match
    fn consume<'t>(&self, remaining: &'t str) -> Consumed<'t> {
        match self.regex().captures(remaining) {
            Some(found) => {
                let remaining = match found.name(CHUNK_GROUP) {
                    Some(chunk) => remove_span(remaining, chunk.start(), chunk.end()),
                    None => remaining.to_string(),
                };
                Consumed {
                    found: Some(found),
                    remaining,
                }
            }
            None => Consumed {
                found: None,
                remaining: remaining.to_string(),
            },
        }
    }

    /// Consume and decode this decoder's chunk from the remaining text
    fn parse(&self, remaining: &str) -> Result<Decoded<Self::Chunk>> {
        let consumed = self.consume(remaining);

        let Some(found) = consumed.found else {
            if let Some(token) = self
                .near_miss()
                .and_then(|near_miss| near_miss.captures(remaining))
                .and_then(|caps| caps.name(CHUNK_GROUP))
            {
                return Err(MetarError::malformed(
                    self.kind(),
                    token.as_str(),
                    "does not match any valid form",
                ));
            }
            return Ok(Decoded {
                result: None,
                remaining_metar: consumed.remaining,
            });
        };

        let chunk = self.decode(&found)?;
        trace!(
            "{} consumed, remaining: '{}'",
            self.kind(),
            consumed.remaining
        );

        Ok(Decoded {
            result: Some(chunk),
            remaining_metar: consumed.remaining,
        })
    }
}

/// Compile `core` so that it only matches whole tokens, exposing the match
/// as the `chunk` group
pub fn chunk_regex(core: &str) -> Regex {
    compile(&format!(r"(?:^| )(?P<{CHUNK_GROUP}>{core})(?: |$)"))
}

/// Compile `core` so that it matches a single whole token, for decoding the
/// groups of a repeated chunk one at a time
pub fn token_regex(core: &str) -> Regex {
    compile(&format!(r"^(?P<{CHUNK_GROUP}>{core})$"))
}

/// Compile a pattern constant
pub fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid chunk pattern {pattern}: {e}"))
}

/// Pattern matching `group` between one and `max` times, space separated.
/// Named groups are dropped so the result can be embedded in a larger pattern.
pub fn repeated(group: &str, max: usize) -> String {
    let bare = unnamed(group);
    format!("{bare}(?: {bare}){{0,{}}}", max.saturating_sub(1))
}

/// `pattern` with its named groups turned into plain groups
pub fn unnamed(pattern: &str) -> String {
    NAMED_GROUP.replace_all(pattern, "(?:").into_owned()
}

/// Decode every space-separated group of a repeated chunk with `regex`, a
/// pattern built with [`token_regex`]
pub fn decode_tokens<T>(
    kind: ChunkKind,
    text: &str,
    regex: &Regex,
    mut decode: impl FnMut(&Captures<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    text.split(' ')
        .map(|token| {
            let found = regex
                .captures(token)
                .ok_or_else(|| MetarError::malformed(kind, token, "unexpected group"))?;
            decode(&found)
        })
        .collect()
}

/// Remove `start..end` and one adjacent separator
pub fn remove_span(text: &str, start: usize, end: usize) -> String {
    let before = &text[..start];
    let after = &text[end..];
    match (before.strip_suffix(' '), after.strip_prefix(' ')) {
        (_, Some(after)) => format!("{before}{after}"),
        (Some(before), None) => before.to_string(),
        (None, None) => format!("{before}{after}"),
    }
}

/// Text of a named group, if it participated in the match
pub fn group<'t>(found: &Captures<'t>, name: &str) -> Option<&'t str> {
    found.name(name).map(|m| m.as_str())
}

/// Whole matched chunk text
pub fn chunk_text<'t>(found: &Captures<'t>) -> &'t str {
    group(found, CHUNK_GROUP).unwrap_or_default()
}

/// Parse a numeric group the pattern guarantees to be digits
pub fn parse_number<T: std::str::FromStr>(
    kind: ChunkKind,
    found: &Captures<'_>,
    name: &str,
) -> Result<T> {
    let text = group(found, name).unwrap_or_default();
    text.parse::<T>()
        .map_err(|_| MetarError::malformed(kind, chunk_text(found), format!("invalid number '{text}'")))
}

/// True when the group is the "not reported" placeholder
pub fn is_missing(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == crate::constants::MISSING_DATA_CHAR)
}

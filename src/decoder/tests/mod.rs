//! Tests for the chunk decoders
//!
//! Every decoder is exercised through [`ChunkDecoder::parse`], the same entry
//! point the orchestrator uses.

pub mod preamble_tests;
pub mod sky_tests;
pub mod wind_tests;

use crate::decoder::{ChunkDecoder, Decoded};
use crate::error::MetarError;
use crate::measurement::{Measurement, Unit};
use crate::models::ChunkKind;

/// Parse `text`, asserting that the decoder found its chunk
pub fn decode_ok<D: ChunkDecoder>(decoder: &D, text: &str) -> Decoded<D::Chunk>
where
    D::Chunk: std::fmt::Debug,
{
    match decoder.parse(text) {
        Ok(decoded) if decoded.result.is_some() => decoded,
        other => panic!("Expected {} chunk in '{text}', got {other:?}", decoder.kind()),
    }
}

/// Parse `text`, asserting that the chunk is absent and the text untouched
pub fn assert_absent<D: ChunkDecoder>(decoder: &D, text: &str)
where
    D::Chunk: std::fmt::Debug,
{
    let decoded = decoder
        .parse(text)
        .unwrap_or_else(|e| panic!("Unexpected error for '{text}': {e}"));
    assert!(decoded.result.is_none(), "Unexpected chunk in '{text}'");
    assert_eq!(decoded.remaining_metar, text);
}

/// Parse `text`, asserting a malformed-chunk error for the decoder's kind
pub fn assert_malformed<D: ChunkDecoder>(decoder: &D, text: &str)
where
    D::Chunk: std::fmt::Debug,
{
    match decoder.parse(text) {
        Err(MetarError::MalformedChunk { chunk, .. }) => assert_eq!(chunk, decoder.kind()),
        other => panic!("Expected malformed {} for '{text}', got {other:?}", decoder.kind()),
    }
}

pub fn meters(value: f64) -> Option<Measurement> {
    Some(Measurement::new(value, Unit::Meter))
}

pub fn feet(value: f64) -> Option<Measurement> {
    Some(Measurement::new(value, Unit::Feet))
}

pub fn miles(value: f64) -> Option<Measurement> {
    Some(Measurement::new(value, Unit::StatuteMile))
}

/// Every decoder kind, for assertions that hold across the whole set
pub const ALL_KINDS: [ChunkKind; 14] = crate::metar_decoder::DECODING_ORDER;

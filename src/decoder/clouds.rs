//! Cloud decoding
//!
//! Either a no-cloud token (`NSC`, `NCD`, `CLR`, `SKC`), a vertical
//! visibility group `VVhhh`, or up to four layers `(FEW|SCT|BKN|OVC)hhh[CB|TCU]`.
//! Heights are coded in hundreds of feet; `///` marks a field not reported.

use super::{
    ChunkDecoder, chunk_regex, decode_tokens, group, is_missing, parse_number,
    repeated, token_regex,
};
use crate::constants::{CLOUD_AMOUNTS, CLOUD_HEIGHT_FACTOR, MAX_CLOUD_LAYERS, NO_CLOUD_TOKENS};
use crate::error::Result;
use crate::measurement::{Measurement, Unit};
use crate::models::{ChunkKind, CloudAmount, CloudChunk, CloudLayer, CloudType, NoCloud};
use regex::{Captures, Regex};
use std::sync::LazyLock;

fn layer() -> String {
    format!(r"(?P<amount>{CLOUD_AMOUNTS}|///)(?P<height>\d{{3}}|///)(?P<type>CB|TCU|///)?")
}

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    chunk_regex(&format!(
        r"(?P<no_cloud>{NO_CLOUD_TOKENS})|VV(?P<vertical>\d{{3}}|///)|(?P<layers>{})",
        repeated(&layer(), MAX_CLOUD_LAYERS)
    ))
});

static LAYER: LazyLock<Regex> = LazyLock::new(|| token_regex(&layer()));

static NEAR_MISS: LazyLock<Regex> =
    LazyLock::new(|| chunk_regex(&format!(r"(?:{CLOUD_AMOUNTS}|VV)\S*")));

#[derive(Debug, Clone, Copy, Default)]
pub struct CloudDecoder;

impl CloudDecoder {
    fn height(&self, found: &Captures<'_>, name: &str) -> Result<Option<Measurement>> {
        match group(found, name) {
            Some(text) if !is_missing(text) => {
                let hundreds: u32 = parse_number(self.kind(), found, name)?;
                Ok(Some(Measurement::new(
                    f64::from(hundreds) * CLOUD_HEIGHT_FACTOR,
                    Unit::Feet,
                )))
            }
            _ => Ok(None),
        }
    }

    fn layer(&self, found: &Captures<'_>) -> Result<CloudLayer> {
        Ok(CloudLayer {
            amount: group(found, "amount").and_then(CloudAmount::from_code),
            base_height: self.height(found, "height")?,
            cloud_type: group(found, "type").and_then(CloudType::from_code),
        })
    }
}

impl ChunkDecoder for CloudDecoder {
    type Chunk = CloudChunk;

    fn kind(&self) -> ChunkKind {
        ChunkKind::Clouds
    }

    fn regex(&self) -> &Regex {
        &PATTERN
    }

    fn near_miss(&self) -> Option<&Regex> {
        Some(&NEAR_MISS)
    }

    fn decode(&self, found: &Captures<'_>) -> Result<CloudChunk> {
        let mut chunk = CloudChunk {
            no_cloud: group(found, "no_cloud").and_then(NoCloud::from_code),
            layers: Vec::new(),
            sky_obscured: false,
            vertical_visibility: None,
        };

        if found.name("vertical").is_some() {
            chunk.sky_obscured = true;
            chunk.vertical_visibility = self.height(found, "vertical")?;
        } else if let Some(layers) = group(found, "layers") {
            chunk.layers = decode_tokens(self.kind(), layers, &LAYER, |layer| self.layer(layer))?;
        }

        Ok(chunk)
    }
}

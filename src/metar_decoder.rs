//! Decoding orchestrator.
//!
//! Threads the remaining report text through every chunk decoder in a fixed
//! order and assembles the chunks into a [`DecodedMetar`]. Decoders search the
//! whole remaining text, so the order below is part of what makes decoding
//! correct: a decoder only ever sees text its predecessors left behind.

use crate::config::DecoderConfig;
use crate::decoder::{
    ChunkDecoder, CloudDecoder, DatetimeDecoder, IcaoDecoder, PresentWeatherDecoder,
    PressureDecoder, RecentWeatherDecoder, RemarksDecoder, ReportStatusDecoder, ReportTypeDecoder,
    RunwayVisualRangeDecoder, SurfaceWindDecoder, TemperatureDecoder, VisibilityDecoder,
    WindShearDecoder,
};
use crate::error::{MetarError, Result};
use crate::models::{ChunkKind, DecodedMetar};
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// Order decoders run in.
///
/// Remarks go first so free text is never read as coded groups. The station
/// runs before present weather and report status, whose codes can also form
/// four-letter tokens.
pub const DECODING_ORDER: [ChunkKind; 14] = [
    ChunkKind::Remarks,
    ChunkKind::ReportType,
    ChunkKind::Icao,
    ChunkKind::Datetime,
    ChunkKind::ReportStatus,
    ChunkKind::SurfaceWind,
    ChunkKind::Visibility,
    ChunkKind::RunwayVisualRange,
    ChunkKind::PresentWeather,
    ChunkKind::Clouds,
    ChunkKind::Temperature,
    ChunkKind::Pressure,
    ChunkKind::RecentWeather,
    ChunkKind::WindShear,
];

/// Outcome of decoding one line of a batch
#[derive(Debug)]
pub struct BatchEntry {
    /// One-based line number in the input
    pub line: usize,
    pub result: Result<DecodedMetar>,
}

/// Decoder for complete METAR reports
#[derive(Debug, Clone, Default)]
pub struct MetarDecoder {
    config: DecoderConfig,
}

impl MetarDecoder {
    /// Create a decoder, validating its configuration
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one raw report
    pub fn decode(&self, raw: &str) -> Result<DecodedMetar> {
        let mut remaining = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if remaining.is_empty() {
            return Err(MetarError::EmptyReport);
        }

        let mut metar = DecodedMetar::new(remaining.clone());
        debug!("Decoding '{}'", metar.raw);

        for kind in DECODING_ORDER {
            if self.config.stop_on_nil && metar.is_nil() {
                debug!("NIL report, skipping remaining chunks");
                break;
            }

            match decode_chunk(kind, &remaining, &mut metar) {
                Ok(next) => remaining = next,
                Err(error) => self.record(&mut metar, error)?,
            }
        }

        if !(self.config.stop_on_nil && metar.is_nil()) {
            for &kind in &self.config.mandatory_chunks {
                let already_failed = metar.errors.iter().any(|e| e.chunk() == Some(kind));
                if !metar.has_chunk(kind) && !already_failed {
                    self.record(&mut metar, MetarError::MissingChunk { chunk: kind })?;
                }
            }
        }

        if !remaining.is_empty() {
            debug!("Unrecognized text: '{}'", remaining);
        }
        metar.unrecognized = remaining;

        Ok(metar)
    }

    /// Decode independent reports, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn decode_batch<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Vec<BatchEntry> {
        lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| BatchEntry {
                line: index + 1,
                result: self.decode(line),
            })
            .collect()
    }

    /// Fail in strict mode, otherwise keep the error with the report
    fn record(&self, metar: &mut DecodedMetar, error: MetarError) -> Result<()> {
        if self.config.strict {
            return Err(error);
        }
        warn!("{}", error);
        metar.errors.push(error);
        Ok(())
    }
}

/// Run the decoder for `kind` and store its chunk, returning the text left
fn decode_chunk(kind: ChunkKind, remaining: &str, metar: &mut DecodedMetar) -> Result<String> {
    match kind {
        ChunkKind::ReportType => store(&ReportTypeDecoder, remaining, &mut metar.report_type),
        ChunkKind::Icao => store(&IcaoDecoder, remaining, &mut metar.icao),
        ChunkKind::Datetime => store(&DatetimeDecoder, remaining, &mut metar.datetime),
        ChunkKind::ReportStatus => store(&ReportStatusDecoder, remaining, &mut metar.status),
        ChunkKind::SurfaceWind => store(&SurfaceWindDecoder, remaining, &mut metar.surface_wind),
        ChunkKind::Visibility => store(&VisibilityDecoder, remaining, &mut metar.visibility),
        ChunkKind::RunwayVisualRange => store(
            &RunwayVisualRangeDecoder,
            remaining,
            &mut metar.runway_visual_range,
        ),
        ChunkKind::PresentWeather => {
            store(&PresentWeatherDecoder, remaining, &mut metar.present_weather)
        }
        ChunkKind::Clouds => store(&CloudDecoder, remaining, &mut metar.clouds),
        ChunkKind::Temperature => store(&TemperatureDecoder, remaining, &mut metar.temperature),
        ChunkKind::Pressure => store(&PressureDecoder, remaining, &mut metar.pressure),
        ChunkKind::RecentWeather => {
            store(&RecentWeatherDecoder, remaining, &mut metar.recent_weather)
        }
        ChunkKind::WindShear => store(&WindShearDecoder, remaining, &mut metar.wind_shear),
        ChunkKind::Remarks => store(&RemarksDecoder, remaining, &mut metar.remarks),
    }
}

fn store<D>(decoder: &D, remaining: &str, slot: &mut Option<D::Chunk>) -> Result<String>
where
    D: ChunkDecoder,
    D::Chunk: Debug,
{
    let decoded = decoder.parse(remaining)?;
    match decoded.result {
        Some(chunk) => {
            debug!("Decoded {}: {:?}", decoder.kind(), chunk);
            *slot = Some(chunk);
        }
        None => trace!("No {} information", decoder.kind()),
    }
    Ok(decoded.remaining_metar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Unit;
    use crate::models::{ReportStatus, ReportType, WindDirection};

    const FULL_REPORT: &str = "METAR LFPO 231027Z AUTO 24004G09MPS 2500 1000NW R32/0400 R08C/0004D +FZRA VCSN FEW015 17/10 Q1009 REFZRA WS R03";

    #[test]
    fn test_decoding_order_covers_every_kind_once() {
        for kind in DECODING_ORDER {
            assert_eq!(
                DECODING_ORDER.iter().filter(|k| **k == kind).count(),
                1,
                "{kind} appears more than once"
            );
        }
        assert_eq!(DECODING_ORDER[0], ChunkKind::Remarks);
    }

    #[test]
    fn test_decode_full_report() {
        let metar = MetarDecoder::default()
            .decode("METAR LFPO 231027Z AUTO 24004G09MPS 2500 1000NW R32/0400 +FZRA BKN015 17/10 Q1009 RMK AO2")
            .unwrap();

        assert!(metar.is_valid(), "errors: {:?}", metar.errors);
        assert_eq!(
            metar.report_type.as_ref().map(|c| c.report_type),
            Some(ReportType::Metar)
        );
        assert_eq!(metar.icao.as_ref().unwrap().station, "LFPO");
        assert_eq!(metar.datetime.as_ref().unwrap().day, 23);
        assert_eq!(metar.status, Some(ReportStatus::Auto));

        let wind = metar.surface_wind.as_ref().unwrap();
        assert_eq!(wind.direction, WindDirection::Degrees(240));
        assert_eq!(wind.speed.unwrap().unit(), Unit::MeterPerSecond);
        assert_eq!(wind.gust.unwrap().value(), 9.0);

        let visibility = metar.visibility.as_ref().unwrap();
        assert_eq!(visibility.visibility.unwrap().value(), 2500.0);
        assert_eq!(visibility.minimum_visibility.unwrap().value(), 1000.0);

        assert_eq!(metar.runway_visual_range.as_ref().unwrap().runways.len(), 1);
        assert_eq!(metar.present_weather.as_ref().unwrap().groups.len(), 1);
        assert_eq!(metar.clouds.as_ref().unwrap().layers.len(), 1);
        assert_eq!(metar.temperature.as_ref().unwrap().air_temperature, 17);
        assert_eq!(
            metar.pressure.as_ref().unwrap().pressure.unwrap().value(),
            1009.0
        );
        assert_eq!(metar.remarks.as_ref().unwrap().text, "AO2");
        assert_eq!(metar.unrecognized, "");
    }

    #[test]
    fn test_strict_mode_aborts_on_malformed_chunk() {
        let decoder = MetarDecoder::new(DecoderConfig::default().with_strict(true)).unwrap();
        let result = decoder.decode("METAR LFPO 231027Z 24004KT CAVO 17/10 Q1009");
        match result {
            Err(MetarError::MalformedChunk {
                chunk, offending, ..
            }) => {
                assert_eq!(chunk, ChunkKind::Visibility);
                assert_eq!(offending, "CAVO");
            }
            other => panic!("Expected MalformedChunk, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_mode_collects_errors_and_continues() {
        let metar = MetarDecoder::default()
            .decode("METAR LFPO 231027Z 24004KT CAVO 17/10 Q1009")
            .unwrap();

        assert!(!metar.is_valid());
        assert_eq!(metar.errors.len(), 1);
        assert_eq!(metar.errors[0].chunk(), Some(ChunkKind::Visibility));
        assert!(metar.temperature.is_some());
        assert!(metar.pressure.is_some());
        assert_eq!(metar.unrecognized, "CAVO");
    }

    #[test]
    fn test_missing_mandatory_chunk() {
        let metar = MetarDecoder::default()
            .decode("METAR LFPO 231027Z 24004KT 9999 17/10")
            .unwrap();

        assert_eq!(metar.errors.len(), 1);
        assert!(matches!(
            metar.errors[0],
            MetarError::MissingChunk {
                chunk: ChunkKind::Pressure
            }
        ));
    }

    #[test]
    fn test_report_without_station_keeps_status() {
        let metar = MetarDecoder::default()
            .decode("231027Z AUTO 24004KT 9999 17/10 Q1009")
            .unwrap();

        assert!(metar.icao.is_none());
        assert_eq!(metar.status, Some(ReportStatus::Auto));
        assert_eq!(metar.errors.len(), 1);
        assert!(matches!(
            metar.errors[0],
            MetarError::MissingChunk {
                chunk: ChunkKind::Icao
            }
        ));
        assert_eq!(metar.unrecognized, "");
    }

    #[test]
    fn test_report_without_station_keeps_weather() {
        let metar = MetarDecoder::default()
            .decode("231027Z 24004KT 9999 SHRA 17/10 Q1009")
            .unwrap();

        assert!(metar.icao.is_none());
        assert_eq!(metar.present_weather.unwrap().groups.len(), 1);
        assert_eq!(metar.errors.len(), 1);
        assert_eq!(metar.errors[0].chunk(), Some(ChunkKind::Icao));
    }

    #[test]
    fn test_weather_not_reported_is_consumed() {
        let metar = MetarDecoder::default()
            .decode("LFPO 231027Z AUTO 24004KT 9999 // NCD 17/10 Q1009")
            .unwrap();

        assert!(metar.is_valid(), "errors: {:?}", metar.errors);
        assert!(metar.present_weather.unwrap().groups[0].not_reported);
        assert_eq!(metar.unrecognized, "");
    }

    #[test]
    fn test_nil_report_stops_decoding() {
        let metar = MetarDecoder::default()
            .decode("METAR LFPO 231027Z NIL")
            .unwrap();

        assert!(metar.is_valid());
        assert!(metar.is_nil());
        assert!(metar.surface_wind.is_none());
    }

    #[test]
    fn test_empty_report() {
        assert!(matches!(
            MetarDecoder::default().decode("   \t "),
            Err(MetarError::EmptyReport)
        ));
    }

    #[test]
    fn test_whitespace_is_normalised() {
        let metar = MetarDecoder::default()
            .decode("  LFPO   231027Z\t24004KT  CAVOK 17/10   Q1009 ")
            .unwrap();
        assert!(metar.is_valid());
        assert_eq!(metar.raw, "LFPO 231027Z 24004KT CAVOK 17/10 Q1009");
    }

    #[test]
    fn test_decode_batch_skips_comments_and_blank_lines() {
        let input = "# header\nLFPO 231027Z 24004KT CAVOK 17/10 Q1009\n\nLFPB 231030Z 00000KT 9999 M02/M04 Q1022\n";
        let entries = MetarDecoder::default().decode_batch(input.lines());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].line, 4);
        assert!(entries.iter().all(|entry| entry.result.is_ok()));
    }

    #[test]
    fn test_every_group_of_full_report_is_consumed() {
        let metar = MetarDecoder::default().decode(FULL_REPORT).unwrap();
        assert!(metar.is_valid(), "errors: {:?}", metar.errors);
        assert_eq!(metar.unrecognized, "");
        assert_eq!(metar.runway_visual_range.unwrap().runways.len(), 2);
        assert_eq!(metar.present_weather.unwrap().groups.len(), 2);
        assert!(metar.recent_weather.is_some());
        assert_eq!(metar.wind_shear.unwrap().runways, vec!["03".to_string()]);
    }
}

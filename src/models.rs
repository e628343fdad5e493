//! Core data structures and types for METAR decoding.
//!
//! Defines the chunk kinds, the typed chunk produced by each decoder, the
//! coded vocabularies those chunks are built from, and the decoded report
//! assembled by the orchestrator.

use crate::error::MetarError;
use crate::measurement::Measurement;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic groups a METAR report is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkKind {
    ReportType,
    Icao,
    Datetime,
    ReportStatus,
    SurfaceWind,
    Visibility,
    RunwayVisualRange,
    PresentWeather,
    Clouds,
    Temperature,
    Pressure,
    RecentWeather,
    WindShear,
    Remarks,
}

impl ChunkKind {
    /// Human-readable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ChunkKind::ReportType => "report type",
            ChunkKind::Icao => "station",
            ChunkKind::Datetime => "datetime",
            ChunkKind::ReportStatus => "report status",
            ChunkKind::SurfaceWind => "surface wind",
            ChunkKind::Visibility => "visibility",
            ChunkKind::RunwayVisualRange => "runway visual range",
            ChunkKind::PresentWeather => "present weather",
            ChunkKind::Clouds => "clouds",
            ChunkKind::Temperature => "temperature",
            ChunkKind::Pressure => "pressure",
            ChunkKind::RecentWeather => "recent weather",
            ChunkKind::WindShear => "wind shear",
            ChunkKind::Remarks => "remarks",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Coded vocabularies
// =============================================================================

/// Eight-point compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::N),
            "NE" => Some(Self::NE),
            "E" => Some(Self::E),
            "SE" => Some(Self::SE),
            "S" => Some(Self::S),
            "SW" => Some(Self::SW),
            "W" => Some(Self::W),
            "NW" => Some(Self::NW),
            _ => None,
        }
    }
}

/// Intensity or proximity prefix of a weather group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Light,
    Heavy,
    InVicinity,
}

impl Intensity {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "-" => Some(Self::Light),
            "+" => Some(Self::Heavy),
            "VC" => Some(Self::InVicinity),
            _ => None,
        }
    }
}

/// Weather descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherDescriptor {
    Shallow,
    Patches,
    Partial,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

impl WeatherDescriptor {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MI" => Some(Self::Shallow),
            "BC" => Some(Self::Patches),
            "PR" => Some(Self::Partial),
            "DR" => Some(Self::LowDrifting),
            "BL" => Some(Self::Blowing),
            "SH" => Some(Self::Showers),
            "TS" => Some(Self::Thunderstorm),
            "FZ" => Some(Self::Freezing),
            _ => None,
        }
    }
}

/// Weather phenomenon: precipitation, obscuration or other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCode {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    UnknownPrecipitation,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
}

impl WeatherCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DZ" => Some(Self::Drizzle),
            "RA" => Some(Self::Rain),
            "SN" => Some(Self::Snow),
            "SG" => Some(Self::SnowGrains),
            "IC" => Some(Self::IceCrystals),
            "PL" => Some(Self::IcePellets),
            "GR" => Some(Self::Hail),
            "GS" => Some(Self::SmallHail),
            "UP" => Some(Self::UnknownPrecipitation),
            "BR" => Some(Self::Mist),
            "FG" => Some(Self::Fog),
            "FU" => Some(Self::Smoke),
            "VA" => Some(Self::VolcanicAsh),
            "DU" => Some(Self::Dust),
            "SA" => Some(Self::Sand),
            "HZ" => Some(Self::Haze),
            "PY" => Some(Self::Spray),
            "PO" => Some(Self::DustWhirls),
            "SQ" => Some(Self::Squalls),
            "FC" => Some(Self::FunnelCloud),
            "SS" => Some(Self::Sandstorm),
            "DS" => Some(Self::Duststorm),
            _ => None,
        }
    }

    /// Split a run of two-letter phenomenon codes (`RASN`) into codes
    pub fn parse_run(run: &str) -> Option<Vec<Self>> {
        if run.len() % 2 != 0 {
            return None;
        }
        (0..run.len())
            .step_by(2)
            .map(|i| run.get(i..i + 2).and_then(Self::from_code))
            .collect()
    }
}

/// Amount of sky covered by a cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudAmount {
    Few,
    Scattered,
    Broken,
    Overcast,
}

impl CloudAmount {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(Self::Few),
            "SCT" => Some(Self::Scattered),
            "BKN" => Some(Self::Broken),
            "OVC" => Some(Self::Overcast),
            _ => None,
        }
    }
}

/// Convective cloud type attached to a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudType {
    Cumulonimbus,
    ToweringCumulus,
}

impl CloudType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CB" => Some(Self::Cumulonimbus),
            "TCU" => Some(Self::ToweringCumulus),
            _ => None,
        }
    }
}

/// Reason no cloud layer is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoCloud {
    NoSignificantCloud,
    NoCloudDetected,
    Clear,
    SkyClear,
}

impl NoCloud {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NSC" => Some(Self::NoSignificantCloud),
            "NCD" => Some(Self::NoCloudDetected),
            "CLR" => Some(Self::Clear),
            "SKC" => Some(Self::SkyClear),
            _ => None,
        }
    }
}

// =============================================================================
// Chunks
// =============================================================================

/// Kind of routine or special report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    Metar,
    Speci,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTypeChunk {
    pub report_type: ReportType,
    pub corrected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcaoChunk {
    pub station: String,
}

/// Observation day of month and UTC time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatetimeChunk {
    pub day: u8,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Missing report
    Nil,
    /// Fully automated report
    Auto,
}

/// Mean wind direction of a surface wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    Degrees(u16),
    Variable,
    NotReported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceWindChunk {
    pub direction: WindDirection,
    /// `None` when the speed is not reported (`//`)
    pub speed: Option<Measurement>,
    /// Speed exceeds the reportable maximum (`P` prefix)
    pub speed_above: bool,
    pub gust: Option<Measurement>,
    /// Extreme directions of a variable wind, clockwise
    pub direction_variation: Option<(u16, u16)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityChunk {
    pub cavok: bool,
    pub visibility: Option<Measurement>,
    /// Visibility is below (`M`) or above (`P`) the reported value
    pub bound: Option<RangeBound>,
    /// No directional variation can be given (`NDV`)
    pub ndv: bool,
    pub minimum_visibility: Option<Measurement>,
    pub minimum_visibility_direction: Option<CompassDirection>,
}

/// Qualifier of a visibility or runway visual range value outside the
/// measurable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeBound {
    /// Greater than the highest measurable value (`P`)
    Above,
    /// Less than the lowest measurable value (`M`)
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    pub distance: Measurement,
    pub bound: Option<RangeBound>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisualRange {
    Fixed(RangeValue),
    Variable { min: RangeValue, max: RangeValue },
}

/// Trend of the runway visual range over the past ten minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tendency {
    Upward,
    Downward,
    NoChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayVisualRange {
    pub runway: String,
    pub range: VisualRange,
    pub tendency: Option<Tendency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayVisualRangeChunk {
    pub runways: Vec<RunwayVisualRange>,
}

/// One present or recent weather group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPhenomenon {
    pub intensity: Option<Intensity>,
    pub descriptor: Option<WeatherDescriptor>,
    pub phenomena: Vec<WeatherCode>,
    /// Weather could not be observed (`//`)
    pub not_reported: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentWeatherChunk {
    pub groups: Vec<WeatherPhenomenon>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// `None` when the amount is not reported (`///`)
    pub amount: Option<CloudAmount>,
    pub base_height: Option<Measurement>,
    pub cloud_type: Option<CloudType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudChunk {
    pub no_cloud: Option<NoCloud>,
    pub layers: Vec<CloudLayer>,
    /// Sky is obscured and a vertical visibility group is given
    pub sky_obscured: bool,
    pub vertical_visibility: Option<Measurement>,
}

/// Air temperature and dew point in whole degrees Celsius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureChunk {
    pub air_temperature: i32,
    pub dew_point: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureChunk {
    /// `None` when the pressure is not reported (`////`)
    pub pressure: Option<Measurement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentWeatherChunk {
    pub weather: WeatherPhenomenon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindShearChunk {
    pub all_runways: bool,
    pub runways: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemarksChunk {
    pub text: String,
}

// =============================================================================
// Decoded report
// =============================================================================

/// A report with every chunk the decoders could extract
#[derive(Debug, Default)]
pub struct DecodedMetar {
    pub raw: String,
    pub report_type: Option<ReportTypeChunk>,
    pub icao: Option<IcaoChunk>,
    pub datetime: Option<DatetimeChunk>,
    pub status: Option<ReportStatus>,
    pub surface_wind: Option<SurfaceWindChunk>,
    pub visibility: Option<VisibilityChunk>,
    pub runway_visual_range: Option<RunwayVisualRangeChunk>,
    pub present_weather: Option<PresentWeatherChunk>,
    pub clouds: Option<CloudChunk>,
    pub temperature: Option<TemperatureChunk>,
    pub pressure: Option<PressureChunk>,
    pub recent_weather: Option<RecentWeatherChunk>,
    pub wind_shear: Option<WindShearChunk>,
    pub remarks: Option<RemarksChunk>,
    /// Text no decoder recognised
    pub unrecognized: String,
    /// Errors collected while decoding in lenient mode
    pub errors: Vec<MetarError>,
}

impl DecodedMetar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Default::default()
        }
    }

    /// True when decoding raised no error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether a chunk of the given kind was decoded
    pub fn has_chunk(&self, kind: ChunkKind) -> bool {
        match kind {
            ChunkKind::ReportType => self.report_type.is_some(),
            ChunkKind::Icao => self.icao.is_some(),
            ChunkKind::Datetime => self.datetime.is_some(),
            ChunkKind::ReportStatus => self.status.is_some(),
            ChunkKind::SurfaceWind => self.surface_wind.is_some(),
            ChunkKind::Visibility => self.visibility.is_some(),
            ChunkKind::RunwayVisualRange => self.runway_visual_range.is_some(),
            ChunkKind::PresentWeather => self.present_weather.is_some(),
            ChunkKind::Clouds => self.clouds.is_some(),
            ChunkKind::Temperature => self.temperature.is_some(),
            ChunkKind::Pressure => self.pressure.is_some(),
            ChunkKind::RecentWeather => self.recent_weather.is_some(),
            ChunkKind::WindShear => self.wind_shear.is_some(),
            ChunkKind::Remarks => self.remarks.is_some(),
        }
    }

    /// Whether the station reported a missing observation (`NIL`)
    pub fn is_nil(&self) -> bool {
        self.status == Some(ReportStatus::Nil)
    }
}

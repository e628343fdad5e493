//! Application constants for the METAR decoder
//!
//! This module contains conversion rates, coded-group vocabularies used to
//! build the chunk patterns, and default values used throughout the decoder.

// =============================================================================
// Unit Conversion Rates
// =============================================================================

/// Multiplicative conversion rates between units, as tabulated by the
/// measurement conversion table
pub mod rates {
    /// Meters in one statute mile
    pub const METERS_PER_STATUTE_MILE: f64 = 1609.34;

    /// Statute miles in one meter
    pub const STATUTE_MILES_PER_METER: f64 = 0.000621371;

    /// Feet in one statute mile
    pub const FEET_PER_STATUTE_MILE: f64 = 5280.0;

    /// Feet in one meter
    pub const FEET_PER_METER: f64 = 3.28084;

    /// Meters in one foot
    pub const METERS_PER_FOOT: f64 = 0.3048;

    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;

    /// Kilometers in one meter
    pub const KILOMETERS_PER_METER: f64 = 0.001;

    /// Meters per second in one knot
    pub const MPS_PER_KNOT: f64 = 0.514444;

    /// Kilometers per hour in one knot
    pub const KPH_PER_KNOT: f64 = 1.852;

    /// Knots in one meter per second
    pub const KNOTS_PER_MPS: f64 = 1.943844;

    /// Kilometers per hour in one meter per second
    pub const KPH_PER_MPS: f64 = 3.6;

    /// Knots in one kilometer per hour
    pub const KNOTS_PER_KPH: f64 = 0.539957;

    /// Meters per second in one kilometer per hour
    pub const MPS_PER_KPH: f64 = 0.277778;

    /// Inches of mercury in one hectopascal
    pub const INHG_PER_HPA: f64 = 0.02953;

    /// Hectopascals in one inch of mercury
    pub const HPA_PER_INHG: f64 = 33.8639;
}

/// Decimal places kept by converted values
pub const CONVERSION_PRECISION: i32 = 3;

// =============================================================================
// Coded Group Vocabularies
// =============================================================================

/// Placeholder character for "not reported" fields
pub const MISSING_DATA_CHAR: char = '/';

/// Ceiling and visibility OK token
pub const CAVOK: &str = "CAVOK";

/// Remarks section marker
pub const REMARKS_MARKER: &str = "RMK";

/// Weather descriptor codes (regex alternation)
pub const WEATHER_DESCRIPTORS: &str = "MI|BC|PR|DR|BL|SH|TS|FZ";

/// Weather phenomenon codes (regex alternation)
pub const WEATHER_PHENOMENA: &str =
    "DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS";

/// Compass direction codes, longest first so two-letter codes win
pub const COMPASS_DIRECTIONS: &str = "NE|NW|SE|SW|N|E|S|W";

/// Cloud amount codes for a reported layer
pub const CLOUD_AMOUNTS: &str = "FEW|SCT|BKN|OVC";

/// Tokens reporting no cloud at all
pub const NO_CLOUD_TOKENS: &str = "NSC|NCD|CLR|SKC";

// =============================================================================
// Group Limits
// =============================================================================

/// Maximum number of runway visual range groups in one report
pub const MAX_RUNWAY_GROUPS: usize = 4;

/// Maximum number of present weather groups in one report
pub const MAX_WEATHER_GROUPS: usize = 3;

/// Maximum number of cloud layers in one report
pub const MAX_CLOUD_LAYERS: usize = 6;

/// Highest runway designator number
pub const MAX_RUNWAY_NUMBER: u8 = 36;

/// Cloud base heights are coded in hundreds of feet
pub const CLOUD_HEIGHT_FACTOR: f64 = 100.0;

/// Altimeter settings are coded in hundredths of inches of mercury
pub const ALTIMETER_FACTOR: f64 = 100.0;

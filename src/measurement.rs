//! Physical quantities tagged with their unit.
//!
//! A [`Measurement`] is built once by a decoder from coded text and is
//! read-only afterwards. Conversion goes through a single lookup in
//! [`CONVERSION_RATES`]; pairs that are not tabulated fail rather than being
//! chained through an intermediate unit.

use crate::constants::{CONVERSION_PRECISION, rates};
use crate::error::{MetarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units of measurement understood by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Meter,
    StatuteMile,
    Kilometer,
    Feet,
    Knot,
    MeterPerSecond,
    KilometerPerHour,
    HectoPascal,
    MercuryInch,
}

impl Unit {
    /// Symbol used in reports and display
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::StatuteMile => "SM",
            Unit::Kilometer => "km",
            Unit::Feet => "ft",
            Unit::Knot => "kt",
            Unit::MeterPerSecond => "m/s",
            Unit::KilometerPerHour => "km/h",
            Unit::HectoPascal => "hPa",
            Unit::MercuryInch => "inHg",
        }
    }

    /// Unit of a surface wind group suffix (`KT`, `MPS`, `KPH`)
    pub fn from_wind_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "KT" => Some(Unit::Knot),
            "MPS" => Some(Unit::MeterPerSecond),
            "KPH" => Some(Unit::KilometerPerHour),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Tabulated conversion rates. Only the listed `(from, to)` pairs convert.
pub static CONVERSION_RATES: &[(Unit, Unit, f64)] = &[
    // Distance
    (Unit::Meter, Unit::Meter, 1.0),
    (Unit::Meter, Unit::StatuteMile, rates::STATUTE_MILES_PER_METER),
    (Unit::Meter, Unit::Kilometer, rates::KILOMETERS_PER_METER),
    (Unit::Meter, Unit::Feet, rates::FEET_PER_METER),
    (Unit::StatuteMile, Unit::StatuteMile, 1.0),
    (Unit::StatuteMile, Unit::Meter, rates::METERS_PER_STATUTE_MILE),
    (Unit::StatuteMile, Unit::Feet, rates::FEET_PER_STATUTE_MILE),
    (Unit::Kilometer, Unit::Kilometer, 1.0),
    (Unit::Kilometer, Unit::Meter, rates::METERS_PER_KILOMETER),
    (Unit::Feet, Unit::Feet, 1.0),
    (Unit::Feet, Unit::Meter, rates::METERS_PER_FOOT),
    // Speed
    (Unit::Knot, Unit::Knot, 1.0),
    (Unit::Knot, Unit::MeterPerSecond, rates::MPS_PER_KNOT),
    (Unit::Knot, Unit::KilometerPerHour, rates::KPH_PER_KNOT),
    (Unit::MeterPerSecond, Unit::MeterPerSecond, 1.0),
    (Unit::MeterPerSecond, Unit::Knot, rates::KNOTS_PER_MPS),
    (Unit::MeterPerSecond, Unit::KilometerPerHour, rates::KPH_PER_MPS),
    (Unit::KilometerPerHour, Unit::KilometerPerHour, 1.0),
    (Unit::KilometerPerHour, Unit::Knot, rates::KNOTS_PER_KPH),
    (Unit::KilometerPerHour, Unit::MeterPerSecond, rates::MPS_PER_KPH),
    // Pressure
    (Unit::HectoPascal, Unit::HectoPascal, 1.0),
    (Unit::HectoPascal, Unit::MercuryInch, rates::INHG_PER_HPA),
    (Unit::MercuryInch, Unit::MercuryInch, 1.0),
    (Unit::MercuryInch, Unit::HectoPascal, rates::HPA_PER_INHG),
];

/// Look up the rate for an exact unit pair
pub fn conversion_rate(from: Unit, to: Unit) -> Result<f64> {
    CONVERSION_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
        .ok_or(MetarError::UndefinedConversion { from, to })
}

/// A non-negative value with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        debug_assert!(value >= 0.0, "measurements are non-negative");
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Value expressed in `target`, rounded to thousandths
    pub fn convert(&self, target: Unit) -> Result<f64> {
        let rate = conversion_rate(self.unit, target)?;
        let scale = 10f64.powi(CONVERSION_PRECISION);
        Ok((self.value * rate * scale).round() / scale)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_every_tabulated_pair_applies_its_rate() {
        for (from, to, rate) in CONVERSION_RATES {
            let measurement = Measurement::new(10.0, *from);
            let expected = (10.0 * rate * 1000.0).round() / 1000.0;
            assert_close(measurement.convert(*to).unwrap(), expected);
        }
    }

    #[test]
    fn test_statute_miles_to_meters() {
        assert_close(
            Measurement::new(10.0, Unit::StatuteMile)
                .convert(Unit::Meter)
                .unwrap(),
            16093.4,
        );
        assert_close(
            Measurement::new(1.25, Unit::StatuteMile)
                .convert(Unit::Meter)
                .unwrap(),
            2011.675,
        );
        assert_close(
            Measurement::new(0.75, Unit::StatuteMile)
                .convert(Unit::Meter)
                .unwrap(),
            1207.005,
        );
    }

    #[test]
    fn test_meters_to_statute_miles_rounds_to_thousandths() {
        let cases = [(200.0, 0.124), (8000.0, 4.971), (2500.0, 1.553)];
        for (meters, miles) in cases {
            let converted = Measurement::new(meters, Unit::Meter)
                .convert(Unit::StatuteMile)
                .unwrap();
            assert_close(converted, miles);
        }
    }

    #[test]
    fn test_conversion_is_single_hop() {
        let result = Measurement::new(3.0, Unit::StatuteMile).convert(Unit::Kilometer);
        match result {
            Err(MetarError::UndefinedConversion { from, to }) => {
                assert_eq!(from, Unit::StatuteMile);
                assert_eq!(to, Unit::Kilometer);
            }
            other => panic!("Expected UndefinedConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_conversion_across_quantities_fails() {
        let err = Measurement::new(200.0, Unit::Meter)
            .convert(Unit::Knot)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conversion rate between \"m\" and \"kt\" is not defined."
        );
    }

    #[test]
    fn test_conversion_does_not_mutate_original() {
        let measurement = Measurement::new(1013.0, Unit::HectoPascal);
        let _ = measurement.convert(Unit::MercuryInch).unwrap();
        assert_eq!(measurement.value(), 1013.0);
        assert_eq!(measurement.unit(), Unit::HectoPascal);
    }

    #[test]
    fn test_wind_suffix_units() {
        assert_eq!(Unit::from_wind_suffix("KT"), Some(Unit::Knot));
        assert_eq!(Unit::from_wind_suffix("MPS"), Some(Unit::MeterPerSecond));
        assert_eq!(Unit::from_wind_suffix("KPH"), Some(Unit::KilometerPerHour));
        assert_eq!(Unit::from_wind_suffix("MPH"), None);
    }
}

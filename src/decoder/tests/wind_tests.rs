//! Tests for surface wind and wind shear decoding

use super::*;
use crate::decoder::{SurfaceWindDecoder, WindShearDecoder};
use crate::models::WindDirection;

#[test]
fn test_wind_in_meters_per_second_with_gust() {
    let decoded = decode_ok(&SurfaceWindDecoder, "24004G09MPS 2500");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.direction, WindDirection::Degrees(240));
    assert_eq!(chunk.speed, Some(Measurement::new(4.0, Unit::MeterPerSecond)));
    assert_eq!(chunk.gust, Some(Measurement::new(9.0, Unit::MeterPerSecond)));
    assert!(!chunk.speed_above);
    assert_eq!(decoded.remaining_metar, "2500");
}

#[test]
fn test_variable_direction_range() {
    let decoded = decode_ok(&SurfaceWindDecoder, "AAA 31015KT 280V350 BBB");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.direction, WindDirection::Degrees(310));
    assert_eq!(chunk.speed, Some(Measurement::new(15.0, Unit::Knot)));
    assert_eq!(chunk.direction_variation, Some((280, 350)));
    assert_eq!(decoded.remaining_metar, "AAA BBB");
}

#[test]
fn test_variable_and_not_reported() {
    let chunk = decode_ok(&SurfaceWindDecoder, "VRB02KT").result.unwrap();
    assert_eq!(chunk.direction, WindDirection::Variable);

    let chunk = decode_ok(&SurfaceWindDecoder, "/////KT").result.unwrap();
    assert_eq!(chunk.direction, WindDirection::NotReported);
    assert_eq!(chunk.speed, None);
}

#[test]
fn test_speed_above_and_kph() {
    let chunk = decode_ok(&SurfaceWindDecoder, "090P99KPH").result.unwrap();
    assert!(chunk.speed_above);
    assert_eq!(chunk.speed, Some(Measurement::new(99.0, Unit::KilometerPerHour)));
}

#[test]
fn test_wind_speed_converts() {
    let chunk = decode_ok(&SurfaceWindDecoder, "18010KT").result.unwrap();
    let speed = chunk.speed.unwrap();
    assert_eq!(speed.convert(Unit::MeterPerSecond).unwrap(), 5.144);
    assert_eq!(speed.convert(Unit::KilometerPerHour).unwrap(), 18.52);
}

#[test]
fn test_direction_above_360_is_malformed() {
    assert_malformed(&SurfaceWindDecoder, "37010KT");
}

#[test]
fn test_garbled_wind_is_malformed() {
    assert_malformed(&SurfaceWindDecoder, "2401KT");
}

#[test]
fn test_wind_absent() {
    assert_absent(&SurfaceWindDecoder, "AAA 2500");
}

#[test]
fn test_wind_shear_runways() {
    let decoded = decode_ok(&WindShearDecoder, "AAA WS R03 WS RWY27L");
    let chunk = decoded.result.unwrap();
    assert!(!chunk.all_runways);
    assert_eq!(chunk.runways, vec!["03".to_string(), "27L".to_string()]);
    assert_eq!(decoded.remaining_metar, "AAA");
}

#[test]
fn test_wind_shear_all_runways() {
    let chunk = decode_ok(&WindShearDecoder, "WS ALL RWY").result.unwrap();
    assert!(chunk.all_runways);
    assert!(chunk.runways.is_empty());
}

#[test]
fn test_wind_shear_absent() {
    assert_absent(&WindShearDecoder, "WS AAA");
}

//! Tests for report type, station, time, status and remarks decoding

use super::*;
use crate::decoder::{
    DatetimeDecoder, IcaoDecoder, RemarksDecoder, ReportStatusDecoder, ReportTypeDecoder,
};
use crate::models::{ReportStatus, ReportType};
use chrono::NaiveTime;

#[test]
fn test_report_type() {
    let decoded = decode_ok(&ReportTypeDecoder, "METAR LFPO");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.report_type, ReportType::Metar);
    assert!(!chunk.corrected);
    assert_eq!(decoded.remaining_metar, "LFPO");
}

#[test]
fn test_corrected_special_report() {
    let decoded = decode_ok(&ReportTypeDecoder, "SPECI COR LFPO");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.report_type, ReportType::Speci);
    assert!(chunk.corrected);
    assert_eq!(decoded.remaining_metar, "LFPO");
}

#[test]
fn test_report_type_absent() {
    assert_absent(&ReportTypeDecoder, "LFPO 231027Z");
}

#[test]
fn test_icao_station() {
    let decoded = decode_ok(&IcaoDecoder, "LFPO 231027Z");
    assert_eq!(decoded.result.unwrap().station, "LFPO");
    assert_eq!(decoded.remaining_metar, "231027Z");
}

#[test]
fn test_icao_absent() {
    assert_absent(&IcaoDecoder, "231027Z 1234");
}

#[test]
fn test_datetime() {
    let decoded = decode_ok(&DatetimeDecoder, "231027Z AUTO");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.day, 23);
    assert_eq!(chunk.time, NaiveTime::from_hms_opt(10, 27, 0).unwrap());
    assert_eq!(decoded.remaining_metar, "AUTO");
}

#[test]
fn test_invalid_datetime_values_are_malformed() {
    assert_malformed(&DatetimeDecoder, "321027Z");
    assert_malformed(&DatetimeDecoder, "232527Z");
    assert_malformed(&DatetimeDecoder, "231061Z");
}

#[test]
fn test_short_datetime_is_malformed() {
    assert_malformed(&DatetimeDecoder, "2310Z");
}

#[test]
fn test_report_status() {
    let decoded = decode_ok(&ReportStatusDecoder, "AUTO 24004KT");
    assert_eq!(decoded.result, Some(ReportStatus::Auto));
    assert_eq!(decoded.remaining_metar, "24004KT");

    let decoded = decode_ok(&ReportStatusDecoder, "NIL");
    assert_eq!(decoded.result, Some(ReportStatus::Nil));
    assert_eq!(decoded.remaining_metar, "");
}

#[test]
fn test_remarks_take_rest_of_report() {
    let decoded = decode_ok(&RemarksDecoder, "Q1009 RMK AO2 SLP013");
    assert_eq!(decoded.result.unwrap().text, "AO2 SLP013");
    assert_eq!(decoded.remaining_metar, "Q1009");
}

#[test]
fn test_empty_remarks() {
    let decoded = decode_ok(&RemarksDecoder, "Q1009 RMK");
    assert_eq!(decoded.result.unwrap().text, "");
    assert_eq!(decoded.remaining_metar, "Q1009");
}

#[test]
fn test_icao_skips_status_and_weather_tokens() {
    let decoded = decode_ok(&IcaoDecoder, "AUTO SHRA RERA LFPO 9999");
    assert_eq!(decoded.result.unwrap().station, "LFPO");
    assert_eq!(decoded.remaining_metar, "AUTO SHRA RERA 9999");
}

#[test]
fn test_icao_absent_when_only_lookalikes_remain() {
    assert_absent(&IcaoDecoder, "231027Z AUTO 24004KT +TSRA");
}

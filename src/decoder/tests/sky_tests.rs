//! Tests for cloud decoding

use super::*;
use crate::decoder::CloudDecoder;
use crate::models::{CloudAmount, CloudType, NoCloud};

#[test]
fn test_layers_with_type() {
    let decoded = decode_ok(&CloudDecoder, "FEW015 BKN030CB 17/10");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.layers.len(), 2);

    assert_eq!(chunk.layers[0].amount, Some(CloudAmount::Few));
    assert_eq!(chunk.layers[0].base_height, feet(1500.0));
    assert_eq!(chunk.layers[0].cloud_type, None);

    assert_eq!(chunk.layers[1].amount, Some(CloudAmount::Broken));
    assert_eq!(chunk.layers[1].base_height, feet(3000.0));
    assert_eq!(chunk.layers[1].cloud_type, Some(CloudType::Cumulonimbus));

    assert_eq!(decoded.remaining_metar, "17/10");
}

#[test]
fn test_cloud_height_converts_to_meters() {
    let chunk = decode_ok(&CloudDecoder, "OVC010").result.unwrap();
    let height = chunk.layers[0].base_height.unwrap();
    assert_eq!(height.convert(Unit::Meter).unwrap(), 304.8);
}

#[test]
fn test_layer_not_reported_fields() {
    let chunk = decode_ok(&CloudDecoder, "//////TCU").result.unwrap();
    let layer = &chunk.layers[0];
    assert_eq!(layer.amount, None);
    assert_eq!(layer.base_height, None);
    assert_eq!(layer.cloud_type, Some(CloudType::ToweringCumulus));
}

#[test]
fn test_no_cloud_tokens() {
    let chunk = decode_ok(&CloudDecoder, "NSC").result.unwrap();
    assert_eq!(chunk.no_cloud, Some(NoCloud::NoSignificantCloud));
    assert!(chunk.layers.is_empty());

    let chunk = decode_ok(&CloudDecoder, "SKC").result.unwrap();
    assert_eq!(chunk.no_cloud, Some(NoCloud::SkyClear));
}

#[test]
fn test_vertical_visibility() {
    let chunk = decode_ok(&CloudDecoder, "VV002").result.unwrap();
    assert!(chunk.sky_obscured);
    assert_eq!(chunk.vertical_visibility, feet(200.0));

    let chunk = decode_ok(&CloudDecoder, "VV///").result.unwrap();
    assert!(chunk.sky_obscured);
    assert_eq!(chunk.vertical_visibility, None);
}

#[test]
fn test_garbled_layer_is_malformed() {
    assert_malformed(&CloudDecoder, "BKN15");
}

#[test]
fn test_absent() {
    assert_absent(&CloudDecoder, "AAA BBB");
}

#[test]
fn test_six_layers() {
    let decoded = decode_ok(&CloudDecoder, "FEW008 SCT015 BKN025 BKN050 OVC080 OVC250 M01/M03");
    let chunk = decoded.result.unwrap();
    assert_eq!(chunk.layers.len(), 6);
    assert_eq!(chunk.layers[3].base_height, feet(5000.0));
    assert_eq!(chunk.layers[5].amount, Some(CloudAmount::Overcast));
    assert_eq!(decoded.remaining_metar, "M01/M03");
}

//! METAR Decoder Library
//!
//! A Rust library for decoding METAR aviation weather reports into
//! structured, unit-aware meteorological data.
//!
//! This library provides tools for:
//! - Extracting each coded group (wind, visibility, runway visual range,
//!   weather, clouds, temperature, pressure, ...) with a dedicated chunk decoder
//! - Representing physical quantities as [`Measurement`]s convertible through
//!   a fixed rate table
//! - Decoding whole reports in strict or lenient mode with [`MetarDecoder`]
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::{MetarDecoder, Unit};
//!
//! let decoder = MetarDecoder::default();
//! let metar = decoder
//!     .decode("METAR LFPO 231027Z 24004KT 1 1/4SM BKN015 17/10 Q1009")
//!     .unwrap();
//!
//! let visibility = metar.visibility.unwrap().visibility.unwrap();
//! assert_eq!(visibility.value(), 1.25);
//! assert_eq!(visibility.convert(Unit::Meter).unwrap(), 2011.675);
//! ```

pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod measurement;
pub mod metar_decoder;
pub mod models;

pub mod cli;

// Re-export commonly used types
pub use config::DecoderConfig;
pub use decoder::{ChunkDecoder, Decoded};
pub use error::{MetarError, Result};
pub use measurement::{Measurement, Unit};
pub use metar_decoder::{DECODING_ORDER, MetarDecoder};
pub use models::{ChunkKind, DecodedMetar};

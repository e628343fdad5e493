//! Command-line interface components.

use crate::measurement::{Measurement, Unit};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metar")]
#[command(about = "Decode METAR aviation weather reports into structured data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Raw reports to decode, each quoted as a single argument
    #[arg(value_name = "REPORT")]
    pub reports: Vec<String>,

    /// Read reports from a file, one per line ("-" reads standard input)
    #[arg(short, long, value_name = "FILE", conflicts_with = "reports")]
    pub file: Option<PathBuf>,

    /// Abort a report on its first malformed or missing group
    #[arg(long)]
    pub strict: bool,

    /// Unit used to display visibility and cloud heights
    #[arg(long, value_enum, default_value = "meter")]
    pub distance_unit: DistanceUnit,

    /// Unit used to display wind speeds
    #[arg(long, value_enum, default_value = "knot")]
    pub speed_unit: SpeedUnit,

    /// Unit used to display pressure
    #[arg(long, value_enum, default_value = "hpa")]
    pub pressure_unit: PressureUnit,

    /// Output format for decoded reports
    #[arg(long, value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for decoded reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// Full decoded structure
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceUnit {
    Meter,
    StatuteMile,
    Kilometer,
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeedUnit {
    Knot,
    MeterPerSecond,
    KilometerPerHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PressureUnit {
    Hpa,
    Inhg,
}

impl From<DistanceUnit> for Unit {
    fn from(unit: DistanceUnit) -> Self {
        match unit {
            DistanceUnit::Meter => Unit::Meter,
            DistanceUnit::StatuteMile => Unit::StatuteMile,
            DistanceUnit::Kilometer => Unit::Kilometer,
            DistanceUnit::Feet => Unit::Feet,
        }
    }
}

impl From<SpeedUnit> for Unit {
    fn from(unit: SpeedUnit) -> Self {
        match unit {
            SpeedUnit::Knot => Unit::Knot,
            SpeedUnit::MeterPerSecond => Unit::MeterPerSecond,
            SpeedUnit::KilometerPerHour => Unit::KilometerPerHour,
        }
    }
}

impl From<PressureUnit> for Unit {
    fn from(unit: PressureUnit) -> Self {
        match unit {
            PressureUnit::Hpa => Unit::HectoPascal,
            PressureUnit::Inhg => Unit::MercuryInch,
        }
    }
}

/// Units chosen for display
#[derive(Debug, Clone, Copy)]
pub struct DisplayUnits {
    pub distance: Unit,
    pub speed: Unit,
    pub pressure: Unit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            distance: Unit::Meter,
            speed: Unit::Knot,
            pressure: Unit::HectoPascal,
        }
    }
}

impl DisplayUnits {
    /// Render a measurement in `target`, keeping its own unit when the pair
    /// has no tabulated rate
    pub fn show(&self, measurement: &Measurement, target: Unit) -> String {
        match measurement.convert(target) {
            Ok(value) => format!("{} {}", value, target),
            Err(error) => {
                tracing::debug!("{}", error);
                measurement.to_string()
            }
        }
    }
}

impl Args {
    /// Log level selected by `-v` / `--quiet`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn display_units(&self) -> DisplayUnits {
        DisplayUnits {
            distance: self.distance_unit.into(),
            speed: self.speed_unit.into(),
            pressure: self.pressure_unit.into(),
        }
    }
}

/// Report input from arguments, files and standard input
pub mod input {
    use super::Args;
    use anyhow::{Context, Result, bail};
    use std::io::Read;
    use std::path::Path;

    /// Raw report lines to decode
    pub fn load_reports(args: &Args) -> Result<Vec<String>> {
        match &args.file {
            Some(path) => {
                let text = read_source(path)?;
                Ok(text.lines().map(str::to_string).collect())
            }
            None if !args.reports.is_empty() => Ok(args.reports.clone()),
            None => bail!("No reports given. Pass reports as arguments or use --file"),
        }
    }

    fn read_source(path: &Path) -> Result<String> {
        if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read reports from standard input")?;
            return Ok(text);
        }

        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reports from {}", path.display()))
    }
}

/// Human-readable rendering of decoded reports
pub mod render {
    use super::DisplayUnits;
    use crate::models::{
        CloudChunk, DecodedMetar, RangeBound, RangeValue, ReportStatus, ReportType,
        SurfaceWindChunk, VisibilityChunk, VisualRange, WindDirection,
    };
    use colored::*;

    /// Multi-line description of a decoded report
    pub fn describe(metar: &DecodedMetar, units: &DisplayUnits) -> String {
        let mut lines = vec![metar.raw.bright_white().bold().to_string()];
        let mut field = |name: &str, value: String| {
            lines.push(format!("  {:<22} {}", format!("{name}:").bright_cyan(), value));
        };

        if let Some(chunk) = &metar.report_type {
            let kind = match chunk.report_type {
                ReportType::Metar => "routine (METAR)",
                ReportType::Speci => "special (SPECI)",
            };
            let corrected = if chunk.corrected { ", corrected" } else { "" };
            field("Report", format!("{kind}{corrected}"));
        }
        if let Some(chunk) = &metar.icao {
            field("Station", chunk.station.clone());
        }
        if let Some(chunk) = &metar.datetime {
            field(
                "Observed",
                format!("day {} at {} UTC", chunk.day, chunk.time.format("%H:%M")),
            );
        }
        match metar.status {
            Some(ReportStatus::Nil) => field("Status", "missing report (NIL)".to_string()),
            Some(ReportStatus::Auto) => field("Status", "automated".to_string()),
            None => {}
        }
        if let Some(chunk) = &metar.surface_wind {
            field("Wind", wind(chunk, units));
        }
        if let Some(chunk) = &metar.visibility {
            field("Visibility", visibility(chunk, units));
        }
        if let Some(chunk) = &metar.runway_visual_range {
            for runway in &chunk.runways {
                let range = match &runway.range {
                    VisualRange::Fixed(value) => range_value(value, units),
                    VisualRange::Variable { min, max } => format!(
                        "{} to {}",
                        range_value(min, units),
                        range_value(max, units)
                    ),
                };
                let tendency = runway
                    .tendency
                    .map(|t| format!(" ({t:?})").to_lowercase())
                    .unwrap_or_default();
                field(&format!("Runway {}", runway.runway), format!("{range}{tendency}"));
            }
        }
        if let Some(chunk) = &metar.present_weather {
            let groups: Vec<String> = chunk.groups.iter().map(|g| format!("{g:?}")).collect();
            field("Weather", groups.join("; "));
        }
        if let Some(chunk) = &metar.clouds {
            field("Clouds", clouds(chunk, units));
        }
        if let Some(chunk) = &metar.temperature {
            let dew = chunk
                .dew_point
                .map(|d| format!(", dew point {d} °C"))
                .unwrap_or_default();
            field("Temperature", format!("{} °C{dew}", chunk.air_temperature));
        }
        if let Some(chunk) = &metar.pressure {
            let value = chunk
                .pressure
                .map(|p| units.show(&p, units.pressure))
                .unwrap_or_else(|| "not reported".to_string());
            field("Pressure", value);
        }
        if let Some(chunk) = &metar.recent_weather {
            field("Recent weather", format!("{:?}", chunk.weather));
        }
        if let Some(chunk) = &metar.wind_shear {
            let value = if chunk.all_runways {
                "all runways".to_string()
            } else {
                format!("runway {}", chunk.runways.join(", "))
            };
            field("Wind shear", value);
        }
        if let Some(chunk) = &metar.remarks {
            field("Remarks", chunk.text.clone());
        }
        if !metar.unrecognized.is_empty() {
            field("Unrecognized", metar.unrecognized.yellow().to_string());
        }
        for error in &metar.errors {
            lines.push(format!("  {} {}", "!".bright_red().bold(), error.to_string().red()));
        }

        lines.join("\n")
    }

    fn wind(chunk: &SurfaceWindChunk, units: &DisplayUnits) -> String {
        let direction = match chunk.direction {
            WindDirection::Degrees(degrees) => format!("{degrees}°"),
            WindDirection::Variable => "variable".to_string(),
            WindDirection::NotReported => "direction not reported".to_string(),
        };
        let speed = chunk
            .speed
            .map(|s| units.show(&s, units.speed))
            .unwrap_or_else(|| "speed not reported".to_string());
        let above = if chunk.speed_above { "above " } else { "" };
        let mut text = format!("{direction} at {above}{speed}");
        if let Some(gust) = chunk.gust {
            text.push_str(&format!(", gusting {}", units.show(&gust, units.speed)));
        }
        if let Some((from, to)) = chunk.direction_variation {
            text.push_str(&format!(", varying {from}° to {to}°"));
        }
        text
    }

    fn visibility(chunk: &VisibilityChunk, units: &DisplayUnits) -> String {
        if chunk.cavok {
            return "CAVOK".green().to_string();
        }
        let Some(visibility) = chunk.visibility else {
            return "not reported".to_string();
        };
        let bound = match chunk.bound {
            Some(RangeBound::Above) => "above ",
            Some(RangeBound::Below) => "below ",
            None => "",
        };
        let mut text = format!("{bound}{}", units.show(&visibility, units.distance));
        if chunk.ndv {
            text.push_str(" (no directional variation)");
        }
        if let Some(minimum) = chunk.minimum_visibility {
            text.push_str(&format!(", minimum {}", units.show(&minimum, units.distance)));
            if let Some(direction) = chunk.minimum_visibility_direction {
                text.push_str(&format!(" towards {direction:?}"));
            }
        }
        text
    }

    fn range_value(value: &RangeValue, units: &DisplayUnits) -> String {
        let bound = match value.bound {
            Some(RangeBound::Above) => "above ",
            Some(RangeBound::Below) => "below ",
            None => "",
        };
        format!("{bound}{}", units.show(&value.distance, units.distance))
    }

    fn clouds(chunk: &CloudChunk, units: &DisplayUnits) -> String {
        if let Some(no_cloud) = chunk.no_cloud {
            return format!("{no_cloud:?}");
        }
        if chunk.sky_obscured {
            return match chunk.vertical_visibility {
                Some(height) => format!(
                    "sky obscured, vertical visibility {}",
                    units.show(&height, units.distance)
                ),
                None => "sky obscured".to_string(),
            };
        }
        chunk
            .layers
            .iter()
            .map(|layer| {
                let amount = layer
                    .amount
                    .map(|a| format!("{a:?}"))
                    .unwrap_or_else(|| "unknown amount".to_string());
                let height = layer
                    .base_height
                    .map(|h| format!(" at {}", units.show(&h, units.distance)))
                    .unwrap_or_default();
                let cloud_type = layer
                    .cloud_type
                    .map(|t| format!(" ({t:?})"))
                    .unwrap_or_default();
                format!("{amount}{height}{cloud_type}")
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Command execution
pub mod commands {
    use super::{Args, OutputFormat, input, render};
    use crate::config::DecoderConfig;
    use crate::metar_decoder::{BatchEntry, MetarDecoder};
    use anyhow::{Context, Result};
    use colored::*;
    use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
    use std::time::{Duration, Instant};
    use tracing::{debug, error, info};

    /// Totals for one invocation
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct DecodeStats {
        pub reports: usize,
        pub fully_decoded: usize,
        pub with_errors: usize,
        pub failed: usize,
    }

    impl DecodeStats {
        pub fn record(&mut self, entry: &BatchEntry) {
            self.reports += 1;
            match &entry.result {
                Ok(metar) if metar.is_valid() => self.fully_decoded += 1,
                Ok(_) => self.with_errors += 1,
                Err(_) => self.failed += 1,
            }
        }

        pub fn has_failures(&self) -> bool {
            self.failed > 0
        }
    }

    /// Decode every report selected by `args` and print the results
    pub fn run(args: Args) -> Result<DecodeStats> {
        let start_time = Instant::now();

        setup_logging(&args)?;
        info!("Starting METAR decoder");
        debug!("Command line arguments: {:?}", args);

        let config = DecoderConfig::default().with_strict(args.strict);
        let decoder = MetarDecoder::new(config).context("Invalid decoder configuration")?;
        let lines = input::load_reports(&args)?;
        let units = args.display_units();

        let spinner = if args.file.is_some() && !args.quiet {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .unwrap(),
            );
            pb.set_message(format!("Decoding {} lines...", lines.len()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let entries = decoder.decode_batch(lines.iter().map(String::as_str));

        if let Some(pb) = &spinner {
            pb.finish_and_clear();
        }

        let mut stats = DecodeStats::default();
        for entry in &entries {
            stats.record(entry);
            match &entry.result {
                Ok(metar) => match args.output_format {
                    OutputFormat::Human => println!("{}\n", render::describe(metar, &units)),
                    OutputFormat::Debug => println!("{metar:#?}"),
                },
                Err(e) => {
                    error!("Line {}: {}", entry.line, e);
                    println!(
                        "{} line {}: {}\n",
                        "Failed".bright_red().bold(),
                        entry.line,
                        e
                    );
                }
            }
        }

        if entries.len() > 1 || args.file.is_some() {
            print_summary(&stats, start_time.elapsed());
        }

        Ok(stats)
    }

    /// Set up structured logging based on CLI arguments
    fn setup_logging(args: &Args) -> Result<()> {
        use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

        let log_level = args.log_level();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("metar_decoder={}", log_level)));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;

        debug!("Logging initialized at level: {}", log_level);
        Ok(())
    }

    fn print_summary(stats: &DecodeStats, elapsed: Duration) {
        println!("{}", "Decoding summary".bright_green().bold());
        println!("  Reports:        {}", stats.reports);
        println!("  Fully decoded:  {}", stats.fully_decoded.to_string().green());
        println!("  With errors:    {}", stats.with_errors.to_string().yellow());
        println!("  Failed:         {}", stats.failed.to_string().red());
        println!("  Time:           {}", HumanDuration(elapsed));
    }
}

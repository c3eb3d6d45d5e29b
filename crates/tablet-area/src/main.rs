//! tablet-area entry point.
//!
//! Parses the command line, merges it with the config file, then plans and
//! applies the active area through `xsetwacom`.
//!
//! # Usage
//!
//! ```text
//! tablet-area [OPTIONS] (--width <W> | --height <H> | --full)
//!
//! Options:
//!   --device <ID>             Device id or name [default: auto]
//!   --aspect <W:H>            Screen aspect ratio [default: 16:9]
//!   --device-area <WxH>       Tablet size in lines instead of asking the device
//!   --device-resolution <N>   Lines per inch [default: 2540]
//!   --width <W>               Active area width
//!   --height <H>              Active area height
//!   --unit <UNIT>             in, cm, mm or lines [default: mm]
//!   --full                    Largest area with the screen's aspect ratio
//!   --align <ALIGN>           Placement on the tablet [default: center]
//!   -v, --verbose             Print the xsetwacom command and progress
//!   --dry-run                 Compute only; leave the device untouched
//!   --config <PATH>           Config file [env: TABLET_AREA_CONFIG]
//!   --tool <PATH>             xsetwacom location [env: TABLET_AREA_TOOL]
//! ```
//!
//! Flags override the config file, which overrides the built-in defaults.
//! Logs go to stderr; stdout only carries the `-v` command echo.

use std::path::PathBuf;

use anyhow::Context;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tablet_area::application::configure_area::{AreaSettings, ConfigureAreaUseCase, ConfigureError};
use tablet_area::infrastructure::device_control::XsetwacomControl;
use tablet_area::infrastructure::storage::config::{load_config, AppConfig};
use tablet_area_core::{Alignment, AspectRatio, LengthUnit, SizeOptions, TabletArea};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Fit a pen tablet's active area to the screen's aspect ratio.
#[derive(Debug, Parser)]
#[command(name = "tablet-area", version)]
struct Cli {
    /// Device id or name.  Defaults to the first stylus with a settable area.
    #[arg(long)]
    device: Option<String>,

    /// Screen aspect ratio as `W:H`.
    #[arg(long, value_name = "W:H")]
    aspect: Option<String>,

    /// Tablet size in device lines as `WxH`, instead of querying the device.
    #[arg(long, value_name = "WxH")]
    device_area: Option<String>,

    /// Device resolution in lines per inch.
    #[arg(long, value_name = "N")]
    device_resolution: Option<u32>,

    /// Active area width in `--unit`; the height follows from the aspect.
    #[arg(long)]
    width: Option<f64>,

    /// Active area height in `--unit`; the width follows from the aspect.
    #[arg(long)]
    height: Option<f64>,

    /// Unit for `--width` and `--height`.
    #[arg(long, value_parser = unit_parser())]
    unit: Option<LengthUnit>,

    /// Use the largest area with the screen's aspect ratio.
    #[arg(long)]
    full: bool,

    /// Where the area sits on the tablet.
    #[arg(long, value_parser = alignment_parser())]
    align: Option<Alignment>,

    /// Print the equivalent xsetwacom command and log progress.
    #[arg(short, long)]
    verbose: bool,

    /// Compute and report without changing the device.
    #[arg(long)]
    dry_run: bool,

    /// Config file to read instead of the default location.
    #[arg(long, env = "TABLET_AREA_CONFIG")]
    config: Option<PathBuf>,

    /// Location of the xsetwacom binary.
    #[arg(long, env = "TABLET_AREA_TOOL")]
    tool: Option<PathBuf>,
}

/// Accepts exactly the unit tags, listed in `--help`.
fn unit_parser() -> impl TypedValueParser<Value = LengthUnit> {
    PossibleValuesParser::new(LengthUnit::ALL.map(LengthUnit::as_str))
        .try_map(|tag| tag.parse::<LengthUnit>())
}

/// Accepts exactly the nine alignment names, listed in `--help`.
fn alignment_parser() -> impl TypedValueParser<Value = Alignment> {
    PossibleValuesParser::new(Alignment::all().map(Alignment::as_str))
        .try_map(|name| name.parse::<Alignment>())
}

impl Cli {
    /// Merges flags with `config` and validates everything that needs no I/O.
    ///
    /// # Errors
    ///
    /// [`ConfigureError::Parse`] for malformed `--aspect` or `--device-area`,
    /// [`ConfigureError::Configuration`] for a bad size flag combination.
    fn to_settings(&self, config: &AppConfig) -> Result<AreaSettings, ConfigureError> {
        let defaults = &config.defaults;

        let aspect = match &self.aspect {
            Some(aspect) => aspect.parse::<AspectRatio>()?,
            None => defaults.aspect,
        };
        let device_area = self
            .device_area
            .as_deref()
            .map(str::parse::<TabletArea>)
            .transpose()?;
        let request = SizeOptions {
            full: self.full,
            width: self.width,
            height: self.height,
            unit: self.unit.unwrap_or(defaults.unit),
            resolution: self.device_resolution.unwrap_or(defaults.device_resolution),
        }
        .into_request()?;

        Ok(AreaSettings {
            device: self.device.clone().or_else(|| defaults.device.clone()),
            aspect,
            device_area,
            request,
            alignment: self.align.unwrap_or(defaults.align),
            dry_run: self.dry_run,
        })
    }

    fn tool_path(&self, config: &AppConfig) -> PathBuf {
        self.tool.clone().unwrap_or_else(|| config.tool.path.clone())
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warnings only, or progress with -v.
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = cli.to_settings(&config)?;

    let control = XsetwacomControl::new(cli.tool_path(&config))?;
    let use_case = ConfigureAreaUseCase::new(control);

    let plan = use_case.plan(&settings)?;
    if cli.verbose {
        println!("{}", use_case.describe(&plan));
    }
    use_case.apply(&plan)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

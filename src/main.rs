use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ogr_validity::config::{
    apply_config_options, geos_available, install_error_handler, parse_key_value,
};
use ogr_validity::render::write_report;
use ogr_validity::{OutputFormat, SourceOptions, ValidityReport};

const DEFAULT_PATHS: [&str; 3] = [
    "UKCS_Licences_WGS84.shp",
    "UKCS_Licensed_Blocks_WGS84.shp",
    "UKCS_SubAreas_WGS84.shp",
];

#[derive(Parser)]
#[command(
    name = "ogr-validity",
    about = "Count valid and invalid geometries in the first layer of vector datasets",
    version,
    long_about = None
)]
struct Cli {
    /// Datasets to check, in order
    #[arg(default_values = DEFAULT_PATHS)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "OGR_VALIDITY_FORMAT")]
    format: Format,

    /// List the FID of every invalid feature below the counts (text output only)
    #[arg(long)]
    show_invalid: bool,

    /// GDAL configuration option, e.g. SHAPE_RESTORE_SHX=YES
    #[arg(long = "config", value_name = "KEY=VALUE", value_parser = parse_pair)]
    config: Vec<(String, String)>,

    /// Dataset open option passed to the driver
    #[arg(long = "oo", value_name = "NAME=VALUE")]
    open_options: Vec<String>,

    /// Only allow this driver to open the datasets (repeatable)
    #[arg(long = "if", value_name = "DRIVER")]
    allowed_drivers: Vec<String>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    parse_key_value(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    install_error_handler();
    if !geos_available() {
        tracing::warn!("GDAL was built without GEOS, geometries cannot be validated");
    }
    apply_config_options(&cli.config)?;

    let options = SourceOptions {
        allowed_drivers: cli.allowed_drivers,
        open_options: cli.open_options,
    };
    let format = OutputFormat::from(cli.format);

    let stdout = std::io::stdout();
    for path in &cli.paths {
        let report = ValidityReport::collect(path, &options)?;
        let mut out = stdout.lock();
        write_report(&mut out, &report, format, cli.show_invalid)?;
        out.flush()?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

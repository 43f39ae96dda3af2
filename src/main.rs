use clap::Parser;
use geonormals::{
    ElevationProvider, Family, GeoNormals, GeoNormalsError, LatLon, ProviderConfig, SiteLookup,
};
use log::debug;
use serde_json::Value;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "geonormals")]
#[command(
    about = "Elevation, 1991-2020 climate normals and soil class for a WGS84 coordinate",
    long_about = None
)]
struct Cli {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(allow_negative_numbers = true, value_parser = parse_latitude)]
    lat: f64,

    /// Longitude in decimal degrees (-180 to 180)
    #[arg(allow_negative_numbers = true, value_parser = parse_longitude)]
    lon: f64,

    /// Elevation provider: auto, opentopodata or open-elevation
    #[arg(long, default_value = "auto")]
    provider: ElevationProvider,

    /// OpenTopoData dataset (srtm90m ~90 m, etopo1 ~1 km global)
    #[arg(long, default_value = "srtm90m")]
    dataset: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Do not try other elevation providers when the first one fails
    #[arg(long)]
    no_fallback: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print raw responses of failed lookups to stderr
    #[arg(long)]
    debug: bool,

    /// Print a readable table instead of JSON
    #[arg(long)]
    table: bool,
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let lat: f64 = s.parse().map_err(|_| format!("invalid latitude '{s}'"))?;
    LatLon::new(lat, 0.0).map(LatLon::lat).map_err(|e| e.to_string())
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let lon: f64 = s.parse().map_err(|_| format!("invalid longitude '{s}'"))?;
    LatLon::new(0.0, lon).map(LatLon::lon).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), GeoNormalsError> {
    let location = LatLon::new(cli.lat, cli.lon)?;
    let config = ProviderConfig::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .dataset(cli.dataset)
        .elevation_provider(cli.provider)
        .fallback(!cli.no_fallback)
        .build();
    debug!("Using {:?}", config);

    let client = GeoNormals::with_config(config)?;
    let lookup = client.site_report().location(location).call().await?;

    if cli.debug {
        dump_diagnostics(&lookup);
    }

    if cli.table {
        print!("{}", lookup.report.render_table());
    } else {
        println!("{}", lookup.report.to_json(cli.pretty)?);
    }
    Ok(())
}

fn dump_diagnostics(lookup: &SiteLookup) {
    for diagnostic in lookup.climate.diagnostics() {
        let label = match diagnostic.family {
            Family::Temperature => "climate API response",
            Family::Precipitation => "climate API response (precip)",
        };
        eprintln!("DEBUG: {} normals unavailable: {}", diagnostic.family, diagnostic.error);
        if let Some(payload) = &diagnostic.raw_payload {
            dump_payload(label, payload);
        }
    }
    if let Some(error) = &lookup.soil.error {
        eprintln!("DEBUG: soil classification unavailable: {error}");
    }
    if let Some(payload) = &lookup.soil.raw_payload {
        dump_payload("soil API response", payload);
    }
}

fn dump_payload(label: &str, payload: &Value) {
    eprintln!("DEBUG: {label}:");
    match serde_json::to_string_pretty(payload) {
        Ok(pretty) => eprintln!("{pretty}"),
        Err(_) => eprintln!("DEBUG: (response could not be serialized)"),
    }
}

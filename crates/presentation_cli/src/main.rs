//! OpenWeatherMap conditions CLI
//!
//! Fetches current conditions for a location or station and prints them as
//! JSON. Prints `null` when neither is configured.
//!
//! Every setting can also come from the environment using the configuration
//! naming, e.g. `OWM_OPENWEATHERMAP__API_KEY`. Each run makes one request, so
//! no cache is attached.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use application::ports::ConditionsPort;
use clap::Parser;
use domain::TemperatureUnits;
use infrastructure::{
    AppConfig, EnvConfigStore, HttpClientConfig, OpenWeatherMapAdapter,
    OpenWeatherMapAppConfig, ReqwestHttpClient, config::ENV_PREFIX, init_tracing,
};
use tracing::debug;

/// OpenWeatherMap conditions CLI
#[derive(Parser, Debug)]
#[command(name = "conditions-cli")]
#[command(author, version, about = "Fetch normalized OpenWeatherMap conditions", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// OpenWeatherMap API key
    #[arg(long)]
    api_key: Option<String>,

    /// Latitude of the location to query
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the location to query
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Station id to query when no coordinates are given
    #[arg(long)]
    station: Option<String>,

    /// Unit system: metric, imperial or standard
    #[arg(short, long)]
    units: Option<TemperatureUnits>,

    /// Include the raw provider payload
    #[arg(long)]
    raw: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    fn apply(&self, config: &mut OpenWeatherMapAppConfig) {
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            config.latitude = Some(lat);
            config.longitude = Some(lon);
        }
        if let Some(station) = &self.station {
            config.station_id = Some(station.clone());
        }
        if let Some(units) = self.units {
            config.units = units;
        }
        if self.raw {
            config.include_raw = true;
        }
    }
}

/// Map `-v` count to a log filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config).context("Failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry = config.telemetry.with_log_filter(filter);
    }
    init_tracing(&config.telemetry)?;

    cli.apply(&mut config.openweathermap);
    debug!(config = ?config.openweathermap, "Configuration resolved");

    let provider_config = config.openweathermap.to_provider_config()?;
    let http = Arc::new(ReqwestHttpClient::with_config(
        HttpClientConfig::default().with_timeout(config.openweathermap.timeout()),
    )?);
    let store = EnvConfigStore::with_prefix(ENV_PREFIX);

    let adapter = OpenWeatherMapAdapter::from_config_store(provider_config, http, &store).await?;

    let conditions = adapter.get_conditions().await?;
    println!("{}", serde_json::to_string_pretty(&conditions)?);

    Ok(())
}

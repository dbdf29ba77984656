use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clock_weather_core::{
    Config, WeatherService, config::API_KEY_ENV, locale::city_title, region::regions,
};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clock-weather", version, about = "Weather proxy for the clock pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve `GET /api/weather` over HTTP.
    Serve {
        /// Address to bind, e.g. "0.0.0.0:3000". Defaults to the config file value.
        #[arg(long, env = "CLOCK_WEATHER_LISTEN")]
        listen: Option<String>,
    },

    /// Fetch weather once and print the JSON the endpoint would return.
    Show {
        /// City code (e.g. "130010") or region name (e.g. "関東").
        city_code: String,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,

    /// List known city codes and region names.
    Regions,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { listen } => {
                let config = Config::load()?;
                let addr = listen.unwrap_or_else(|| config.listen_addr().to_string());
                let service = Arc::new(WeatherService::from_config(&config));
                server::serve(&addr, service).await?;
            }
            Command::Show { city_code } => {
                let config = Config::load()?;
                let service = WeatherService::from_config(&config);

                let json = match service.weather(&[city_code]).await {
                    Ok(resp) => serde_json::to_string_pretty(&resp)?,
                    Err(e) => serde_json::to_string_pretty(&e.body())?,
                };
                println!("{json}");
            }
            Command::Configure => configure()?,
            Command::Regions => {
                for row in regions() {
                    let title = city_title(row.city);
                    println!("{}\t{}\t{}\t{}", row.code, row.region, row.city, title);
                }
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message(&format!("Stored in the config file; {API_KEY_ENV} overrides it"))
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

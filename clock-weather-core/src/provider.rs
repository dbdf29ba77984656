use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config, error::WeatherError, model::Observation, provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for an English city name.
    async fn current(&self, city: &str) -> Result<Observation, WeatherError>;
}

/// Construct the OpenWeather provider from config. Returns `None` when no
/// API key is configured; the service reports that per request.
pub fn provider_from_config(config: &Config) -> Option<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = match config.base_url() {
        Some(base) => OpenWeatherProvider::with_base_url(api_key.to_owned(), base),
        None => OpenWeatherProvider::new(api_key.to_owned()),
    };

    Some(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_is_none_when_missing_api_key() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_none());
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_some());
    }
}

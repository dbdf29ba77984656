use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::WeatherError, model::Observation};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<Observation, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let query = format!("{city},jp");

        tracing::debug!(city, "Requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                tracing::error!(city, error = %e.without_url(), "OpenWeather request failed");
                WeatherError::upstream("Failed to reach OpenWeather", None)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            tracing::error!(city, error = %e.without_url(), "Failed to read OpenWeather body");
            WeatherError::upstream("Failed to read OpenWeather response", Some(status.as_u16()))
        })?;

        if !status.is_success() {
            tracing::error!(
                city,
                status = status.as_u16(),
                body = %truncate_body(&body),
                "OpenWeather returned an error status"
            );
            return Err(WeatherError::upstream(
                format!("Request failed with status code {}", status.as_u16()),
                Some(status.as_u16()),
            ));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(city, error = %e, "Malformed OpenWeather JSON");
            WeatherError::upstream("Failed to parse OpenWeather JSON", None)
        })?;

        let condition = parsed.weather.into_iter().next().map(|w| w.main).ok_or_else(|| {
            WeatherError::upstream("OpenWeather response contained no weather entry", None)
        })?;

        Ok(Observation {
            condition,
            temp_min_c: parsed.main.temp_min,
            temp_max_c: parsed.main.temp_max,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<Observation, WeatherError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("{\"cod\":401}"), "{\"cod\":401}");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "雨".repeat(300);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = OpenWeatherProvider::with_base_url("KEY".into(), "http://localhost:9000/");
        assert_eq!(provider.base_url, "http://localhost:9000");
    }
}

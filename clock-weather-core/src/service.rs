use chrono::{NaiveDate, Utc};

use crate::{
    Config,
    config::API_KEY_ENV,
    error::WeatherError,
    locale::{city_title, translate_condition},
    model::{Celsius, Forecast, Observation, TemperatureRange, WeatherResponse},
    provider::{WeatherProvider, provider_from_config},
    region::{parse_city_code, resolve_city},
};

/// The `/api/weather` pipeline: validate, resolve, fetch, localize.
///
/// Holds no mutable state; one instance is shared by all requests.
#[derive(Debug)]
pub struct WeatherService {
    provider: Option<Box<dyn WeatherProvider>>,
}

impl WeatherService {
    /// `None` means no API key is configured. Requests then fail with
    /// [`WeatherError::Misconfiguration`] instead of the process refusing to start.
    pub fn new(provider: Option<Box<dyn WeatherProvider>>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = provider_from_config(config);
        if provider.is_none() {
            tracing::warn!("No OpenWeather API key configured; weather requests will fail");
        }
        Self::new(provider)
    }

    /// Handle the raw `cityCode` query values of one request.
    pub async fn weather<S: AsRef<str>>(
        &self,
        city_codes: &[S],
    ) -> Result<WeatherResponse, WeatherError> {
        let code = parse_city_code(city_codes)?;
        let city = resolve_city(code);

        let Some(provider) = self.provider.as_deref() else {
            tracing::error!(
                "API key missing from configuration; check the {API_KEY_ENV} environment variable"
            );
            return Err(WeatherError::Misconfiguration);
        };

        let observation = provider.current(city).await.inspect_err(|e| {
            tracing::error!(city, error = %e, "Failed to fetch weather data");
        })?;

        Ok(build_response(city, &observation, Utc::now().date_naive()))
    }
}

/// Localize an observation into the single-forecast payload.
pub fn build_response(city: &str, observation: &Observation, date: NaiveDate) -> WeatherResponse {
    WeatherResponse {
        title: city_title(city).into_owned(),
        forecasts: vec![Forecast {
            date: Some(date.format("%Y-%m-%d").to_string()),
            telop: translate_condition(&observation.condition).into_owned(),
            temperature: TemperatureRange {
                min: Celsius::rounded(observation.temp_min_c),
                max: Celsius::rounded(observation.temp_max_c),
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct FixedProvider(Observation);

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current(&self, _city: &str) -> Result<Observation, WeatherError> {
            Ok(self.0.clone())
        }
    }

    fn clear_sky() -> Observation {
        Observation { condition: "Clear".into(), temp_min_c: 10.4, temp_max_c: 15.6 }
    }

    #[test]
    fn build_response_localizes_and_rounds() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let resp = build_response("Tokyo", &clear_sky(), date);

        assert_eq!(resp.title, "東京");
        assert_eq!(resp.forecasts.len(), 1);

        let forecast = &resp.forecasts[0];
        assert_eq!(forecast.date.as_deref(), Some("2026-10-18"));
        assert_eq!(forecast.telop, "晴れ");
        assert_eq!(forecast.temperature.min.celsius, 10);
        assert_eq!(forecast.temperature.max.celsius, 16);
    }

    #[test]
    fn build_response_passes_through_unknown_labels() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let obs = Observation { condition: "Smoke".into(), temp_min_c: -3.5, temp_max_c: 0.2 };
        let resp = build_response("Kyoto", &obs, date);

        assert_eq!(resp.title, "Kyoto");
        assert_eq!(resp.forecasts[0].telop, "Smoke");
        assert_eq!(resp.forecasts[0].temperature.min.celsius, -3);
        assert_eq!(resp.forecasts[0].temperature.max.celsius, 0);
    }

    #[tokio::test]
    async fn missing_provider_is_misconfiguration() {
        let service = WeatherService::new(None);
        let err = service.weather(&["130010"]).await.unwrap_err();
        assert!(matches!(err, WeatherError::Misconfiguration));
    }

    #[tokio::test]
    async fn invalid_input_is_checked_before_configuration() {
        let service = WeatherService::new(None);
        let none: [&str; 0] = [];
        let err = service.weather(&none).await.unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput));
    }

    #[tokio::test]
    async fn region_name_resolves_like_code() {
        let service = WeatherService::new(Some(Box::new(FixedProvider(clear_sky()))));

        let by_code = service.weather(&["130010"]).await.unwrap();
        let by_region = service.weather(&["関東"]).await.unwrap();

        assert_eq!(by_code, by_region);
        assert_eq!(by_code.title, "東京");
    }
}

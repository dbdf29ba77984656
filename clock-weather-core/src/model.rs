use serde::{Deserialize, Serialize};

/// Label shown when no real forecast is available.
pub const UNKNOWN_TELOP: &str = "不明";

/// Current conditions as reported by a provider, before localization.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Provider condition keyword, e.g. "Clear" or "Rain".
    pub condition: String,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}

/// Successful payload returned to the clock pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub title: String,
    pub forecasts: Vec<Forecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// ISO date (YYYY-MM-DD). Absent on the placeholder forecast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub telop: String,
    pub temperature: TemperatureRange,
}

impl Forecast {
    pub fn placeholder() -> Self {
        Self {
            date: None,
            telop: UNKNOWN_TELOP.to_string(),
            temperature: TemperatureRange {
                min: Celsius { celsius: 0 },
                max: Celsius { celsius: 0 },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: Celsius,
    pub max: Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celsius {
    pub celsius: i64,
}

impl Celsius {
    /// Rounds half up (towards positive infinity), so -2.5 becomes -2.
    pub fn rounded(value: f64) -> Self {
        Self { celsius: (value + 0.5).floor() as i64 }
    }
}

/// Error payload. `forecasts` is only present for server-side failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasts: Option<Vec<Forecast>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_goes_half_up() {
        assert_eq!(Celsius::rounded(10.4).celsius, 10);
        assert_eq!(Celsius::rounded(15.6).celsius, 16);
        assert_eq!(Celsius::rounded(2.5).celsius, 3);
        assert_eq!(Celsius::rounded(-2.5).celsius, -2);
        assert_eq!(Celsius::rounded(-2.6).celsius, -3);
    }

    #[test]
    fn forecast_serializes_with_date() {
        let forecast = Forecast {
            date: Some("2026-10-18".into()),
            telop: "晴れ".into(),
            temperature: TemperatureRange {
                min: Celsius { celsius: 10 },
                max: Celsius { celsius: 16 },
            },
        };

        let value = serde_json::to_value(&forecast).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2026-10-18",
                "telop": "晴れ",
                "temperature": { "min": { "celsius": 10 }, "max": { "celsius": 16 } }
            })
        );
    }

    #[test]
    fn placeholder_has_no_date() {
        let value = serde_json::to_value(Forecast::placeholder()).unwrap();
        assert!(value.get("date").is_none());
        assert_eq!(value["telop"], UNKNOWN_TELOP);
    }
}

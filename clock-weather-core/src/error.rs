use thiserror::Error;

use crate::model::{ErrorBody, Forecast};

/// Failures of the weather pipeline. Every variant is turned into a JSON
/// body at the handler boundary; none of them escape as a fault.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("不正なcityCodeパラメータです")]
    InvalidInput,

    #[error("APIキーが設定されていません")]
    Misconfiguration,

    #[error("天気データの取得に失敗しました: {detail}{}", status_suffix(.status))]
    UpstreamFailure { detail: String, status: Option<u16> },
}

impl WeatherError {
    pub fn upstream(detail: impl Into<String>, status: Option<u16>) -> Self {
        Self::UpstreamFailure { detail: detail.into(), status }
    }

    /// HTTP status code the caller should see.
    pub fn status(&self) -> u16 {
        match self {
            WeatherError::InvalidInput => 400,
            WeatherError::Misconfiguration | WeatherError::UpstreamFailure { .. } => 500,
        }
    }

    /// Response body for this error. Server-side failures carry a placeholder
    /// forecast so the clock UI can render without null checks.
    pub fn body(&self) -> ErrorBody {
        let forecasts = match self {
            WeatherError::InvalidInput => None,
            _ => Some(vec![Forecast::placeholder()]),
        };

        ErrorBody { error: self.to_string(), forecasts }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (ステータス: {code})")).unwrap_or_default()
}

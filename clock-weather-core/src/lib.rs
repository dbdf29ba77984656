//! Core library for the clock pages' weather proxy.
//!
//! This crate defines:
//! - City code / region lookup tables
//! - Japanese labels for conditions and city titles
//! - The OpenWeather provider and the request pipeline built on it
//! - Configuration & credentials handling
//!
//! It is used by the `clock-weather` binary, but has no HTTP server of its own.

pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod provider;
pub mod region;
pub mod service;

pub use config::Config;
pub use error::WeatherError;
pub use model::{ErrorBody, Forecast, Observation, WeatherResponse};
pub use provider::WeatherProvider;
pub use service::WeatherService;

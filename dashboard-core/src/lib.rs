//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and its failure classification
//! - Shared domain models (queries, readings) and the gauge specification
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod gauge;
pub mod model;

pub use client::{FetchError, OpenWeatherClient, WeatherSource};
pub use config::Config;
pub use gauge::{GaugeSpec, temperature_gauge};
pub use model::{WeatherQuery, WeatherReading};

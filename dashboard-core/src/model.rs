use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user submission: the city to look up.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Build a query from raw user input. Leading/trailing whitespace is
    /// trimmed; an empty city is the only rejected input.
    pub fn new(city: impl Into<String>) -> Result<Self> {
        let city: String = city.into();
        let city = city.trim();
        if city.is_empty() {
            bail!("City name must not be empty");
        }
        Ok(Self { city: city.to_string() })
    }
}

/// Current conditions for one query. Request-scoped: built from a single API
/// response and discarded after rendering, never cached or compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub pressure_hpa: u32,
    /// Meters; the API omits this field at full visibility sites.
    pub visibility_m: Option<u32>,
    pub cloudiness_pct: u8,
    /// Millimeters over the last hour; present only when rain was reported.
    pub rain_1h_mm: Option<f64>,
    /// When the station observed these conditions.
    pub observed_at: DateTime<Utc>,
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{WeatherQuery, WeatherReading};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Failure classes for one weather fetch. Both are recoverable: the caller
/// reports the error and returns to the input prompt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request reached the server but was rejected (unknown city, bad
    /// credential).
    #[error("city not found or invalid API key (HTTP {status})")]
    Client { status: StatusCode },

    /// The request could not be completed, or its body could not be parsed.
    #[error("{0}")]
    Transport(String),
}

/// Source of current weather readings. The CLI renders against this seam so
/// tests can substitute a canned source.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherReading, FetchError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherReading, FetchError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        tracing::debug!(city = %query.city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|err| {
                FetchError::Transport(format!("Failed to send request to OpenWeather: {err}"))
            })?;

        let status = res.status();
        tracing::debug!(%status, "OpenWeather responded");

        if !status.is_success() {
            return Err(FetchError::Client { status });
        }

        let body = res.text().await.map_err(|err| {
            FetchError::Transport(format!("Failed to read OpenWeather response body: {err}"))
        })?;

        parse_current(&body)
    }
}

/// Map one OpenWeather current-conditions body onto a reading. A body missing
/// mandatory objects (`main`, `wind`, `clouds`) fails as a transport error.
fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::Transport(format!("Failed to parse OpenWeather JSON: {err}")))?;

    let condition = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    // A rain object without the "1h" key still counts as rain, at 0 mm.
    let rain_1h_mm = parsed.rain.map(|r| r.one_hour.unwrap_or(0.0));

    let observed_at = parsed
        .dt
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    Ok(WeatherReading {
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        condition,
        pressure_hpa: parsed.main.pressure,
        visibility_m: parsed.visibility,
        cloudiness_pct: parsed.clouds.all,
        rain_1h_mm,
        observed_at,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    clouds: OwClouds,
    visibility: Option<u32>,
    rain: Option<OwRain>,
}

use crate::settings::WeatherSettings;
use anyhow::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    Celsius(i64),
    /// Shown as "--"
    Unknown,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Celsius(t) => write!(f, "{}°C", t),
            Temperature::Unknown => write!(f, "--"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: Temperature,
    pub description: String,
}

impl WeatherSnapshot {
    /// The fixed value reported whenever live weather cannot be obtained.
    pub fn unavailable() -> Self {
        Self {
            temperature: Temperature::Unknown,
            description: "Unavailable".to_string(),
        }
    }
}

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.description, self.temperature)
    }
}

/// Anything that can report the current weather for a city.
///
/// Implementations never fail: problems are reported as
/// [`WeatherSnapshot::unavailable`].
pub trait WeatherProvider {
    fn get_weather(&self, city: &str) -> WeatherSnapshot;
}

#[derive(Deserialize)]
struct OwmResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
}

#[derive(Deserialize)]
struct OwmCondition {
    description: String,
}

/// Parses an OpenWeatherMap current-weather body. `None` if the body is
/// malformed or carries no usable temperature.
pub fn parse_weather_body(body: &str) -> Option<WeatherSnapshot> {
    let parsed: OwmResponse = serde_json::from_str(body).ok()?;
    if !parsed.main.temp.is_finite() {
        return None;
    }

    let description = parsed
        .weather
        .first()
        .map(|c| capitalize(c.description.trim()))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Some(WeatherSnapshot {
        temperature: Temperature::Celsius(parsed.main.temp.round() as i64),
        description,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Live weather from the OpenWeatherMap current-weather endpoint.
pub struct OpenWeatherClient {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(settings: &WeatherSettings) -> Self {
        Self {
            api_key: settings
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(settings.timeout_secs.max(1)),
        }
    }

    fn fetch(&self, city: &str, api_key: &str) -> Result<WeatherSnapshot> {
        let endpoint = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);
        let url = reqwest::Url::parse_with_params(
            &endpoint,
            &[("q", city), ("appid", api_key), ("units", "metric")],
        )?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let response = client.get(url).send()?.error_for_status()?;
        let body = response.text()?;

        parse_weather_body(&body)
            .ok_or_else(|| anyhow::anyhow!("unexpected weather response body"))
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn get_weather(&self, city: &str) -> WeatherSnapshot {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No weather API key configured — city={}", city);
            return WeatherSnapshot::unavailable();
        };

        match self.fetch(city, api_key) {
            Ok(snapshot) => {
                debug!(
                    "Weather fetched — city={} temperature={} description={}",
                    city, snapshot.temperature, snapshot.description
                );
                snapshot
            }
            Err(e) => {
                warn!("Weather lookup failed — city={} error={}", city, e);
                WeatherSnapshot::unavailable()
            }
        }
    }
}

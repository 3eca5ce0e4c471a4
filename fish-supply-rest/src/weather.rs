//! Current-conditions lookup against an OpenWeatherMap-compatible API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> RestResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> RestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let api_key = value("WEATHER_API_KEY")
            .ok_or_else(|| RestError::Config("WEATHER_API_KEY must be set".to_string()))?;
        Ok(Self {
            api_key,
            base_url: value("WEATHER_BASE_URL").unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string()),
        })
    }
}

/// Current conditions for one city, metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    /// Short condition group, e.g. "Rain"
    pub condition: String,
    pub description: String,
    pub icon: Option<String>,
    pub wind_speed_ms: Option<f64>,
}

#[derive(Deserialize)]
struct CurrentWeather {
    name: String,
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    wind: Option<Wind>,
}

#[derive(Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Deserialize)]
struct Condition {
    main: String,
    description: String,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Deserialize)]
struct Wind {
    speed: f64,
}

impl From<CurrentWeather> for WeatherReport {
    fn from(current: CurrentWeather) -> Self {
        let condition = current.weather.into_iter().next();
        WeatherReport {
            city: current.name,
            temperature_c: current.main.temp,
            feels_like_c: current.main.feels_like,
            humidity_pct: current.main.humidity,
            condition: condition
                .as_ref()
                .map(|c| c.main.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.and_then(|c| c.icon),
            wind_speed_ms: current.wind.map(|w| w.speed),
        }
    }
}

#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> RestResult<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    pub async fn current(&self, city: &str) -> RestResult<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(RestError::InvalidRequest("city is empty".to_string()));
        }

        let url = format!("{}/weather", self.config.base_url.trim_end_matches('/'));
        debug!(city, "Requesting current weather");
        let response = self
            .http
            .get(url)
            .query(&[("q", city), ("appid", self.config.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(city, status = status.as_u16(), "Weather lookup failed");
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let current: CurrentWeather = serde_json::from_slice(&bytes)?;
        Ok(current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        let mut config = WeatherConfig::new("weather-key");
        config.base_url = format!("{}/data/2.5", server.uri());
        WeatherClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_maps_current_conditions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Navotas"))
            .and(query_param("appid", "weather-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Navotas",
                "main": { "temp": 29.4, "feels_like": 33.1, "humidity": 78 },
                "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
                "wind": { "speed": 4.6 }
            })))
            .mount(&server)
            .await;

        let report = client_for(&server).current(" Navotas ").await.unwrap();
        assert_eq!(
            report,
            WeatherReport {
                city: "Navotas".to_string(),
                temperature_c: 29.4,
                feels_like_c: 33.1,
                humidity_pct: 78,
                condition: "Rain".to_string(),
                description: "light rain".to_string(),
                icon: Some("10d".to_string()),
                wind_speed_ms: Some(4.6),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_condition_list_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Malabon",
                "main": { "temp": 27.0, "feels_like": 28.0, "humidity": 70 }
            })))
            .mount(&server)
            .await;

        let report = client_for(&server).current("Malabon").await.unwrap();
        assert_eq!(report.condition, "Unknown");
        assert!(report.wind_speed_ms.is_none());
    }

    #[tokio::test]
    async fn test_unknown_city_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "cod": "404", "message": "city not found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).current("Atlantis").await.unwrap_err();
        assert!(matches!(err, RestError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_empty_city_is_rejected() {
        let server = MockServer::start().await;
        assert!(matches!(
            client_for(&server).current("").await,
            Err(RestError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_config_requires_api_key() {
        let err = WeatherConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, RestError::Config(msg) if msg.contains("WEATHER_API_KEY")));

        let config = WeatherConfig::from_lookup(|key| {
            (key == "WEATHER_API_KEY").then(|| "abc".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
        assert!(!format!("{config:?}").contains("abc"));
    }
}

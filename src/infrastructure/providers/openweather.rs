use super::ensure_success;
use crate::domain::entities::CurrentWeather;
use crate::domain::errors::UpstreamError;
use crate::domain::ports::weather_provider::WeatherProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// OpenWeatherMap "current weather" client
pub struct OpenWeatherClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    location: String,
}

impl OpenWeatherClient {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl From<OwmResponse> for CurrentWeather {
    fn from(raw: OwmResponse) -> Self {
        Self {
            city: raw.name,
            temperature: raw.main.temp.round() as i64,
            condition: raw
                .weather
                .into_iter()
                .next()
                .map(|c| c.main)
                .unwrap_or_else(|| "Unknown".to_string()),
            humidity: raw.main.humidity.round() as i64,
            wind_speed: raw.wind.speed.round() as i64,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_conditions(&self) -> Result<CurrentWeather, UpstreamError> {
        let response = self
            .http_client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", self.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let raw = ensure_success(response)
            .await?
            .json::<OwmResponse>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        Ok(raw.into())
    }
}

use crate::domain::entities::CurrentWeather;
use crate::domain::errors::UpstreamError;
use crate::domain::ports::weather_provider::WeatherProvider;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather API key is not configured")]
    NotConfigured,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Clone)]
pub struct WeatherService {
    provider: Option<Arc<dyn WeatherProvider>>,
}

impl WeatherService {
    /// `provider` is `None` when no API key is configured
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>) -> Self {
        Self { provider }
    }

    pub async fn current_conditions(&self) -> Result<CurrentWeather, WeatherError> {
        let provider = self.provider.as_ref().ok_or(WeatherError::NotConfigured)?;
        let weather = provider.current_conditions().await?;
        tracing::debug!("Weather for {}: {}", weather.city, weather.condition);
        Ok(weather)
    }
}

use crate::domain::entities::CurrentWeather;
use crate::domain::errors::UpstreamError;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_conditions(&self) -> Result<CurrentWeather, UpstreamError>;
}

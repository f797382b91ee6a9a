use axum::{extract::State, Json};

use crate::{
    domain::entities::CurrentWeather,
    infrastructure::http::middleware::{ApiResult, AppState},
};

// GET /api/weather - Current conditions for the configured location
pub async fn get_weather(State(state): State<AppState>) -> ApiResult<Json<CurrentWeather>> {
    let weather = state.weather_service.current_conditions().await.map_err(|e| {
        tracing::error!("Weather API error: {}", e);
        e
    })?;
    Ok(Json(weather))
}

use axum::{extract::State, Json};

use crate::{
    domain::entities::Greeting,
    infrastructure::http::middleware::{ApiResult, AppState},
};

// GET /api/ai-assistant - Greeting and task suggestion
pub async fn get_greeting(State(state): State<AppState>) -> ApiResult<Json<Greeting>> {
    let greeting = state.greeting_service.greet().await?;
    Ok(Json(greeting))
}

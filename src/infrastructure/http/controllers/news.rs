use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    response::{IntoResponse, Response},
    Json,
};

use crate::infrastructure::http::middleware::{ApiError, AppState};

// GET /api/news - Latest articles of the news feed
pub async fn get_news(State(state): State<AppState>) -> Response {
    match state.news_service.latest_articles().await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => {
            tracing::error!("Error in /api/news: {}", e);
            (
                [
                    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                    (PRAGMA, "no-cache"),
                    (EXPIRES, "0"),
                ],
                ApiError::upstream("Failed to fetch news", &e),
            )
                .into_response()
        }
    }
}

use crate::infrastructure::http::controllers::{assignments, greeting, news, tasks, weather};
use crate::infrastructure::http::middleware::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/assignments",
            get(assignments::list_upcoming_assignments),
        )
        // Path the dashboard frontend calls
        .route(
            "/api/canvas",
            get(assignments::list_upcoming_assignments),
        )
        .route(
            "/api/tasks",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/weather", get(weather::get_weather))
        .route("/api/news", get(news::get_news))
        .route("/api/ai-assistant", get(greeting::get_greeting))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

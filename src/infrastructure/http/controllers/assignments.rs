use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    domain::entities::AggregationResult,
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};

/// Number of per-course fetches that were dropped from a successful response
pub const FAILED_COURSES_HEADER: &str = "x-failed-course-fetches";

// GET /assignments - Upcoming assignments across all active courses
//
// 200 with an array, 200 with {"message"} when nothing is due, or an error
// object. The three bodies are told apart by shape alone.
pub async fn list_upcoming_assignments(State(state): State<AppState>) -> ApiResult<Response> {
    let horizon_days = state.assignment_service.horizon_days();

    match state.assignment_service.upcoming_assignments().await {
        AggregationResult::Assignments {
            assignments,
            failed_courses,
        } => Ok((
            [(FAILED_COURSES_HEADER, failed_courses.to_string())],
            Json(assignments),
        )
            .into_response()),
        AggregationResult::Empty { failed_courses } => Ok((
            [(FAILED_COURSES_HEADER, failed_courses.to_string())],
            Json(json!({ "message": empty_message(horizon_days) })),
        )
            .into_response()),
        AggregationResult::Failed(e) => Err(ApiError::from(e)),
    }
}

fn empty_message(horizon_days: i64) -> String {
    match horizon_days {
        14 => "No assignments due within the next two weeks".to_string(),
        1 => "No assignments due within the next day".to_string(),
        days => format!("No assignments due within the next {} days", days),
    }
}

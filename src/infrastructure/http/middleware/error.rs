use crate::application::services::{GreetingError, WeatherError};
use crate::domain::errors::{AggregationError, DomainError, UpstreamError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    /// Failure of a third-party API, optionally with diagnostic detail
    Upstream {
        status: StatusCode,
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn upstream(message: impl Into<String>, err: &UpstreamError) -> Self {
        ApiError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: Some(err.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Upstream {
                status, message, ..
            } => write!(f, "Upstream error ({}): {}", status, message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            ApiError::Upstream {
                status,
                message,
                details: Some(details),
            } => (status, json!({ "error": message, "details": details })),
            ApiError::Upstream {
                status,
                message,
                details: None,
            } => (status, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}

// Convert from domain errors
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

// Catalog failures mirror the upstream status when there is one
impl From<AggregationError> for ApiError {
    fn from(err: AggregationError) -> Self {
        match err {
            AggregationError::NotConfigured => {
                ApiError::Internal("Canvas API key is not configured".to_string())
            }
            AggregationError::Catalog(UpstreamError::Status {
                status,
                status_text,
                body,
            }) => ApiError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message: format!("Failed to fetch courses: {}", status_text),
                details: Some(body),
            },
            AggregationError::Catalog(other) => {
                ApiError::upstream("Failed to fetch assignments", &other)
            }
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::NotConfigured => {
                ApiError::Internal("API key is not set on the server".to_string())
            }
            WeatherError::Upstream(e) => ApiError::upstream("Failed to fetch weather data", &e),
        }
    }
}

impl From<GreetingError> for ApiError {
    fn from(err: GreetingError) -> Self {
        match err {
            GreetingError::NotConfigured => {
                ApiError::Internal("Google AI API key is not configured".to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_status_is_mirrored() {
        let err = ApiError::from(AggregationError::Catalog(UpstreamError::Status {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: "invalid token".to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_catalog_transport_failure_is_500() {
        let err = ApiError::from(AggregationError::Catalog(UpstreamError::Transport(
            "dns".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err = ApiError::from(DomainError::NotFound("Task x".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}

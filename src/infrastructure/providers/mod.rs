pub mod canvas;
pub mod gemini;
pub mod openweather;
pub mod rss;

pub use canvas::*;
pub use gemini::*;
pub use openweather::*;
pub use rss::*;

use crate::domain::errors::UpstreamError;
use reqwest::{Client, Response};
use std::time::Duration;

/// Upstream error bodies longer than this are cut before being reported
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Shared HTTP client for every outbound integration
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("studydesk/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Pass 2xx responses through, turn anything else into `UpstreamError::Status`
pub(crate) async fn ensure_success(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
            Some((index, _)) => body[..index].to_string(),
            None => body,
        },
        Err(_) => String::new(),
    };

    Err(UpstreamError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

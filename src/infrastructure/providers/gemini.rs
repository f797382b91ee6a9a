use super::ensure_success;
use crate::domain::errors::UpstreamError;
use crate::domain::ports::greeting_generator::GreetingGenerator;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [ContentRef<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ContentRef<'a> {
    parts: [PartRef<'a>; 1],
}

#[derive(Debug, Serialize)]
struct PartRef<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn first_candidate_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl GreetingGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateRequest {
            contents: [ContentRef {
                parts: [PartRef { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let response = ensure_success(response)
            .await?
            .json::<GenerateResponse>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        first_candidate_text(response)
            .ok_or_else(|| UpstreamError::Malformed("Model returned no text".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

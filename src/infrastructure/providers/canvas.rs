use super::ensure_success;
use crate::domain::entities::{Course, RawAssignment};
use crate::domain::errors::UpstreamError;
use crate::domain::ports::lms_client::LmsClient;
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::{de::DeserializeOwned, Deserialize};

/// Canvas LMS REST client authenticated with a personal access token
pub struct CanvasClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl CanvasClient {
    pub fn new(http_client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let response = ensure_success(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}

/// Course record as Canvas sends it. Enrollments restricted by date come
/// back with only an id and `access_restricted_by_date`.
#[derive(Debug, Deserialize)]
struct CanvasCourse {
    id: i64,
    #[serde(default)]
    name: Option<String>,
}

impl From<CanvasCourse> for Course {
    fn from(raw: CanvasCourse) -> Self {
        let name = match raw.name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name,
            None => {
                tracing::warn!("Course {} has no name, using a placeholder", raw.id);
                format!("Course {}", raw.id)
            }
        };
        Self { id: raw.id, name }
    }
}

#[async_trait]
impl LmsClient for CanvasClient {
    async fn fetch_active_courses(&self) -> Result<Vec<Course>, UpstreamError> {
        let courses: Vec<CanvasCourse> = self
            .get_json("/courses", &[("enrollment_state", "active")])
            .await?;
        Ok(courses.into_iter().map(Course::from).collect())
    }

    async fn fetch_assignments(&self, course: &Course) -> Result<Vec<RawAssignment>, UpstreamError> {
        self.get_json(
            &format!("/courses/{}/assignments", course.id),
            &[("bucket", "future")],
        )
        .await
    }
}

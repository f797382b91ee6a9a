use crate::domain::entities::{Course, RawAssignment};
use crate::domain::errors::UpstreamError;
use async_trait::async_trait;

/// Read access to the learning management system
#[async_trait]
pub trait LmsClient: Send + Sync {
    /// Courses the authenticated user is actively enrolled in
    async fn fetch_active_courses(&self) -> Result<Vec<Course>, UpstreamError>;

    /// Assignments of one course from the LMS "future" bucket
    async fn fetch_assignments(&self, course: &Course) -> Result<Vec<RawAssignment>, UpstreamError>;
}

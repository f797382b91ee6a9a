use crate::domain::errors::AggregationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An active course of the current LMS user. Fetched fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// Assignment record as returned by the LMS, before it is tied to a course
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawAssignment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub html_url: String,
}

/// Assignment as served to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
    pub due_at: Option<DateTime<Utc>>,
    pub url: String,
    pub course_name: String,
}

impl Assignment {
    pub fn from_raw(raw: RawAssignment, course: &Course) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            due_at: raw.due_at,
            url: raw.html_url,
            course_name: course.name.clone(),
        }
    }
}

/// Outcome of one run of the assignment aggregation pipeline.
///
/// `failed_courses` counts per-course fetches that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationResult {
    Empty { failed_courses: usize },
    Assignments {
        assignments: Vec<Assignment>,
        failed_courses: usize,
    },
    Failed(AggregationError),
}

impl AggregationResult {
    /// The sorted assignments, or an empty slice for the other outcomes
    pub fn assignments(&self) -> &[Assignment] {
        match self {
            AggregationResult::Assignments { assignments, .. } => assignments,
            _ => &[],
        }
    }
}

use crate::domain::entities::{AggregationResult, Assignment, Course, RawAssignment};
use crate::domain::errors::{AggregationError, UpstreamError};
use crate::domain::ports::{clock::Clock, lms_client::LmsClient};
use chrono::{DateTime, Duration, Utc};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

pub const DEFAULT_HORIZON_DAYS: i64 = 14;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

/// Tunables of the aggregation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationSettings {
    /// Assignments due later than `now + horizon_days` are dropped
    pub horizon_days: i64,
    /// Also drop assignments already past due instead of trusting the LMS "future" bucket
    pub exclude_past_due: bool,
    /// Upper bound on in-flight per-course requests
    pub max_concurrent_fetches: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            exclude_past_due: false,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

/// Aggregates upcoming assignments across all active courses
#[derive(Clone)]
pub struct AssignmentService {
    lms: Option<Arc<dyn LmsClient>>,
    clock: Arc<dyn Clock>,
    settings: AggregationSettings,
}

impl AssignmentService {
    /// `lms` is `None` when no LMS credential is configured; every run then fails fast.
    pub fn new(
        lms: Option<Arc<dyn LmsClient>>,
        clock: Arc<dyn Clock>,
        settings: AggregationSettings,
    ) -> Self {
        Self {
            lms,
            clock,
            settings,
        }
    }

    pub fn horizon_days(&self) -> i64 {
        self.settings.horizon_days
    }

    /// Run the pipeline once: catalog, per-course fan-out, window filter, merge, sort.
    ///
    /// Only a missing credential or a failed catalog fetch produce `Failed`.
    /// A course whose assignments cannot be fetched contributes nothing and is
    /// counted in `failed_courses`.
    pub async fn upcoming_assignments(&self) -> AggregationResult {
        let Some(lms) = &self.lms else {
            tracing::error!("Canvas API key is not set");
            return AggregationResult::Failed(AggregationError::NotConfigured);
        };

        let mut courses = match lms.fetch_active_courses().await {
            Ok(courses) => courses,
            Err(e) => {
                tracing::error!("Failed to fetch courses: {}", e);
                metrics::counter!("lms_catalog_fetch_failures_total").increment(1);
                return AggregationResult::Failed(AggregationError::Catalog(e));
            }
        };
        tracing::info!("Fetched {} courses", courses.len());

        // Pins tie-breaking between equal due dates to course id order
        courses.sort_by_key(|course| course.id);

        let now = self.clock.now();
        let fetched: Vec<(Course, Result<Vec<RawAssignment>, UpstreamError>)> =
            stream::iter(courses)
                .map(|course| {
                    let lms = Arc::clone(lms);
                    async move {
                        tracing::debug!("Fetching assignments for course {}", course.id);
                        let result = lms.fetch_assignments(&course).await;
                        (course, result)
                    }
                })
                .buffered(self.settings.max_concurrent_fetches.max(1))
                .collect()
                .await;

        let mut failed_courses = 0;
        let mut assignments = Vec::new();

        for (course, result) in fetched {
            match result {
                Ok(raw) => {
                    tracing::debug!(
                        "Fetched {} assignments for course {}",
                        raw.len(),
                        course.id
                    );
                    let upcoming = filter_window(
                        raw,
                        now,
                        self.settings.horizon_days,
                        self.settings.exclude_past_due,
                    );
                    assignments.extend(merge(&course, upcoming));
                }
                Err(e) => {
                    failed_courses += 1;
                    metrics::counter!("lms_course_fetch_failures_total").increment(1);
                    tracing::warn!(
                        "Failed to fetch assignments for course {}: {}",
                        course.id,
                        e
                    );
                }
            }
        }

        sort_chronologically(&mut assignments);
        tracing::info!(
            "Returning {} upcoming assignments ({} course fetches failed)",
            assignments.len(),
            failed_courses
        );

        settle(assignments, failed_courses)
    }
}

/// Keep assignments that have a due date no later than `now + horizon_days`.
///
/// The lower bound is only enforced with `exclude_past_due`.
pub fn filter_window(
    raw: Vec<RawAssignment>,
    now: DateTime<Utc>,
    horizon_days: i64,
    exclude_past_due: bool,
) -> Vec<RawAssignment> {
    let horizon_end = Duration::try_days(horizon_days).and_then(|d| now.checked_add_signed(d));

    raw.into_iter()
        .filter(|assignment| match assignment.due_at {
            None => false,
            Some(due) => {
                let within_horizon = horizon_end.map_or(true, |end| due <= end);
                within_horizon && (!exclude_past_due || due >= now)
            }
        })
        .collect()
}

/// Tie each assignment of a course to the course's display name
pub fn merge(course: &Course, filtered: Vec<RawAssignment>) -> Vec<Assignment> {
    filtered
        .into_iter()
        .map(|raw| Assignment::from_raw(raw, course))
        .collect()
}

/// Stable ascending sort by due date; missing due dates go last
pub fn sort_chronologically(assignments: &mut [Assignment]) {
    assignments.sort_by_key(|assignment| (assignment.due_at.is_none(), assignment.due_at));
}

fn settle(assignments: Vec<Assignment>, failed_courses: usize) -> AggregationResult {
    if assignments.is_empty() {
        AggregationResult::Empty { failed_courses }
    } else {
        AggregationResult::Assignments {
            assignments,
            failed_courses,
        }
    }
}

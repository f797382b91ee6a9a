use chrono::{DateTime, Duration, TimeZone, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

/// Instant every pipeline test treats as "now"
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
}

/// RFC 3339 timestamp `days` after `test_now()`
pub fn due_in(days: i64) -> String {
    (test_now() + Duration::days(days)).to_rfc3339()
}

/// LMS assignment record with the extra fields Canvas sends
pub fn assignment_json(id: i64, name: &str, due_at: Option<String>) -> Value {
    json!({
        "id": id,
        "name": name,
        "due_at": due_at,
        "html_url": format!("https://lms.test/assignments/{}", id),
        "points_possible": 10.0,
        "submission_types": ["online_upload"],
    })
}

pub async fn mock_courses(server: &mut ServerGuard, courses: Value) -> Mock {
    server
        .mock("GET", "/courses")
        .match_query(Matcher::UrlEncoded(
            "enrollment_state".into(),
            "active".into(),
        ))
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(courses.to_string())
        .create_async()
        .await
}

pub async fn mock_course_assignments(
    server: &mut ServerGuard,
    course_id: i64,
    assignments: Value,
) -> Mock {
    server
        .mock("GET", format!("/courses/{}/assignments", course_id).as_str())
        .match_query(Matcher::UrlEncoded("bucket".into(), "future".into()))
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(assignments.to_string())
        .create_async()
        .await
}

pub async fn mock_course_failure(server: &mut ServerGuard, course_id: i64, status: usize) -> Mock {
    server
        .mock("GET", format!("/courses/{}/assignments", course_id).as_str())
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body(r#"{"errors":[{"message":"unavailable"}]}"#)
        .create_async()
        .await
}

/// CS101 has work due in 3 and 20 days; MATH140 in 10 days and one undated item
pub async fn mock_two_course_catalog(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        mock_courses(
            server,
            json!([{"id": 1, "name": "CS101"}, {"id": 2, "name": "MATH140"}]),
        )
        .await,
        mock_course_assignments(
            server,
            1,
            json!([
                assignment_json(11, "CS101-day3", Some(due_in(3))),
                assignment_json(12, "CS101-day20", Some(due_in(20))),
            ]),
        )
        .await,
        mock_course_assignments(
            server,
            2,
            json!([
                assignment_json(21, "MATH140-day10", Some(due_in(10))),
                assignment_json(22, "MATH140-null", None),
            ]),
        )
        .await,
    ]
}

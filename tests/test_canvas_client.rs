mod helpers;

use helpers::*;
use mockito::Server;
use serde_json::json;
use std::time::Duration;
use studydesk::domain::entities::Course;
use studydesk::domain::errors::UpstreamError;
use studydesk::domain::ports::lms_client::LmsClient;
use studydesk::infrastructure::providers::{build_http_client, CanvasClient};

fn client(base_url: &str) -> CanvasClient {
    let http_client = build_http_client(Duration::from_secs(5)).expect("http client");
    CanvasClient::new(http_client, base_url, TEST_TOKEN)
}

#[tokio::test]
async fn test_fetch_active_courses_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = mock_courses(
        &mut server,
        json!([{"id": 1, "name": "CS101", "course_code": "CS 101"}]),
    )
    .await;

    let courses = client(&server.url()).fetch_active_courses().await;

    mock.assert_async().await;
    assert_eq!(
        courses,
        Ok(vec![Course {
            id: 1,
            name: "CS101".to_string()
        }])
    );
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_ignored() {
    let mut server = Server::new_async().await;
    let mock = mock_courses(&mut server, json!([])).await;

    let courses = client(&format!("{}/", server.url()))
        .fetch_active_courses()
        .await;

    mock.assert_async().await;
    assert_eq!(courses, Ok(Vec::new()));
}

#[tokio::test]
async fn test_catalog_error_carries_status_and_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/courses")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errors":[{"message":"Invalid access token."}]}"#)
        .create_async()
        .await;

    let result = client(&server.url()).fetch_active_courses().await;

    assert_eq!(
        result,
        Err(UpstreamError::Status {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: r#"{"errors":[{"message":"Invalid access token."}]}"#.to_string(),
        })
    );
}

#[tokio::test]
async fn test_unparseable_payload_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/courses")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let result = client(&server.url()).fetch_active_courses().await;

    assert!(matches!(result, Err(UpstreamError::Malformed(_))));
}

#[tokio::test]
async fn test_fetch_assignments_requests_future_bucket() {
    let mut server = Server::new_async().await;
    let mock = mock_course_assignments(
        &mut server,
        42,
        json!([assignment_json(7, "Essay", Some(due_in(2))), assignment_json(8, "Reading", None)]),
    )
    .await;

    let course = Course {
        id: 42,
        name: "ENGL15".to_string(),
    };
    let assignments =
        tokio_test::assert_ok!(client(&server.url()).fetch_assignments(&course).await);

    mock.assert_async().await;
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].name, "Essay");
    assert_eq!(assignments[0].html_url, "https://lms.test/assignments/7");
    assert_eq!(assignments[0].due_at, Some(test_now() + chrono::Duration::days(2)));
    assert_eq!(assignments[1].due_at, None);
}

#[tokio::test]
async fn test_unreachable_lms_is_transport_error() {
    // Nothing listens on port 9 of localhost
    let result = client("http://127.0.0.1:9").fetch_active_courses().await;

    assert!(matches!(result, Err(UpstreamError::Transport(_))));
}

mod helpers;

use axum::http::{Method, StatusCode};
use helpers::*;
use serde_json::json;
use std::sync::Arc;
use studydesk::application::services::TaskService;
use studydesk::domain::entities::UpdateTaskRequest;
use studydesk::domain::errors::DomainError;
use studydesk::domain::ports::task_repository::TaskRepository;

async fn setup() -> TaskService {
    let db = setup_test_db().await;
    TaskService::new(Arc::new(db) as Arc<dyn TaskRepository>)
}

#[tokio::test]
async fn test_new_tasks_are_appended_in_order() {
    let service = setup().await;

    let first = service.create_task("Read chapter 4").await.expect("create");
    let second = service.create_task("  Email TA  ").await.expect("create");

    assert_eq!(first.order, 0);
    assert_eq!(second.order, 1);
    assert_eq!(second.text, "Email TA");
    assert!(!second.completed);

    let tasks = service.list_tasks().await.expect("list");
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Read chapter 4", "Email TA"]);
}

#[tokio::test]
async fn test_reordering_changes_list_order() {
    let service = setup().await;
    let a = service.create_task("a").await.unwrap();
    let _b = service.create_task("b").await.unwrap();

    service
        .update_task(UpdateTaskRequest {
            id: a.id.clone(),
            text: None,
            completed: Some(true),
            order: Some(5),
        })
        .await
        .expect("update");

    let tasks = service.list_tasks().await.unwrap();
    assert_eq!(tasks[0].text, "b");
    assert_eq!(tasks[1].text, "a");
    assert!(tasks[1].completed);
    assert_eq!(tasks[1].order, 5);

    // Next task goes after the highest position
    let c = service.create_task("c").await.unwrap();
    assert_eq!(c.order, 6);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let service = setup().await;
    let task = service.create_task("Draft lab report").await.unwrap();

    let updated = service
        .update_task(UpdateTaskRequest {
            id: task.id.clone(),
            text: Some("Finish lab report".to_string()),
            completed: None,
            order: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.text, "Finish lab report");
    assert_eq!(updated.order, task.order);
    assert_eq!(updated.completed, task.completed);
    assert_eq!(updated.created_at, task.created_at);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let service = setup().await;

    let update = service
        .update_task(UpdateTaskRequest {
            id: "missing".to_string(),
            text: None,
            completed: Some(true),
            order: None,
        })
        .await;
    let delete = service.delete_task("missing").await;

    assert!(matches!(update, Err(DomainError::NotFound(_))));
    assert!(matches!(delete, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_task_crud_over_http() {
    let app = test_app(&test_config(&[])).await;

    let created = send(&app, Method::POST, "/api/tasks", Some(json!({"text": "Study for midterm"}))).await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created).await;
    assert_eq!(created["order"], 0);
    assert_eq!(created["completed"], false);
    let id = created["id"].as_str().expect("id").to_string();

    let toggled = send(
        &app,
        Method::PUT,
        "/api/tasks",
        Some(json!({"id": id, "completed": true})),
    )
    .await;
    assert_eq!(toggled.status(), StatusCode::OK);
    assert_eq!(body_json(toggled).await["completed"], true);

    let listed = body_json(send(&app, Method::GET, "/api/tasks", None).await).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["text"], "Study for midterm");

    let deleted = send(&app, Method::DELETE, "/api/tasks", Some(json!({"id": id}))).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(body_json(deleted).await, json!({"success": true}));

    let listed = body_json(send(&app, Method::GET, "/api/tasks", None).await).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_blank_task_is_rejected_over_http() {
    let app = test_app(&test_config(&[])).await;

    let response = send(&app, Method::POST, "/api/tasks", Some(json!({"text": "   "}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_deleting_unknown_task_over_http_is_404() {
    let app = test_app(&test_config(&[])).await;

    let response = send(&app, Method::DELETE, "/api/tasks", Some(json!({"id": "nope"}))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

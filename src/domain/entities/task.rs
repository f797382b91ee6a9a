use serde::{Deserialize, Serialize};

/// Dashboard to-do item. `order` is the explicit position in the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub order: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn new(text: String, order: i64) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            completed: false,
            order,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// DTO for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
}

/// DTO for updating a task; absent fields are left untouched
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub id: String,
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<i64>,
}

/// DTO for deleting a task
#[derive(Debug, Deserialize)]
pub struct DeleteTaskRequest {
    pub id: String,
}

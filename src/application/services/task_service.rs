use crate::domain::entities::{Task, UpdateTaskRequest};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::task_repository::TaskRepository;
use std::sync::Arc;

/// Use cases of the dashboard task list
#[derive(Clone)]
pub struct TaskService {
    task_repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    pub async fn list_tasks(&self) -> DomainResult<Vec<Task>> {
        self.task_repo.list_tasks().await
    }

    /// Append a task to the end of the list
    pub async fn create_task(&self, text: &str) -> DomainResult<Task> {
        let text = validate_text(text)?;

        let order = match self.task_repo.max_task_order().await? {
            Some(max) => max + 1,
            None => 0,
        };

        let task = Task::new(text, order);
        self.task_repo.create_task(&task).await?;

        tracing::info!("Task created: id={}, order={}", task.id, task.order);
        Ok(task)
    }

    /// Apply the provided fields to an existing task
    pub async fn update_task(&self, request: UpdateTaskRequest) -> DomainResult<Task> {
        let mut task = self
            .task_repo
            .get_task(&request.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Task {}", request.id)))?;

        if let Some(text) = request.text {
            task.text = validate_text(&text)?;
        }
        if let Some(completed) = request.completed {
            task.completed = completed;
        }
        if let Some(order) = request.order {
            task.order = order;
        }
        task.updated_at = chrono::Utc::now().to_rfc3339();

        self.task_repo.update_task(&task).await?;

        tracing::info!("Task updated: id={}", task.id);
        Ok(task)
    }

    pub async fn delete_task(&self, id: &str) -> DomainResult<()> {
        if !self.task_repo.delete_task(id).await? {
            return Err(DomainError::NotFound(format!("Task {}", id)));
        }

        tracing::info!("Task deleted: id={}", id);
        Ok(())
    }
}

fn validate_text(text: &str) -> DomainResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::ValidationError(
            "Task text cannot be empty".to_string(),
        ));
    }
    Ok(text.to_string())
}

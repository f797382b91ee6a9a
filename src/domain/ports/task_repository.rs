use crate::domain::entities::Task;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Ordered task list storage
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, ascending by `order`
    async fn list_tasks(&self) -> DomainResult<Vec<Task>>;

    async fn get_task(&self, id: &str) -> DomainResult<Option<Task>>;

    /// Highest `order` currently stored, if any task exists
    async fn max_task_order(&self) -> DomainResult<Option<i64>>;

    async fn create_task(&self, task: &Task) -> DomainResult<()>;

    async fn update_task(&self, task: &Task) -> DomainResult<()>;

    /// Returns false when no task had this id
    async fn delete_task(&self, id: &str) -> DomainResult<bool>;
}

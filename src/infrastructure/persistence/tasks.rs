use crate::domain::entities::Task;
use crate::domain::errors::DomainResult;
use crate::domain::ports::task_repository::TaskRepository;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn row_to_task(row: &AnyRow) -> Result<Task, sqlx::Error> {
    let completed: i64 = row.try_get("completed")?;
    Ok(Task {
        id: row.try_get("id")?,
        text: row.try_get("text")?,
        completed: completed != 0,
        order: row.try_get("position")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl TaskRepository for Database {
    async fn list_tasks(&self) -> DomainResult<Vec<Task>> {
        let rows = sqlx::query(
            "SELECT id, text, completed, position, created_at, updated_at
             FROM tasks
             ORDER BY position ASC, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_task).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn get_task(&self, id: &str) -> DomainResult<Option<Task>> {
        let row = sqlx::query(
            "SELECT id, text, completed, position, created_at, updated_at
             FROM tasks
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_task).transpose()?)
    }

    async fn max_task_order(&self) -> DomainResult<Option<i64>> {
        let row = sqlx::query("SELECT position FROM tasks ORDER BY position DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.try_get::<i64, _>("position")).transpose()?)
    }

    async fn create_task(&self, task: &Task) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO tasks (id, text, completed, position, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.id)
        .bind(&task.text)
        .bind(i64::from(task.completed))
        .bind(task.order)
        .bind(&task.created_at)
        .bind(&task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_task(&self, task: &Task) -> DomainResult<()> {
        sqlx::query(
            "UPDATE tasks
             SET text = ?, completed = ?, position = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&task.text)
        .bind(i64::from(task.completed))
        .bind(task.order)
        .bind(&task.updated_at)
        .bind(&task.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_task(&self, id: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

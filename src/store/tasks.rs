//! The task repository: single-statement CRUD over the `tasks` table.
//!
//! Each operation is one SQL statement, so row-level atomicity is the only
//! concurrency control; concurrent updates to the same id are
//! last-writer-wins.

use crate::error::AppError;
use crate::models::{Task, TaskInput, TaskStatus, TaskUpdate};
use sqlx::PgPool;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, status, due_date, assigned_user";

/// Inserts a new task. Status is always `Pending` regardless of caller
/// input; validation of title/description happens at the HTTP boundary.
pub async fn create(pool: &PgPool, input: TaskInput) -> Result<Task, AppError> {
    let task = Task::new(input);

    let created = sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (id, title, description, status, due_date) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(task.id)
    .bind(task.title)
    .bind(task.description)
    .bind(task.status)
    .bind(task.due_date)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Returns all tasks, unfiltered, in storage-native order. Clients apply
/// their own filtering (e.g. due-date buckets against their local calendar).
pub async fn list(pool: &PgPool) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks"))
        .fetch_all(pool)
        .await?;

    Ok(tasks)
}

/// Sets a task's status and assignee in one statement.
///
/// The assignee is overwritten unconditionally; an empty or whitespace-only
/// name clears it. Fails with `NotFound` if the id does not exist.
pub async fn update_status_and_assignment(
    pool: &PgPool,
    id: Uuid,
    update: TaskUpdate,
) -> Result<Task, AppError> {
    let assigned_user = update
        .assigned_user
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET status = $1, assigned_user = $2 WHERE id = $3 \
         RETURNING {TASK_COLUMNS}"
    ))
    .bind(update.status)
    .bind(assigned_user)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Forces a task's status to `Completed`, leaving every other field
/// untouched. Fails with `NotFound` if the id does not exist.
pub async fn complete(pool: &PgPool, id: Uuid) -> Result<Task, AppError> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET status = $1 WHERE id = $2 RETURNING {TASK_COLUMNS}"
    ))
    .bind(TaskStatus::Completed)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Deletes a task. Idempotent: deleting an id that does not exist affects
/// zero rows and still succeeds.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

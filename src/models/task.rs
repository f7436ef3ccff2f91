use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Represents the lifecycle stage of a task.
/// Corresponds to the `task_status` SQL enum.
///
/// There is deliberately no transition restriction: any status may move to
/// any other via an update. `complete` is a one-way convenience into
/// `Completed` from any state.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is yet to be started. The initial status of every task.
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

/// Input structure for creating a task.
///
/// There is no `status` field: new tasks always start as `Pending`, and a
/// status supplied by the caller is ignored at deserialization.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Required, must not be blank.
    #[validate(length(max = 200), custom = "not_blank")]
    pub title: String,

    /// A description of the task. Required, must not be blank.
    #[validate(length(max = 1000), custom = "not_blank")]
    pub description: String,

    /// Optional due date (calendar date, no time component).
    pub due_date: Option<NaiveDate>,
}

/// Input structure for updating a task's status and assignee.
///
/// `status` deserializes into the closed `TaskStatus` enum, so unrecognized
/// values are rejected at the boundary and never reach storage.
/// `assigned_user` overwrites the stored value unconditionally; an empty or
/// whitespace-only name clears the assignment.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub status: TaskStatus,
    pub assigned_user: Option<String>,
}

/// A task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier (UUID v4), generated server-side and never reused.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Optional due date; clients bucket tasks ("today", "overdue") against
    /// their own local calendar date.
    pub due_date: Option<NaiveDate>,
    /// Free-text assignee name, if any.
    pub assigned_user: Option<String>,
}

impl Task {
    /// Creates a new `Task` from `TaskInput` with a fresh UUID, status
    /// `Pending`, and no assignee.
    pub fn new(input: TaskInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Pending,
            due_date: input.due_date,
            assigned_user: None,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

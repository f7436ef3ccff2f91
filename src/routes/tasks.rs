use crate::{
    error::AppError,
    models::{TaskInput, TaskUpdate},
    store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Retrieves the full task list.
///
/// Returns every task, unfiltered, in storage order. Clients do their own
/// filtering (e.g. "due today" / "overdue" buckets against the viewer's
/// local calendar date).
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: storage failure.
#[get("")]
pub async fn get_tasks(pool: web::Data<PgPool>) -> Result<impl Responder, AppError> {
    let tasks = store::tasks::list(&pool).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// Expects a JSON payload conforming to `TaskInput`. New tasks always start
/// with status `pending`; a `status` field in the payload is ignored.
///
/// ## Request Body:
/// - `title`: required, must not be blank.
/// - `description`: required, must not be blank.
/// - `due_date` (optional): calendar date, `YYYY-MM-DD`.
///
/// ## Responses:
/// - `200 OK`: the created `Task`.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `422 Unprocessable Entity`: blank title or description.
/// - `500 Internal Server Error`: storage failure.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let task = store::tasks::create(&pool, task_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates a task's status and assignee.
///
/// `status` must be one of `pending`, `in-progress`, `completed`; any other
/// value is rejected before reaching storage. The assignee is overwritten
/// unconditionally, and an empty name clears it. There is no transition
/// restriction between statuses.
///
/// ## Responses:
/// - `200 OK`: the updated `Task`.
/// - `400 Bad Request`: unrecognized status value.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no task with the given id.
/// - `500 Internal Server Error`: storage failure.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    update: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task =
        store::tasks::update_status_and_assignment(&pool, task_id.into_inner(), update.into_inner())
            .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Marks a task as completed.
///
/// Shorthand for a status update to `completed` that leaves the assignee and
/// every other field untouched. Works from any prior status.
///
/// ## Responses:
/// - `200 OK`: the updated `Task` with status `completed`.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no task with the given id.
/// - `500 Internal Server Error`: storage failure.
#[put("/{id}/complete")]
pub async fn complete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = store::tasks::complete(&pool, task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task.
///
/// Idempotent: deleting an id that no longer exists affects zero rows and
/// still acknowledges success.
///
/// ## Responses:
/// - `200 OK`: `{"message": ...}` acknowledgment.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: storage failure.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    store::tasks::delete(&pool, task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}

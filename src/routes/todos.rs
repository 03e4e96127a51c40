/// Todo CRUD endpoints
///
/// This module provides the five CRUD endpoints for the todo resource.
/// No endpoint requires authentication.
///
/// # Endpoints
///
/// - `GET    /todos` - List todos
/// - `GET    /todos/:id` - Get todo by id
/// - `POST   /todos` - Create todo
/// - `PUT    /todos/:id` - Update todo
/// - `DELETE /todos/:id` - Delete todo
///
/// Every handler maps its failures to a scoped response for that request;
/// a bad identifier or a storage hiccup never takes the server down.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    models::todo::{CreateTodo, Todo, UpdateTodo},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// Parses a path identifier, rejecting non-integer input as a client error
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid todo id".to_string()))
}

/// Unwraps a JSON body extraction, mapping any rejection (syntax error,
/// wrong field type, missing content-type) to the payload error response
fn require_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| ApiError::BadRequest("Invalid request payload".to_string()))
}

/// List todos
///
/// Returns every row in the table as a JSON array, `[]` when empty.
/// Row order is the storage engine's default.
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// ```
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = Todo::list(&state.db).await?;

    Ok(Json(todos))
}

/// Get todo by id
///
/// # Endpoint
///
/// ```text
/// GET /todos/:id
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Non-integer identifier
/// - `404 Not Found`: No todo with this identifier
/// - `500 Internal Server Error`: Storage failure
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(&id)?;

    let todo = Todo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

    Ok(Json(todo))
}

/// Create todo
///
/// Inserts a new row with the submitted task and status; the storage engine
/// assigns the identifier, which is returned in the response body.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// {"task": "buy milk", "status": "pending"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed JSON body
/// - `500 Internal Server Error`: Storage failure
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let input = require_payload(payload)?;

    let todo = Todo::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update todo
///
/// Sets the task and status of the row matching the identifier. Responds
/// with an empty body on success.
///
/// # Endpoint
///
/// ```text
/// PUT /todos/:id
/// Content-Type: application/json
///
/// {"task": "buy milk", "status": "done"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Non-integer identifier or malformed JSON body
/// - `404 Not Found`: No todo with this identifier
/// - `500 Internal Server Error`: Storage failure
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let input = require_payload(payload)?;

    let updated = Todo::update(&state.db, id, input).await?;
    if !updated {
        return Err(ApiError::NotFound("Todo not found".to_string()));
    }

    Ok(StatusCode::OK)
}

/// Delete todo
///
/// Removes the row matching the identifier. Responds with an empty body on
/// success.
///
/// # Endpoint
///
/// ```text
/// DELETE /todos/:id
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Non-integer identifier
/// - `404 Not Found`: No todo with this identifier
/// - `500 Internal Server Error`: Storage failure
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    let deleted = Todo::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Todo not found".to_string()));
    }

    Ok(StatusCode::OK)
}

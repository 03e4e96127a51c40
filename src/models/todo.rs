/// Todo model and database operations
///
/// A todo is the sole domain entity: an engine-assigned identifier, a
/// free-form task description, and a free-form status label. There is no
/// state machine and no relationship to any other entity; a row either
/// exists or it does not.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id     BIGSERIAL PRIMARY KEY,
///     task   TEXT NOT NULL,
///     status TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Todo model representing one row of the todos table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique identifier, assigned by the storage engine on insert
    pub id: i64,

    /// Free-form task description
    pub task: String,

    /// Free-form status label (no enumerated constraint)
    pub status: String,
}

/// Input for creating a new todo
///
/// Any `id` field in the request body is ignored; the storage engine
/// assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Task description
    pub task: String,

    /// Status label
    pub status: String,
}

/// Input for updating an existing todo (task and status only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New task description
    pub task: String,

    /// New status label
    pub status: String,
}

impl Todo {
    /// Lists all todos
    ///
    /// Row order is the storage engine's default; no ORDER BY is issued.
    /// Returns an empty vector (serialized as `[]`) when the table is empty.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, task, status FROM todos")
            .fetch_all(pool)
            .await
    }

    /// Finds a todo by its identifier
    ///
    /// Returns `None` when no row matches.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, task, status FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Creates a new todo
    ///
    /// Returns the inserted row including the engine-assigned identifier.
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (task, status) VALUES ($1, $2) RETURNING id, task, status",
        )
        .bind(data.task)
        .bind(data.status)
        .fetch_one(pool)
        .await
    }

    /// Updates the task and status of an existing todo
    ///
    /// Returns `false` when no row matches the identifier.
    pub async fn update(pool: &PgPool, id: i64, data: UpdateTodo) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET task = $1, status = $2 WHERE id = $3")
            .bind(data.task)
            .bind(data.status)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a todo by its identifier
    ///
    /// Returns `false` when no row matches the identifier.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

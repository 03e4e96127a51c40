/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Per-test database schema setup and cleanup
/// - Router construction with test configuration
/// - Request helpers
///
/// Each test gets its own PostgreSQL schema (selected via search_path) so
/// tests can run in parallel against one database. The todos table is
/// created directly rather than through the migration runner because sqlx's
/// migration bookkeeping is global to the database, not to a schema.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use tower::Service as _;

use todo_api::app::{build_router, AppState};
use todo_api::config::{ApiConfig, Config, DatabaseConfig};

static SCHEMA_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    schema: String,
    admin: PgPool,
}

impl TestContext {
    /// Creates a new test context with a fresh schema
    ///
    /// Returns `None` when `DATABASE_URL` is not configured, so the suite
    /// can be run without a database (the tests simply skip).
    pub async fn new() -> anyhow::Result<Option<Self>> {
        dotenvy::dotenv().ok();

        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping integration test");
            return Ok(None);
        };

        let schema = format!(
            "todo_test_{}_{}",
            std::process::id(),
            SCHEMA_COUNTER.fetch_add(1, Ordering::Relaxed)
        );

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await?;
        sqlx::query(&format!("CREATE SCHEMA \"{schema}\""))
            .execute(&admin)
            .await?;

        let options = PgConnectOptions::from_str(&url)?
            .options([("search_path", schema.as_str())]);
        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE todos (
                id     BIGSERIAL PRIMARY KEY,
                task   TEXT NOT NULL,
                status TEXT NOT NULL
            )",
        )
        .execute(&db)
        .await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Some(TestContext {
            db,
            app,
            schema,
            admin,
        }))
    }

    /// Cleans up test data
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query(&format!("DROP SCHEMA \"{}\" CASCADE", self.schema))
            .execute(&self.admin)
            .await?;
        Ok(())
    }
}

/// Sends a request to the app and returns (status, body bytes)
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Body,
) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, bytes)
}

/// Sends a request with a JSON body
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, Bytes) {
    send(app, method, uri, Body::from(body.to_string())).await
}

/// Creates a todo via the API and returns its assigned id
pub async fn create_todo(ctx: &TestContext, task: &str, status: &str) -> i64 {
    let (code, body) = send_json(
        &ctx.app,
        "POST",
        "/todos",
        serde_json::json!({"task": task, "status": status}),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);

    let todo: serde_json::Value = serde_json::from_slice(&body).unwrap();
    todo["id"].as_i64().unwrap()
}

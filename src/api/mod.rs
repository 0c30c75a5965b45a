//! # HTTP API
//!
//! Router combining the four resource routers and the health check. Handlers share
//! the connection pool through [`ApiState`].

/// Bucket list item endpoints
pub mod bucket_list;
/// Budget endpoints
pub mod budgets;
/// Error to response mapping
pub mod error;
/// Extractors with structured rejections
pub mod extract;
/// Reminder endpoints
pub mod reminders;
/// User endpoints
pub mod users;

use crate::config::ServerConfig;
use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    http::{HeaderValue, Uri},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
/// Holds the process-wide connection pool; cloning it is cheap.
#[derive(Clone)]
pub struct ApiState {
    /// Connection pool for all database operations
    pub db: DatabaseConnection,
}

impl ApiState {
    /// Creates a new `ApiState` around an open pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback_handler(uri: Uri) -> Error {
    Error::RouteNotFound {
        path: uri.path().to_string(),
    }
}

/// Builds the resource routes with state attached, without middleware.
///
/// Collection paths answer both with and without a trailing slash. Unknown paths get
/// the JSON error body.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/users", users::user_routes())
        .route("/users/", post(users::create_user_handler))
        .nest("/bucketlist", bucket_list::bucket_list_routes())
        .route("/bucketlist/", post(bucket_list::create_item_handler))
        .nest("/reminders", reminders::reminder_routes())
        .route("/reminders/", post(reminders::create_reminder_handler))
        .nest("/budgets", budgets::budget_routes())
        .route("/budgets/", post(budgets::create_budget_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Parses the configured CORS allow-list.
///
/// # Errors
/// Returns `Error::Config` for an entry that is not an `http://` or `https://` origin.
pub fn parse_cors_origins(origins: &[String]) -> Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            let trimmed = origin.trim();
            let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
            if !has_scheme || trimmed.ends_with('/') {
                return Err(Error::Config {
                    message: format!("Invalid CORS origin '{origin}'"),
                });
            }
            trimmed.parse::<HeaderValue>().map_err(|e| Error::Config {
                message: format!("Invalid CORS origin '{origin}': {e}"),
            })
        })
        .collect()
}

/// Builds the full application: resource routes plus CORS and request tracing.
///
/// An empty `cors_origins` list allows any origin.
///
/// # Errors
/// Returns `Error::Config` if any configured CORS origin is invalid.
pub fn app(state: ApiState, server: &ServerConfig) -> Result<Router> {
    let cors = if server.cors_origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = parse_cors_origins(&server.cors_origins)?;
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };
    let cors = cors.allow_methods(Any).allow_headers(Any);

    Ok(router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;
use crate::database::connection::DatabaseManager;
use crate::services::high_scores::HighScoreService;

/// Body of `/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub database: DatabaseHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub connection_pool_size: u32,
    /// Time taken by the `SELECT 1` check.
    pub response_time_ms: u64,
    /// Chats that have won at least one game.
    pub tracked_chats: i64,
}

/// State shared by the health routes.
#[derive(Clone)]
pub struct AppState {
    pub high_scores: HighScoreService,
    pub start_time: DateTime<Utc>,
}

/// Health check HTTP server.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(high_scores: HighScoreService) -> Self {
        let state = AppState {
            high_scores,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    let start = std::time::Instant::now();
    let db = state.high_scores.database();

    let tracked_chats = match test_database_connection(db).await {
        Ok(_) => state.high_scores.tracked_chats().await.ok(),
        Err(e) => {
            tracing::warn!("Health check database query failed: {}", e);
            None
        }
    };

    let response_time_ms = start.elapsed().as_millis() as u64;
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    let Some(tracked_chats) = tracked_chats else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            status: "healthy".to_string(),
            connection_pool_size: db.pool.size(),
            response_time_ms,
            tracked_chats,
        },
        uptime_seconds: uptime,
    }))
}

async fn readiness_check(State(state): State<AppState>) -> Result<Json<&'static str>, StatusCode> {
    match test_database_connection(state.high_scores.database()).await {
        Ok(_) => Ok(Json("ready")),
        Err(_) => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

async fn test_database_connection(db: &DatabaseManager) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1")
        .fetch_one(&db.pool)
        .await?;

    Ok(())
}

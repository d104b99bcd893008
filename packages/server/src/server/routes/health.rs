use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::server::app::AxumAppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overall {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

#[derive(Serialize)]
pub struct HealthReport {
    status: Overall,
    version: &'static str,
    database: DatabaseCheck,
}

#[derive(Serialize)]
pub struct DatabaseCheck {
    status: CheckStatus,
    latency_ms: u128,
    pool_size: u32,
    pool_idle: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseCheck {
    async fn run(state: &AxumAppState) -> Self {
        let started = Instant::now();
        let outcome = tokio::time::timeout(
            PING_TIMEOUT,
            sqlx::query("SELECT 1").execute(&state.db_pool),
        )
        .await;

        let error = match outcome {
            Ok(Ok(_)) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(_) => Some(format!("no answer within {}s", PING_TIMEOUT.as_secs())),
        };

        Self {
            status: if error.is_none() {
                CheckStatus::Ok
            } else {
                CheckStatus::Error
            },
            latency_ms: started.elapsed().as_millis(),
            pool_size: state.db_pool.size(),
            pool_idle: state.db_pool.num_idle(),
            error,
        }
    }
}

/// Catalog liveness: 200 while the books database answers a ping, 503 otherwise
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthReport>) {
    let database = DatabaseCheck::run(&state).await;

    let (code, status) = match database.status {
        CheckStatus::Ok => (StatusCode::OK, Overall::Healthy),
        CheckStatus::Error => (StatusCode::SERVICE_UNAVAILABLE, Overall::Unhealthy),
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

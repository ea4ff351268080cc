use axum::{http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn route_health() -> Router<AppState> {
    Router::new().route("/", get(health)).route("/rich", get(health_rich))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub code: u16,
}
impl Health {
    pub fn of(status: StatusCode) -> Self {
        Self { status: status.to_string(), code: status.as_u16() }
    }
}

#[tracing::instrument]
pub async fn health() -> String {
    "ok".to_string()
}

#[tracing::instrument]
pub async fn health_rich() -> Json<Health> {
    Json(Health::of(StatusCode::OK))
}

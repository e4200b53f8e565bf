use axum::{Json, extract::State};

use crate::{AppState, models::HealthResponse};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.analysis_service.health())
}

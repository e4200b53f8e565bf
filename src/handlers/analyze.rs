use axum::{Json, extract::State};

use crate::{
    AppState,
    error::AppResult,
    models::{AnalyzeRequest, AnalyzeResponse},
};

pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    let response = state.analysis_service.analyze(input.texts).await?;

    Ok(Json(response))
}

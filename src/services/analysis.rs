use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{AnalyzeResponse, HealthResponse},
    scorer::Scorer,
    telemetry::{ANALYZE_BATCH_SIZE, ANALYZE_REQUESTS_TOTAL, TEXTS_ANALYZED_TOTAL},
};

#[derive(Clone)]
pub struct AnalysisService {
    scorer: Arc<dyn Scorer>,
}

impl AnalysisService {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    #[instrument(name = "analysis.analyze", skip(self, texts), fields(batch_size = texts.len()))]
    pub async fn analyze(&self, texts: Vec<String>) -> AppResult<AnalyzeResponse> {
        let results = self.scorer.score_batch(&texts).await?;

        // One score per input text, in input order. A backend that breaks
        // this would corrupt every downstream text-to-score pairing.
        if results.len() != texts.len() {
            return Err(AppError::Internal(format!(
                "scorer returned {} results for {} texts",
                results.len(),
                texts.len()
            )));
        }

        ANALYZE_REQUESTS_TOTAL.add(1, &[]);
        TEXTS_ANALYZED_TOTAL.add(texts.len() as u64, &[]);
        ANALYZE_BATCH_SIZE.record(texts.len() as f64, &[]);

        tracing::info!(batch_size = texts.len(), scorer = self.scorer.name(), "Batch scored");

        Ok(AnalyzeResponse { results })
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            model_loaded: self.scorer.is_loaded(),
        }
    }
}

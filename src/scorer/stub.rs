use super::Scorer;
use crate::models::ToxicityScore;

/// Placeholder scorer used until a real model backend exists.
///
/// Scores every text as all-zero without looking at its content and never
/// reports a loaded model.
#[derive(Debug, Default, Clone)]
pub struct StubScorer;

impl StubScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Scorer for StubScorer {
    async fn score_batch(&self, texts: &[String]) -> anyhow::Result<Vec<ToxicityScore>> {
        Ok(texts.iter().map(|_| ToxicityScore::zero()).collect())
    }

    fn is_loaded(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub mod stub;

pub use stub::StubScorer;

use crate::models::ToxicityScore;

/// Backend that turns a batch of texts into toxicity scores.
///
/// Implementations must return exactly one score per input text, in input
/// order. `is_loaded` reports whether real model weights are resident; the
/// health endpoint surfaces it.
#[async_trait::async_trait]
pub trait Scorer: Send + Sync {
    async fn score_batch(&self, texts: &[String]) -> anyhow::Result<Vec<ToxicityScore>>;
    fn is_loaded(&self) -> bool;
    fn name(&self) -> &str;
}

mod analysis;

pub use analysis::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ToxicityScore};

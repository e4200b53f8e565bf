use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub texts: Vec<String>,
}

/// Per-text toxicity scores, one probability-like value per category.
///
/// Category names match the Detoxify model outputs and are part of the wire
/// contract, so the field names serialize as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToxicityScore {
    pub toxic: f64,
    pub severe_toxic: f64,
    pub obscene: f64,
    pub threat: f64,
    pub insult: f64,
    pub identity_attack: f64,
}

impl ToxicityScore {
    pub fn zero() -> Self {
        Self {
            toxic: 0.0,
            severe_toxic: 0.0,
            obscene: 0.0,
            threat: 0.0,
            insult: 0.0,
            identity_attack: 0.0,
        }
    }

    fn categories(&self) -> [(&'static str, f64); 6] {
        [
            ("toxic", self.toxic),
            ("severe_toxic", self.severe_toxic),
            ("obscene", self.obscene),
            ("threat", self.threat),
            ("insult", self.insult),
            ("identity_attack", self.identity_attack),
        ]
    }

    /// Highest score across all six categories.
    pub fn max_score(&self) -> f64 {
        self.categories()
            .into_iter()
            .map(|(_, score)| score)
            .fold(f64::MIN, f64::max)
    }

    /// Name of the highest-scoring category. Ties keep the earlier category
    /// in declaration order.
    pub fn primary_category(&self) -> &'static str {
        let mut max = ("toxic", self.toxic);
        for (name, score) in self.categories() {
            if score > max.1 {
                max = (name, score);
            }
        }
        max.0
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub results: Vec<ToxicityScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_with(threat: f64, insult: f64) -> ToxicityScore {
        ToxicityScore {
            threat,
            insult,
            ..ToxicityScore::zero()
        }
    }

    #[test]
    fn test_zero_score_all_fields() {
        let score = ToxicityScore::zero();
        assert_eq!(score.toxic, 0.0);
        assert_eq!(score.severe_toxic, 0.0);
        assert_eq!(score.obscene, 0.0);
        assert_eq!(score.threat, 0.0);
        assert_eq!(score.insult, 0.0);
        assert_eq!(score.identity_attack, 0.0);
    }

    #[test]
    fn test_max_score_picks_highest() {
        let score = score_with(0.7, 0.3);
        assert_eq!(score.max_score(), 0.7);
    }

    #[test]
    fn test_max_score_all_zero() {
        assert_eq!(ToxicityScore::zero().max_score(), 0.0);
    }

    #[test]
    fn test_primary_category_picks_highest() {
        let score = score_with(0.2, 0.9);
        assert_eq!(score.primary_category(), "insult");
    }

    #[test]
    fn test_primary_category_tie_keeps_first() {
        let score = ToxicityScore {
            toxic: 0.5,
            obscene: 0.5,
            ..ToxicityScore::zero()
        };
        assert_eq!(score.primary_category(), "toxic");
    }

    #[test]
    fn test_primary_category_all_zero_defaults_to_toxic() {
        assert_eq!(ToxicityScore::zero().primary_category(), "toxic");
    }

    #[test]
    fn test_score_serializes_with_wire_field_names() {
        let json = serde_json::to_value(ToxicityScore::zero()).unwrap();
        for field in [
            "toxic",
            "severe_toxic",
            "obscene",
            "threat",
            "insult",
            "identity_attack",
        ] {
            assert_eq!(json[field], 0.0, "missing or non-zero field {field}");
        }
    }

    #[test]
    fn test_analyze_request_deserializes() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"texts": ["hello", "world"]}"#).unwrap();
        assert_eq!(req.texts, vec!["hello", "world"]);
    }

    #[test]
    fn test_analyze_request_rejects_non_list_texts() {
        let result = serde_json::from_str::<AnalyzeRequest>(r#"{"texts": "not a list"}"#);
        assert!(result.is_err());
    }
}

//! Sentiment Classifier — derives a coarse label and a confidence
//! percentage from a compound polarity score in [-1, 1].
//!
//! Scoring itself is delegated to a `PolarityScorer`, carried in `AppState`
//! as `Arc<dyn PolarityScorer>` so the backend can be swapped or mocked
//! without touching handlers.

pub mod handlers;
pub mod lexicon;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Narrow scorer seam. Implementations must be pure and non-blocking;
/// the default backend is `lexicon::LexiconScorer`, loaded once at startup.
pub trait PolarityScorer: Send + Sync {
    /// Returns a compound polarity in [-1, 1] for `text`.
    fn polarity(&self, text: &str) -> anyhow::Result<f64>;
}

/// Label thresholds. Boundaries are inclusive: exactly 0.05 is positive,
/// exactly -0.05 is negative.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

const CONFIDENCE_BONUS: u8 = 15;
const CONFIDENCE_CAP: u8 = 99;
/// Flat default for non-empty text whose score magnitude rounds to zero.
/// Presentational heuristic, not a probability.
const NEUTRAL_CONFIDENCE: u8 = 90;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

/// Outcome of classifying one piece of text. Single-request lifecycle,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: u8,
}

/// Classifies `text`, delegating scoring to `scorer`.
///
/// Text that is empty after trimming short-circuits to a neutral
/// zero-confidence result without invoking the scorer. A scorer failure
/// propagates as a classifier failure.
pub fn classify(text: &str, scorer: &dyn PolarityScorer) -> Result<SentimentResult, AppError> {
    if text.trim().is_empty() {
        return Ok(SentimentResult {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0,
        });
    }

    let score = scorer
        .polarity(text)
        .map_err(|e| AppError::Scorer(format!("polarity scoring failed: {e}")))?;

    let label = if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let raw = (score.abs() * 100.0).floor() as u8;
    let confidence = if raw > 0 {
        raw.saturating_add(CONFIDENCE_BONUS).min(CONFIDENCE_CAP)
    } else {
        NEUTRAL_CONFIDENCE
    };

    Ok(SentimentResult {
        score,
        label,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticScorer(f64);

    impl PolarityScorer for StaticScorer {
        fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
            anyhow::bail!("scorer offline")
        }
    }

    #[test]
    fn test_empty_and_whitespace_text_short_circuit() {
        // FailingScorer proves the scorer is never consulted on this path
        let empty = classify("", &FailingScorer).unwrap();
        let blank = classify("   ", &FailingScorer).unwrap();
        for result in [empty, blank] {
            assert_eq!(result.score, 0.0);
            assert_eq!(result.label, SentimentLabel::Neutral);
            assert_eq!(result.confidence, 0);
        }
    }

    #[test]
    fn test_positive_boundary_score_0_05() {
        let result = classify("fine", &StaticScorer(0.05)).unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        // floor(0.05 * 100) + 15 = 20
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_negative_boundary_score_minus_0_05() {
        let result = classify("ugh", &StaticScorer(-0.05)).unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_zero_score_on_nonempty_text_gets_flat_90() {
        let result = classify("the sky exists", &StaticScorer(0.0)).unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn test_neutral_label_with_nonzero_magnitude_keeps_bonus_formula() {
        // 0.049 is below the positive threshold but floors to raw = 4
        let result = classify("meh", &StaticScorer(0.049)).unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 19);
    }

    #[test]
    fn test_confidence_caps_at_99() {
        let positive = classify("best day ever", &StaticScorer(1.0)).unwrap();
        assert_eq!(positive.label, SentimentLabel::Positive);
        assert_eq!(positive.confidence, 99);

        let negative = classify("worst day ever", &StaticScorer(-1.0)).unwrap();
        assert_eq!(negative.label, SentimentLabel::Negative);
        assert_eq!(negative.confidence, 99);
    }

    #[test]
    fn test_scorer_failure_propagates() {
        let err = classify("some text", &FailingScorer).unwrap_err();
        assert!(matches!(err, AppError::Scorer(_)));
    }

    #[test]
    fn test_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(SentimentLabel::Neutral.as_str(), "neutral");
    }
}

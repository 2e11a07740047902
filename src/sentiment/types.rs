use serde::{Deserialize, Serialize};

/// Polarity scores attached to a review as its `sentiment` field.
///
/// `neg`, `neu` and `pos` are proportions in `[0, 1]` summing to ~1.
/// `compound` is the normalized overall polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScores {
    /// Scores for text that carries no sentiment at all.
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self::neutral()
    }
}

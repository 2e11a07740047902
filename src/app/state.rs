use crate::sentiment::{SentimentScorer, SentimentScores, VaderAnalyzer};
use crate::storage::memory::ReviewStore;
use crate::storage::types::{Review, ScoredReview};

use std::sync::Arc;

/// Everything a request needs: the review store and the sentiment scorer.
pub struct ReviewService {
    pub store: ReviewStore,
    scorer: Arc<dyn SentimentScorer>,
}

impl ReviewService {
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Arc<Self> {
        Arc::new(Self { store, scorer })
    }

    /// Service over the given reviews, scored with the built-in analyzer.
    pub fn with_reviews(reviews: Vec<Review>) -> Arc<Self> {
        Self::new(
            ReviewStore::from_reviews(reviews),
            Arc::new(VaderAnalyzer::new()),
        )
    }

    pub fn score_text(&self, text: &str) -> SentimentScores {
        self.scorer.polarity_scores(text)
    }

    /// Returns an annotated copy of the review; the original is left untouched.
    pub fn score(&self, review: &Review) -> ScoredReview {
        review.clone().scored(self.score_text(&review.review_body))
    }
}

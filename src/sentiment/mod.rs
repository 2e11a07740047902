//! Sentiment Scoring Module
//!
//! Turns free-text review bodies into polarity scores.
//!
//! ## Overview
//! The rest of the service only depends on the [`SentimentScorer`] trait, so the
//! scoring model can be swapped without touching the query or ingestion paths.
//! The built-in [`VaderAnalyzer`] is a rule-based, lexicon-driven scorer in the
//! style of VADER: every known word carries a valence, modified by nearby
//! boosters, negations, capitalization and punctuation.
//!
//! ## Submodules
//! - **`analyzer`**: The scoring rules and the `SentimentScorer` implementation.
//! - **`lexicon`**: Word valences, booster words and negations.
//! - **`tokenizer`**: Splits text into scoring tokens, preserving case.
//! - **`types`**: The `SentimentScores` mapping returned to clients.

pub mod analyzer;
pub mod lexicon;
pub mod tokenizer;
pub mod types;

pub use analyzer::{SentimentScorer, VaderAnalyzer};
pub use types::SentimentScores;

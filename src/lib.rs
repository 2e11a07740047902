//! Review Sentiment Service Library
//!
//! This library crate defines the modules that make up the review service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`sentiment`**: Lexicon-based polarity scoring of free text, behind the
//!   `SentimentScorer` trait.
//! - **`storage`**: The in-memory, append-only `ReviewStore` and the CSV bulk loader.
//! - **`search`**: Filters reviews by location and date range and ranks them by sentiment.
//! - **`ingestion`**: Validates, stamps and appends new reviews.
//! - **`app`**: The shared `ReviewService` and the HTTP router.
//! - **`config`** / **`error`**: Process settings and the API error type.

pub mod app;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod search;
pub mod sentiment;
pub mod storage;

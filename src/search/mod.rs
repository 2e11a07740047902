//! Review Query Module
//!
//! Answers read requests: which reviews match a location and date range, and
//! how do they rank by sentiment.
//!
//! ## Pipeline
//! 1. **Validate**: Query-string parameters become a `ReviewFilter`; bad dates are rejected up front.
//! 2. **Filter**: Exact, case-sensitive location match and an inclusive timestamp range.
//! 3. **Score**: Each surviving review is scored into a fresh `ScoredReview` copy.
//! 4. **Rank**: Stable sort by descending `compound` score.
//!
//! ## Submodules
//! - **`engine`**: Filtering and ranking logic.
//! - **`handlers`**: The Axum `GET` handler.
//! - **`types`**: Query-string parameters.

pub mod engine;
pub mod handlers;
pub mod types;

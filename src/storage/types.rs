//! Review Data Types
//!
//! Defines the canonical review record kept in the store and the scored copy
//! returned to clients. Field names match the wire and CSV column names.

use crate::sentiment::SentimentScores;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed format of every review `Timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single customer review as it lives in the store.
///
/// Bulk-loaded rows may lack a `ReviewId`; reviews created through the API
/// always carry a generated one. Any other columns of a bulk-loaded row are
/// kept in `extra` and echoed back as top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(
        rename = "ReviewId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub review_id: Option<String>,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// A review annotated with its sentiment for a response.
///
/// Serializes as the review's own fields plus a `sentiment` object. Scoring
/// always produces one of these, the stored `Review` is never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: SentimentScores,
}

impl Review {
    pub fn scored(self, sentiment: SentimentScores) -> ScoredReview {
        ScoredReview {
            review: self,
            sentiment,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|id| !id.trim().is_empty()))
}

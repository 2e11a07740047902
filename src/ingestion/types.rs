//! Ingestion Data Types
//!
//! Request payloads accepted when a client submits a review.

use serde::Deserialize;

/// Body of a review submission as sent by the client.
///
/// Both fields are optional at the parsing stage so that a well-formed body
/// with a missing field can be told apart from malformed JSON. `ReviewId` and
/// `Timestamp` are always server-generated; if a client sends them they are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct NewReviewRequest {
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "ReviewBody")]
    pub review_body: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub location: String,
    pub review_body: String,
}

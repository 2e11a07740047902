use super::types::{NewReview, NewReviewRequest};
use crate::app::response::JsonBody;
use crate::app::state::ReviewService;
use crate::error::ApiError;
use crate::storage::types::{Review, ScoredReview, TIMESTAMP_FORMAT};

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::Extension;
use chrono::Local;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

pub async fn handle_create_review(
    Extension(service): Extension<Arc<ReviewService>>,
    body: Bytes,
) -> Result<JsonBody<ScoredReview>, ApiError> {
    let created = ingest(&service, &body).await?;
    Ok(JsonBody(StatusCode::CREATED, created))
}

/// Validates a submission, appends it to the store and returns it scored.
///
/// Validation happens before anything is written, so a rejected request never
/// changes the store.
pub async fn ingest(service: &ReviewService, body: &[u8]) -> Result<ScoredReview, ApiError> {
    let new_review = parse_new_review(body)?;

    let review = Review {
        review_id: Some(Uuid::new_v4().to_string()),
        location: new_review.location,
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        review_body: new_review.review_body,
        extra: BTreeMap::new(),
    };

    service.store.append(review.clone()).await?;
    let scored = service.score(&review);

    tracing::info!(
        "Ingested review {} for {} (compound {})",
        review.review_id.as_deref().unwrap_or_default(),
        review.location,
        scored.sentiment.compound
    );
    Ok(scored)
}

/// Classifies a raw request body.
///
/// Empty (or whitespace-only) bodies, unparsable JSON and missing fields each
/// map to their own error.
pub fn parse_new_review(body: &[u8]) -> Result<NewReview, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }

    let request: NewReviewRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Failed to parse review body: {}", e);
        ApiError::InvalidFormat
    })?;

    match (request.location, request.review_body) {
        (Some(location), Some(review_body)) => Ok(NewReview {
            location,
            review_body,
        }),
        _ => Err(ApiError::MissingField),
    }
}

use super::engine::search;
use super::types::ReviewQuery;
use crate::app::response::JsonBody;
use crate::app::state::ReviewService;
use crate::error::ApiError;
use crate::storage::types::ScoredReview;

use axum::Extension;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use std::sync::Arc;

pub async fn handle_query(
    Extension(service): Extension<Arc<ReviewService>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<JsonBody<Vec<ScoredReview>>, ApiError> {
    let Query(pairs) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let query = ReviewQuery::from_pairs(pairs);

    let results = search(&service, &query).await?;
    Ok(JsonBody(StatusCode::OK, results))
}

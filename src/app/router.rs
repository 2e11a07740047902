use super::state::ReviewService;
use crate::error::ApiError;
use crate::ingestion::handlers::handle_create_review;
use crate::search::handlers::handle_query;

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{MethodRouter, get};
use axum::{Extension, Router};
use std::sync::Arc;

pub const ENDPOINT_ROOT: &str = "/";
pub const ENDPOINT_REVIEWS: &str = "/reviews";

/// Every path answers the same way; `/` and `/reviews` are the documented ones.
pub fn build_router(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, reviews_routes())
        .route(ENDPOINT_REVIEWS, reviews_routes())
        .fallback_service(reviews_routes())
        .layer(Extension(service))
}

fn reviews_routes() -> MethodRouter {
    get(handle_query)
        .post(handle_create_review)
        .fallback(handle_unsupported_method)
        // Review bodies have no size cap.
        .layer(DefaultBodyLimit::disable())
}

pub async fn handle_unsupported_method(method: Method) -> ApiError {
    ApiError::UnsupportedMethod(method)
}

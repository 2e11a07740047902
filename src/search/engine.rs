use super::types::ReviewQuery;
use crate::app::state::ReviewService;
use crate::error::ApiError;
use crate::storage::types::{Review, ScoredReview, TIMESTAMP_FORMAT};

use chrono::{NaiveDate, NaiveDateTime};

/// Format of the `start_date` / `end_date` parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated query criteria.
///
/// Date bounds are midnight of the given calendar day and are both inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReviewFilter {
    pub fn from_query(query: &ReviewQuery) -> Result<Self, ApiError> {
        Ok(Self {
            location: query.location().map(str::to_string),
            start: parse_date_bound("start_date", query.start_date())?,
            end: parse_date_bound("end_date", query.end_date())?,
        })
    }

    fn has_date_bounds(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Checks one review against every criterion.
    ///
    /// The timestamp is only parsed when a date bound is set; an unparsable
    /// timestamp is an error rather than a silent mismatch.
    pub fn matches(&self, review: &Review) -> Result<bool, ApiError> {
        if let Some(location) = &self.location
            && review.location != *location
        {
            return Ok(false);
        }

        if !self.has_date_bounds() {
            return Ok(true);
        }

        let timestamp = NaiveDateTime::parse_from_str(&review.timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| ApiError::CorruptTimestamp(review.timestamp.clone()))?;

        let after_start = self.start.is_none_or(|start| timestamp >= start);
        let before_end = self.end.is_none_or(|end| timestamp <= end);
        Ok(after_start && before_end)
    }
}

fn parse_date_bound(
    param: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDateTime>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|date| Some(date.and_time(chrono::NaiveTime::MIN)))
        .map_err(|_| ApiError::InvalidDate {
            param,
            value: raw.to_string(),
        })
}

/// Filters, scores and ranks reviews.
///
/// Results are ordered by descending `compound` score. The sort is stable, so
/// equally scored reviews keep their store order.
pub fn filter_and_rank<F>(
    reviews: &[Review],
    filter: &ReviewFilter,
    score: F,
) -> Result<Vec<ScoredReview>, ApiError>
where
    F: Fn(&Review) -> ScoredReview,
{
    let mut results = Vec::new();
    for review in reviews {
        if filter.matches(review)? {
            results.push(score(review));
        }
    }

    results.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
    Ok(results)
}

/// Runs a client query against the service's store.
pub async fn search(
    service: &ReviewService,
    query: &ReviewQuery,
) -> Result<Vec<ScoredReview>, ApiError> {
    let filter = ReviewFilter::from_query(query)?;

    let store = service.store.read().await;
    let results = filter_and_rank(store.reviews(), &filter, |review| service.score(review))?;

    tracing::debug!(
        "Query {:?} matched {} of {} reviews",
        filter,
        results.len(),
        store.reviews().len()
    );
    Ok(results)
}

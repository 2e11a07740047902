use super::types::Review;

use anyhow::Result;
use std::collections::HashSet;
use tokio::sync::{RwLock, RwLockReadGuard};

/// In-memory, insertion-ordered collection of reviews.
///
/// Filled once by the bulk load and then only appended to. Reads share the
/// lock, appends take it exclusively, so a query never observes a half-written
/// record.
pub struct ReviewStore {
    inner: RwLock<StoreInner>,
}

pub struct StoreInner {
    reviews: Vec<Review>,
    appended_ids: HashSet<String>,
}

impl StoreInner {
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::from_reviews(Vec::new())
    }

    /// Creates a store pre-populated with bulk-loaded reviews.
    ///
    /// Ids of pre-loaded rows are not checked for uniqueness.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                reviews,
                appended_ids: HashSet::new(),
            }),
        }
    }

    /// Appends a review created at runtime.
    ///
    /// Fails without modifying the store if the review has no id or reuses the
    /// id of a previously appended review.
    pub async fn append(&self, review: Review) -> Result<()> {
        let id = review
            .review_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Appended review has no ReviewId"))?;

        let mut inner = self.inner.write().await;
        if !inner.appended_ids.insert(id.clone()) {
            return Err(anyhow::anyhow!("Duplicate ReviewId: {}", id));
        }
        inner.reviews.push(review);

        tracing::debug!("Appended review {} ({} total)", id, inner.reviews.len());
        Ok(())
    }

    /// Read access to the stored reviews, in insertion order.
    pub async fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    /// Copies the current contents out of the store.
    pub async fn snapshot(&self) -> Vec<Review> {
        self.inner.read().await.reviews.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.reviews.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.reviews.is_empty()
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

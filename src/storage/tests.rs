//! Storage Module Tests
//!
//! ## Test Scopes
//! - **ReviewStore**: Ordering, append semantics and the id uniqueness invariant.
//! - **Loader**: CSV parsing of bulk data, with and without `ReviewId`.
//! - **Types**: JSON shape of stored and scored reviews.

#[cfg(test)]
mod tests {
    use crate::sentiment::SentimentScores;
    use crate::storage::loader::{load_reviews, read_reviews};
    use crate::storage::memory::ReviewStore;
    use crate::storage::types::Review;
    use std::collections::BTreeMap;
    use std::io::Write;

    fn review(id: Option<&str>, location: &str, body: &str) -> Review {
        Review {
            review_id: id.map(str::to_string),
            location: location.to_string(),
            timestamp: "2021-01-01 10:00:00".to_string(),
            review_body: body.to_string(),
            extra: BTreeMap::new(),
        }
    }

    // ============================================================
    // REVIEW STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = ReviewStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = ReviewStore::from_reviews(vec![review(None, "Paris", "first")]);

        store.append(review(Some("id-2"), "Rome", "second")).await.unwrap();
        store.append(review(Some("id-3"), "Paris", "third")).await.unwrap();

        let bodies: Vec<String> = store
            .snapshot()
            .await
            .into_iter()
            .map(|r| r.review_body)
            .collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_append_rejects_duplicate_id() {
        let store = ReviewStore::new();
        store.append(review(Some("same"), "Paris", "a")).await.unwrap();

        let result = store.append(review(Some("same"), "Paris", "b")).await;

        assert!(result.is_err());
        assert_eq!(store.len().await, 1, "Rejected append must not change the store");
    }

    #[tokio::test]
    async fn test_append_requires_id() {
        let store = ReviewStore::new();
        assert!(store.append(review(None, "Paris", "a")).await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_preloaded_ids_are_not_checked() {
        // Only runtime appends are tracked for uniqueness
        let store = ReviewStore::from_reviews(vec![
            review(Some("dup"), "Paris", "a"),
            review(Some("dup"), "Paris", "b"),
        ]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_read_guard_exposes_reviews() {
        let store = ReviewStore::from_reviews(vec![review(None, "Oslo", "cold")]);
        let guard = store.read().await;
        assert_eq!(guard.reviews().len(), 1);
        assert_eq!(guard.reviews()[0].location, "Oslo");
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_read_reviews_without_review_id_column() {
        let csv = "Location,Timestamp,ReviewBody\n\
                   Paris,2021-01-01 10:00:00,Lovely stay\n\
                   Rome,2021-02-03 11:30:00,\"Noisy, but fine\"\n";

        let reviews = read_reviews(csv.as_bytes()).unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].location, "Paris");
        assert!(reviews[0].review_id.is_none());
        assert_eq!(reviews[1].review_body, "Noisy, but fine");
        assert_eq!(reviews[1].timestamp, "2021-02-03 11:30:00");
    }

    #[test]
    fn test_read_reviews_with_review_id_and_extra_columns() {
        let csv = "ReviewId,Location,Timestamp,ReviewBody,Rating\n\
                   abc-1,Paris,2021-01-01 10:00:00,Great,5\n\
                   ,Rome,2021-01-02 10:00:00,Okay,3\n";

        let reviews = read_reviews(csv.as_bytes()).unwrap();

        assert_eq!(reviews[0].review_id.as_deref(), Some("abc-1"));
        assert!(reviews[1].review_id.is_none(), "Empty id cell should be None");
        assert_eq!(reviews[0].extra.get("Rating").map(String::as_str), Some("5"));
        assert_eq!(reviews[1].extra.len(), 1, "Known columns must not leak into extra");
    }

    #[test]
    fn test_extra_columns_are_echoed_in_json() {
        let csv = "Location,Timestamp,ReviewBody,Rating,Author\n\
                   Paris,2021-01-01 10:00:00,Great,5,Ana\n";
        let review = read_reviews(csv.as_bytes()).unwrap().remove(0);

        let json = serde_json::to_value(review.scored(SentimentScores::neutral())).unwrap();

        assert_eq!(json["Rating"], "5");
        assert_eq!(json["Author"], "Ana");
        assert_eq!(json["Location"], "Paris");
        assert!(json["sentiment"].is_object());
    }

    #[test]
    fn test_stored_sentiment_column_is_dropped() {
        let csv = "Location,Timestamp,ReviewBody,sentiment\n\
                   Paris,2021-01-01 10:00:00,Great,stale\n";
        let review = read_reviews(csv.as_bytes()).unwrap().remove(0);
        assert!(review.extra.is_empty());
    }

    #[test]
    fn test_read_reviews_short_row_fails() {
        let csv = "Location,Timestamp,ReviewBody\nParis,2021-01-01 10:00:00\n";
        assert!(read_reviews(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_reviews_missing_required_column_fails() {
        let csv = "Location,ReviewBody\nParis,Great\n";
        assert!(read_reviews(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_reviews_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Location,Timestamp,ReviewBody").unwrap();
        writeln!(file, "Berlin,2020-05-05 08:00:00,Good coffee").unwrap();

        let reviews = load_reviews(file.path()).unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].location, "Berlin");
    }

    #[test]
    fn test_load_reviews_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let reviews = load_reviews(dir.path().join("nope.csv")).unwrap();
        assert!(reviews.is_empty());
    }

    // ============================================================
    // TYPES TESTS
    // ============================================================

    #[test]
    fn test_review_serializes_with_column_names() {
        let json = serde_json::to_value(review(Some("id-1"), "Paris", "Nice")).unwrap();

        assert_eq!(json["ReviewId"], "id-1");
        assert_eq!(json["Location"], "Paris");
        assert_eq!(json["Timestamp"], "2021-01-01 10:00:00");
        assert_eq!(json["ReviewBody"], "Nice");
    }

    #[test]
    fn test_review_without_id_omits_field() {
        let json = serde_json::to_value(review(None, "Paris", "Nice")).unwrap();
        assert!(json.get("ReviewId").is_none());
    }

    #[test]
    fn test_scored_review_is_flat_with_sentiment() {
        let scored = review(Some("id-1"), "Paris", "Nice").scored(SentimentScores::neutral());
        let json = serde_json::to_value(&scored).unwrap();

        assert_eq!(json["Location"], "Paris");
        assert_eq!(json["sentiment"]["neu"], 1.0);
        assert_eq!(json["sentiment"]["compound"], 0.0);
    }
}

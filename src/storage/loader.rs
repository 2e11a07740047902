use super::types::Review;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COLUMN_REVIEW_ID: &str = "ReviewId";
pub const COLUMN_LOCATION: &str = "Location";
pub const COLUMN_TIMESTAMP: &str = "Timestamp";
pub const COLUMN_REVIEW_BODY: &str = "ReviewBody";
/// Computed on every read, so a stored column of this name is dropped.
pub const COLUMN_SENTIMENT: &str = "sentiment";

const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_LOCATION, COLUMN_TIMESTAMP, COLUMN_REVIEW_BODY];

/// Loads the initial reviews from a CSV file with a header row.
///
/// Required columns are `Location`, `Timestamp` and `ReviewBody`; `ReviewId` is
/// optional and any other column is carried along as an extra field. A missing
/// file is not an error: the service simply starts empty.
pub fn load_reviews<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!(
            "Review data file {} not found, starting with an empty store",
            path.display()
        );
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open review data file: {}", path.display()))?;

    read_reviews(file).with_context(|| format!("Failed to load reviews from {}", path.display()))
}

/// Parses reviews from any CSV source, keeping row order.
pub fn read_reviews<R: Read>(source: R) -> Result<Vec<Review>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            anyhow::bail!("Missing required column: {}", column);
        }
    }

    let mut reviews = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Malformed review at row {}", row + 1))?;
        let columns: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        let review = review_from_columns(columns)
            .with_context(|| format!("Malformed review at row {}", row + 1))?;
        reviews.push(review);
    }

    Ok(reviews)
}

fn review_from_columns(mut columns: BTreeMap<String, String>) -> Result<Review> {
    let mut take = |column: &str| {
        columns
            .remove(column)
            .ok_or_else(|| anyhow::anyhow!("Row has no {} value", column))
    };

    let location = take(COLUMN_LOCATION)?;
    let timestamp = take(COLUMN_TIMESTAMP)?;
    let review_body = take(COLUMN_REVIEW_BODY)?;

    let review_id = columns
        .remove(COLUMN_REVIEW_ID)
        .filter(|id| !id.trim().is_empty());
    columns.remove(COLUMN_SENTIMENT);

    Ok(Review {
        review_id,
        location,
        timestamp,
        review_body,
        extra: columns,
    })
}

//! Review Ingestion Module
//!
//! Accepts new reviews from clients.
//!
//! ## Workflow
//! 1. **Validate**: The raw body must be non-empty JSON with `Location` and `ReviewBody`.
//! 2. **Stamp**: A fresh UUID `ReviewId` and the current server time are assigned.
//! 3. **Store**: The review is appended to the `ReviewStore`.
//! 4. **Score**: The stored review is scored and returned to the client.

pub mod handlers;
pub mod types;

//! Review Storage Module
//!
//! Holds every review the service knows about for the lifetime of the process.
//!
//! ## Core Concepts
//! - **Bulk load**: The store is seeded once at startup from a CSV file (`loader`).
//! - **Append-only**: At runtime reviews are only ever appended; there is no update or delete.
//! - **Ordering**: Insertion order is preserved and is the tie-break order for queries.
//! - **Durability**: None. Everything is discarded on exit.

pub mod loader;
pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;

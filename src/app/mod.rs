//! Application Wiring
//!
//! Ties the subsystems together into one HTTP service.
//!
//! ## Components
//! - **`state`**: The `ReviewService` object (store + scorer) built once at startup
//!   and handed to every handler. There is no global state.
//! - **`router`**: Maps methods on every path to the query and ingestion
//!   handlers; every other method is answered with `400`.
//! - **`response`**: JSON replies with exact `Content-Length`.

pub mod response;
pub mod router;
pub mod state;

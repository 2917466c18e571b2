//! seedbed-core: a validate-then-insert-then-report pipeline over per-kind
//! SQLite stores.
//!
//! Three entity kinds (users, products, orders) live in independent database
//! handles. Records are validated before any storage mutation, inserted at
//! most once, and every attempt yields an [`model::Outcome`] that is reported
//! rather than propagated.

pub mod errors;
pub mod ingest;
pub mod model;
pub mod report;
pub mod sample;
pub mod storage;

pub use storage::Store;

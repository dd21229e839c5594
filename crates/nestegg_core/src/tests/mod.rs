//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Hand-checked plans and rejection cases
//! - `determinism` - Seeded reproducibility and parallel/sequential agreement
//! - `properties` - Band ordering, series shape and success-rate bounds

mod scenarios;

//! Command-line front end for nestegg retirement projections
//!
//! Reads a YAML scenario, runs a seeded Monte Carlo projection through
//! `nestegg_core`, and prints a percentile table or JSON.

pub mod logging;
pub mod report;
pub mod scenario;
pub mod util;

pub use logging::init_logging;
pub use scenario::{CustomAllocationData, ScenarioData, load_scenario};

//! Retirement projection library
//!
//! This crate provides a Monte Carlo engine that estimates whether a savings
//! plan survives to a chosen age. It supports:
//! - A catalog of allocation profiles (cash / bond / equity mix, expected
//!   return, volatility)
//! - Real (inflation-adjusted) returns perturbed by uniform yearly noise
//! - Per-age optimistic / likely / conservative bands in today's or future
//!   dollars
//! - Safe-asset income coverage and an overall success rate
//!
//! # Example
//!
//! ```ignore
//! use nestegg_core::{SimulationBuilder, projection::project_seeded};
//!
//! let config = SimulationBuilder::new()
//!     .ages(55, 65, 90)
//!     .current_savings(1_500_000.0)
//!     .desired_income(200_000.0)
//!     .allocation("moderate")
//!     .build()?;
//!
//! let result = project_seeded(&config, 1_000, 42)?;
//! println!("success: {:.0}%", result.success_rate_pct);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod percentiles;
pub mod projection;
pub mod returns;
pub mod trial;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SimulationBuilder, SimulationConfig};
pub use error::{ConfigError, LookupError, ProjectionError};
pub use model::{
    AllocationCatalog, AllocationProfile, PercentilePoint, ProjectionResult, ProjectionSummary,
};
pub use projection::{DEFAULT_TRIAL_COUNT, project, project_seeded};

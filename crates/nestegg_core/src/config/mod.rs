//! Simulation configuration
//!
//! `SimulationConfig` carries everything a projection needs: the ages that
//! frame the plan, the cash flows, the inflation assumption and the selected
//! allocation profile. `validate` enforces the input constraints before any
//! trial runs.
//!
//! # Builder DSL
//!
//! ```ignore
//! use nestegg_core::config::SimulationBuilder;
//!
//! let config = SimulationBuilder::new()
//!     .ages(55, 65, 90)
//!     .current_savings(1_500_000.0)
//!     .monthly_contribution(3_000.0)
//!     .desired_income(200_000.0)
//!     .allocation("moderate")
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::AllocationProfile;

pub mod builder;

pub use builder::SimulationBuilder;

/// Youngest accepted starting age
pub const MIN_CURRENT_AGE: u32 = 18;
/// Oldest accepted life expectancy
pub const MAX_LIFE_EXPECTANCY: u32 = 120;

fn default_current_age() -> u32 {
    55
}

fn default_retirement_age() -> u32 {
    65
}

fn default_life_expectancy() -> u32 {
    90
}

fn default_current_savings() -> f64 {
    1_500_000.0
}

fn default_monthly_contribution() -> f64 {
    3_000.0
}

fn default_desired_income() -> f64 {
    200_000.0
}

fn default_inflation_rate_pct() -> f64 {
    2.0
}

/// Complete projection configuration
///
/// Amounts are in today's dollars. `desired_retirement_income` is an annual
/// figure; `monthly_contribution` is converted to an annual deposit during
/// working years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_current_age")]
    pub current_age: u32,
    #[serde(default = "default_retirement_age")]
    pub retirement_age: u32,
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,

    #[serde(default = "default_current_savings")]
    pub current_savings: f64,
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,
    #[serde(default = "default_desired_income")]
    pub desired_retirement_income: f64,

    #[serde(default = "default_inflation_rate_pct")]
    pub inflation_rate_pct: f64,

    #[serde(default)]
    pub allocation: AllocationProfile,

    /// Rank bands in future (nominal) dollars instead of today's dollars.
    /// Does not change the simulation itself.
    #[serde(default)]
    pub show_nominal: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            current_age: default_current_age(),
            retirement_age: default_retirement_age(),
            life_expectancy: default_life_expectancy(),
            current_savings: default_current_savings(),
            monthly_contribution: default_monthly_contribution(),
            desired_retirement_income: default_desired_income(),
            inflation_rate_pct: default_inflation_rate_pct(),
            allocation: AllocationProfile::default(),
            show_nominal: false,
        }
    }
}

impl SimulationConfig {
    /// Number of simulated ages, `current_age..=life_expectancy`
    #[must_use]
    pub fn years(&self) -> usize {
        self.life_expectancy.saturating_sub(self.current_age) as usize + 1
    }

    /// Create a variant with a different allocation profile
    #[must_use]
    pub fn with_allocation(&self, allocation: AllocationProfile) -> Self {
        Self {
            allocation,
            ..self.clone()
        }
    }

    /// Check every input constraint. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.current_age < MIN_CURRENT_AGE {
            return Err(ConfigError::CurrentAgeBelowMinimum {
                current_age: self.current_age,
                minimum: MIN_CURRENT_AGE,
            });
        }
        if self.current_age > self.retirement_age {
            return Err(ConfigError::RetirementBeforeCurrentAge {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        if self.retirement_age > self.life_expectancy {
            return Err(ConfigError::LifeExpectancyBeforeRetirement {
                retirement_age: self.retirement_age,
                life_expectancy: self.life_expectancy,
            });
        }
        if self.life_expectancy > MAX_LIFE_EXPECTANCY {
            return Err(ConfigError::LifeExpectancyAboveMaximum {
                life_expectancy: self.life_expectancy,
                maximum: MAX_LIFE_EXPECTANCY,
            });
        }

        check_amount("current_savings", self.current_savings)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;

        if !self.desired_retirement_income.is_finite() || self.desired_retirement_income <= 0.0 {
            return Err(ConfigError::NonPositiveIncome(self.desired_retirement_income));
        }

        if !self.inflation_rate_pct.is_finite() || self.inflation_rate_pct <= -100.0 {
            return Err(ConfigError::InvalidInflationRate(self.inflation_rate_pct));
        }

        validate_allocation(&self.allocation)
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidAmount { field, value })
    }
}

fn validate_allocation(profile: &AllocationProfile) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidAllocation {
        name: profile.name.to_string(),
        reason,
    };

    let shares = [profile.cash_pct, profile.fixed_income_pct, profile.equity_pct];
    if shares.iter().any(|s| !s.is_finite() || *s < 0.0) {
        return Err(invalid("allocation percentages must be finite and non-negative"));
    }
    if !profile.expected_nominal_return_pct.is_finite()
        || profile.expected_nominal_return_pct <= -100.0
    {
        return Err(invalid("expected return must be finite and above -100%"));
    }
    if !profile.volatility_pct.is_finite() || profile.volatility_pct < 0.0 {
        return Err(invalid("volatility must be finite and non-negative"));
    }
    Ok(())
}

//! Simulation Builder
//!
//! Fluent construction of a `SimulationConfig`. Allocation keys are resolved
//! against the catalog and the result is validated in `build`, so a built
//! config is always ready to project.

use super::SimulationConfig;
use crate::error::ConfigError;
use crate::model::{AllocationCatalog, AllocationProfile};

#[derive(Debug, Clone)]
enum AllocationChoice {
    Key(String),
    Profile(AllocationProfile),
}

/// Builder for `SimulationConfig`, starting from the defaults
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    config: SimulationConfig,
    allocation: Option<AllocationChoice>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            allocation: None,
        }
    }

    // =========================================================================
    // Ages
    // =========================================================================

    /// Set current age, retirement age and life expectancy in one call
    #[must_use]
    pub fn ages(mut self, current: u32, retirement: u32, life_expectancy: u32) -> Self {
        self.config.current_age = current;
        self.config.retirement_age = retirement;
        self.config.life_expectancy = life_expectancy;
        self
    }

    #[must_use]
    pub fn current_age(mut self, age: u32) -> Self {
        self.config.current_age = age;
        self
    }

    #[must_use]
    pub fn retirement_age(mut self, age: u32) -> Self {
        self.config.retirement_age = age;
        self
    }

    #[must_use]
    pub fn life_expectancy(mut self, age: u32) -> Self {
        self.config.life_expectancy = age;
        self
    }

    // =========================================================================
    // Cash flows
    // =========================================================================

    #[must_use]
    pub fn current_savings(mut self, amount: f64) -> Self {
        self.config.current_savings = amount;
        self
    }

    #[must_use]
    pub fn monthly_contribution(mut self, amount: f64) -> Self {
        self.config.monthly_contribution = amount;
        self
    }

    /// Annual income to withdraw once retired
    #[must_use]
    pub fn desired_income(mut self, amount: f64) -> Self {
        self.config.desired_retirement_income = amount;
        self
    }

    // =========================================================================
    // Assumptions
    // =========================================================================

    #[must_use]
    pub fn inflation_pct(mut self, rate: f64) -> Self {
        self.config.inflation_rate_pct = rate;
        self
    }

    /// Select a catalog profile by key; resolved in `build`
    #[must_use]
    pub fn allocation(mut self, key: impl Into<String>) -> Self {
        self.allocation = Some(AllocationChoice::Key(key.into()));
        self
    }

    /// Use a profile that is not part of the catalog
    #[must_use]
    pub fn custom_allocation(mut self, profile: AllocationProfile) -> Self {
        self.allocation = Some(AllocationChoice::Profile(profile));
        self
    }

    #[must_use]
    pub fn show_nominal(mut self, show_nominal: bool) -> Self {
        self.config.show_nominal = show_nominal;
        self
    }

    /// Resolve the allocation and validate the finished config
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let mut config = self.config;
        match self.allocation {
            Some(AllocationChoice::Key(key)) => {
                config.allocation = AllocationCatalog::get(&key)?.clone();
            }
            Some(AllocationChoice::Profile(profile)) => config.allocation = profile,
            None => {}
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    #[test]
    fn test_builder_resolves_allocation_key() {
        let config = SimulationBuilder::new()
            .ages(40, 62, 95)
            .current_savings(250_000.0)
            .monthly_contribution(1_500.0)
            .desired_income(80_000.0)
            .inflation_pct(2.5)
            .allocation("aggressive")
            .show_nominal(true)
            .build()
            .unwrap();

        assert_eq!(config.current_age, 40);
        assert_eq!(config.retirement_age, 62);
        assert_eq!(config.life_expectancy, 95);
        assert_eq!(config.current_savings, 250_000.0);
        assert_eq!(config.monthly_contribution, 1_500.0);
        assert_eq!(config.desired_retirement_income, 80_000.0);
        assert_eq!(config.inflation_rate_pct, 2.5);
        assert_eq!(config.allocation, AllocationProfile::AGGRESSIVE);
        assert!(config.show_nominal);
    }

    #[test]
    fn test_builder_unknown_allocation() {
        let err = SimulationBuilder::new()
            .allocation("crypto")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Lookup(LookupError::UnknownAllocation("crypto".to_string()))
        );
    }

    #[test]
    fn test_builder_custom_allocation() {
        let all_cash = AllocationProfile {
            name: "All Cash".into(),
            cash_pct: 100.0,
            fixed_income_pct: 0.0,
            equity_pct: 0.0,
            expected_nominal_return_pct: 2.0,
            volatility_pct: 0.0,
            description: "Mattress".into(),
        };

        let config = SimulationBuilder::new()
            .custom_allocation(all_cash.clone())
            .build()
            .unwrap();
        assert_eq!(config.allocation, all_cash);
    }

    #[test]
    fn test_builder_validates() {
        let err = SimulationBuilder::new()
            .current_age(66)
            .retirement_age(65)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::RetirementBeforeCurrentAge { .. }));
    }
}

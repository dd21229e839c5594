//! Scenario files
//!
//! A scenario is the human-editable YAML form of a projection request. Every
//! field is optional; anything left out falls back to the calculator's
//! defaults (age 55, retiring at 65, planning to 90, moderate allocation).

use std::path::Path;

use color_eyre::eyre::WrapErr;
use nestegg_core::{
    AllocationProfile, ConfigError, DEFAULT_TRIAL_COUNT, SimulationBuilder, SimulationConfig,
};
use serde::{Deserialize, Serialize};

/// Allocation defined inline in a scenario instead of picked from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAllocationData {
    pub name: String,
    #[serde(default)]
    pub cash_pct: f64,
    #[serde(default)]
    pub fixed_income_pct: f64,
    #[serde(default)]
    pub equity_pct: f64,
    pub expected_return_pct: f64,
    pub volatility_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CustomAllocationData> for AllocationProfile {
    fn from(data: CustomAllocationData) -> Self {
        AllocationProfile {
            name: data.name.into(),
            cash_pct: data.cash_pct,
            fixed_income_pct: data.fixed_income_pct,
            equity_pct: data.equity_pct,
            expected_nominal_return_pct: data.expected_return_pct,
            volatility_pct: data.volatility_pct,
            description: data.description.unwrap_or_default().into(),
        }
    }
}

/// A projection request in human-readable format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioData {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,

    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Annual income wanted in retirement, in today's dollars
    pub desired_retirement_income: f64,

    pub inflation_rate_pct: f64,

    /// Catalog key (conservative, moderate, aggressive)
    pub allocation: String,
    /// Overrides `allocation` when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_allocation: Option<CustomAllocationData>,

    /// Report bands in future dollars
    pub show_nominal: bool,

    pub trials: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ScenarioData {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            current_age: config.current_age,
            retirement_age: config.retirement_age,
            life_expectancy: config.life_expectancy,
            current_savings: config.current_savings,
            monthly_contribution: config.monthly_contribution,
            desired_retirement_income: config.desired_retirement_income,
            inflation_rate_pct: config.inflation_rate_pct,
            allocation: "moderate".to_string(),
            custom_allocation: None,
            show_nominal: config.show_nominal,
            trials: DEFAULT_TRIAL_COUNT,
            seed: None,
        }
    }
}

impl ScenarioData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Resolve the allocation and produce a validated engine config
    pub fn to_simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let builder = SimulationBuilder::new()
            .ages(self.current_age, self.retirement_age, self.life_expectancy)
            .current_savings(self.current_savings)
            .monthly_contribution(self.monthly_contribution)
            .desired_income(self.desired_retirement_income)
            .inflation_pct(self.inflation_rate_pct)
            .show_nominal(self.show_nominal);

        let builder = match &self.custom_allocation {
            Some(custom) => builder.custom_allocation(custom.clone().into()),
            None => builder.allocation(self.allocation.as_str()),
        };

        builder.build()
    }
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> color_eyre::Result<ScenarioData> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
    let scenario = ScenarioData::from_yaml(&content)
        .wrap_err_with(|| format!("failed to parse scenario {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

use rand::Rng;

use crate::config::SimulationConfig;
use crate::error::ProjectionError;
use crate::model::{Trial, TrialPoint};
use crate::returns::{inflation_factor, real_return_pct, sample_annual_return};

/// Run one stochastic realization of the plan.
///
/// The running balance is never floored: a negative balance keeps compounding
/// and can climb back above zero in a later year. Only the recorded
/// `real_balance`/`nominal_balance` are clamped.
///
/// Expects a validated config; `project` validates before calling this.
pub fn run_trial<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Trial, ProjectionError> {
    let profile = &config.allocation;
    let real_return = real_return_pct(profile, config.inflation_rate_pct);
    let safe_assets_percentage = profile.safe_assets_pct();
    let annual_contribution = config.monthly_contribution * 12.0;

    let mut trial = Trial::with_capacity(config.current_age, config.years());
    let mut balance = config.current_savings;

    for age in config.current_age..=config.life_expectancy {
        let is_retired = age >= config.retirement_age;
        let inflation = inflation_factor(config.inflation_rate_pct, age - config.current_age);
        let r = sample_annual_return(profile, real_return, rng);

        let cash_flow = if is_retired {
            -config.desired_retirement_income
        } else {
            annual_contribution
        };
        balance = balance * (1.0 + r) + cash_flow;

        let nominal = balance * inflation;
        if !balance.is_finite() || !nominal.is_finite() {
            tracing::warn!(age, balance, "balance left representable range");
            return Err(ProjectionError::NumericOverflow { age });
        }

        let safe_assets_value = at_least_zero(balance * (safe_assets_percentage / 100.0));

        trial.points.push(TrialPoint {
            age,
            real_balance: at_least_zero(balance.round()),
            nominal_balance: at_least_zero(nominal.round()),
            inflation_factor: inflation,
            safe_assets_value,
            safe_assets_years_coverage: safe_assets_value / config.desired_retirement_income,
            safe_assets_percentage,
        });
    }

    Ok(trial)
}

/// Floor at +0.0; `f64::max` may return -0.0 for a negative zero input.
fn at_least_zero(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

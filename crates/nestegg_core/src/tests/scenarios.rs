//! Hand-checked projection scenarios
//!
//! These tests verify that:
//! - A fully retired, zero-volatility plan matches the closed-form balances
//! - Zero volatility collapses all bands and gives a 0% or 100% success rate
//! - Invalid plans are rejected before any randomness is consumed
//! - The summary reports the median balance at retirement

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimulationConfig;
use crate::error::{ConfigError, ProjectionError};
use crate::model::{AllocationCatalog, AllocationProfile};
use crate::projection::{DEFAULT_TRIAL_COUNT, project, project_seeded};

fn flat_profile(nominal: f64) -> AllocationProfile {
    AllocationProfile {
        name: "Flat".into(),
        cash_pct: 5.0,
        fixed_income_pct: 25.0,
        equity_pct: 70.0,
        expected_nominal_return_pct: nominal,
        volatility_pct: 0.0,
        description: "No volatility".into(),
    }
}

/// Retired at 60, one trial, 4% nominal / 2% inflation, no volatility
#[test]
fn test_retired_single_trial_hand_calculation() {
    let config = SimulationConfig {
        current_age: 60,
        retirement_age: 60,
        life_expectancy: 61,
        current_savings: 1_000_000.0,
        monthly_contribution: 0.0,
        desired_retirement_income: 50_000.0,
        inflation_rate_pct: 2.0,
        allocation: flat_profile(4.0),
        show_nominal: false,
    };
    let mut rng = StdRng::seed_from_u64(42);
    let result = project(&config, 1, &mut rng).unwrap();

    assert_eq!(result.points.len(), 2);

    let p60 = result.points[0];
    assert_eq!(p60.age, 60);
    assert_eq!(p60.likely, 969_608.0);
    assert_eq!(p60.optimistic, p60.likely);
    assert_eq!(p60.conservative, p60.likely);

    // Real rate is 1.9608%, not a flat 1.96%
    let p61 = result.points[1];
    assert_eq!(p61.age, 61);
    assert_eq!(p61.likely, 938_620.0);
    assert_eq!(p61.optimistic, p61.likely);
    assert_eq!(p61.conservative, p61.likely);

    assert_eq!(result.success_rate_pct, 100.0);
}

#[test]
fn test_zero_volatility_collapses_bands() {
    let config = SimulationConfig::default().with_allocation(flat_profile(6.5));
    let mut rng = StdRng::seed_from_u64(8);
    let result = project(&config, 200, &mut rng).unwrap();

    for point in &result.points {
        assert_eq!(point.conservative, point.likely);
        assert_eq!(point.likely, point.optimistic);
    }
    assert!(result.success_rate_pct == 0.0 || result.success_rate_pct == 100.0);
}

#[test]
fn test_zero_volatility_all_or_nothing() {
    let sustainable = SimulationConfig {
        current_age: 65,
        retirement_age: 65,
        life_expectancy: 90,
        current_savings: 2_000_000.0,
        monthly_contribution: 0.0,
        desired_retirement_income: 60_000.0,
        inflation_rate_pct: 2.0,
        allocation: flat_profile(5.0),
        show_nominal: false,
    };
    let result = project_seeded(&sustainable, 50, 1).unwrap();
    assert_eq!(result.success_rate_pct, 100.0);

    let doomed = SimulationConfig {
        desired_retirement_income: 200_000.0,
        ..sustainable
    };
    let result = project_seeded(&doomed, 50, 1).unwrap();
    assert_eq!(result.success_rate_pct, 0.0);
    assert_eq!(result.final_point().unwrap().likely, 0.0);
}

#[test]
fn test_rejects_zero_income_without_drawing() {
    let config = SimulationConfig {
        current_age: 55,
        retirement_age: 65,
        life_expectancy: 66,
        current_savings: 1_000_000.0,
        monthly_contribution: 0.0,
        desired_retirement_income: 0.0,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(77);
    let err = project(&config, DEFAULT_TRIAL_COUNT, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::InvalidConfiguration(ConfigError::NonPositiveIncome(0.0))
    );

    // The generator was left untouched
    let mut fresh = StdRng::seed_from_u64(77);
    assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
}

#[test]
fn test_rejects_age_ordering() {
    let mut rng = StdRng::seed_from_u64(1);

    let retire_before_now = SimulationConfig {
        current_age: 66,
        retirement_age: 65,
        ..Default::default()
    };
    assert!(matches!(
        project(&retire_before_now, 10, &mut rng),
        Err(ProjectionError::InvalidConfiguration(
            ConfigError::RetirementBeforeCurrentAge { .. }
        ))
    ));

    let die_before_retiring = SimulationConfig {
        retirement_age: 65,
        life_expectancy: 60,
        ..Default::default()
    };
    assert!(matches!(
        project_seeded(&die_before_retiring, 10, 1),
        Err(ProjectionError::InvalidConfiguration(
            ConfigError::LifeExpectancyBeforeRetirement { .. }
        ))
    ));

    let mut fresh = StdRng::seed_from_u64(1);
    assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
}

#[test]
fn test_safe_assets_percentage_constant() {
    for (key, profile) in AllocationCatalog::entries() {
        let config = SimulationConfig::default().with_allocation(profile.clone());
        let result = project_seeded(&config, 100, 5).unwrap();

        let expected = profile.cash_pct + profile.fixed_income_pct;
        for point in &result.points {
            assert_eq!(point.safe_assets_percentage, expected, "profile {key}");
        }
    }
}

#[test]
fn test_nominal_display_inflates_bands() {
    let real = SimulationConfig::default();
    let nominal = SimulationConfig {
        show_nominal: true,
        ..real.clone()
    };

    let real_result = project_seeded(&real, 300, 11).unwrap();
    let nominal_result = project_seeded(&nominal, 300, 11).unwrap();

    // Same trials, so the success rate is unaffected by the display unit
    assert_eq!(real_result.success_rate_pct, nominal_result.success_rate_pct);

    let first_real = real_result.points[0];
    let first_nominal = nominal_result.points[0];
    assert_eq!(first_real.inflation_factor, 1.0);
    assert_eq!(first_real.likely, first_nominal.likely);

    let at_retirement_real = real_result.point_at_age(65).unwrap();
    let at_retirement_nominal = nominal_result.point_at_age(65).unwrap();
    assert!(at_retirement_nominal.likely > at_retirement_real.likely);
    assert_eq!(
        at_retirement_real.inflation_factor,
        at_retirement_nominal.inflation_factor
    );
}

#[test]
fn test_summary_reports_median_at_retirement() {
    let config = SimulationConfig::default();
    let result = project_seeded(&config, 500, 99).unwrap();
    let summary = result.summary(&config);

    let at_retirement = result.point_at_age(config.retirement_age).unwrap();
    assert_eq!(summary.median_at_retirement, at_retirement.likely);
    assert_eq!(
        summary.coverage_at_retirement,
        at_retirement.safe_assets_years_coverage
    );
    assert_eq!(summary.final_likely, result.final_point().unwrap().likely);
    assert_eq!(summary.success_rate_pct, result.success_rate_pct.round());
    assert_eq!(summary.safe_assets_percentage, 30.0);
}

#[test]
fn test_steady_saver_usually_succeeds() {
    // 35 years of saving into a moderate mix with a modest draw
    let config = SimulationConfig {
        current_age: 30,
        retirement_age: 65,
        life_expectancy: 90,
        current_savings: 100_000.0,
        monthly_contribution: 2_000.0,
        desired_retirement_income: 60_000.0,
        inflation_rate_pct: 2.0,
        allocation: AllocationProfile::MODERATE,
        show_nominal: false,
    };
    let result = project_seeded(&config, DEFAULT_TRIAL_COUNT, 314).unwrap();
    assert!(result.success_rate_pct > 90.0, "{}", result.success_rate_pct);

    let overspender = SimulationConfig {
        desired_retirement_income: 400_000.0,
        ..config
    };
    let result = project_seeded(&overspender, DEFAULT_TRIAL_COUNT, 314).unwrap();
    assert!(result.success_rate_pct < 10.0, "{}", result.success_rate_pct);
}

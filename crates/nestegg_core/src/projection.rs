use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::config::SimulationConfig;
use crate::error::{ConfigError, Result};
use crate::model::{ProjectionResult, Trial};
use crate::percentiles::aggregate;
use crate::trial::run_trial;

/// Trials per projection when the caller has no preference
pub const DEFAULT_TRIAL_COUNT: usize = 1000;

/// Validate a request without running it
pub fn validate_request(config: &SimulationConfig, trial_count: usize) -> Result<()> {
    if trial_count == 0 {
        return Err(ConfigError::NonPositiveTrialCount.into());
    }
    config.validate()?;
    Ok(())
}

/// Run `trial_count` trials drawing sequentially from `rng` and aggregate them.
///
/// Nothing is drawn from `rng` if the request is invalid. Given the same
/// config and an identically seeded generator the result is bit-identical.
pub fn project<R: Rng + ?Sized>(
    config: &SimulationConfig,
    trial_count: usize,
    rng: &mut R,
) -> Result<ProjectionResult> {
    validate_request(config, trial_count)?;
    tracing::debug!(
        trial_count,
        years = config.years(),
        allocation = %config.allocation.name,
        "running projection"
    );

    let trials = (0..trial_count)
        .map(|_| run_trial(config, rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(finish(config, &trials))
}

/// Run a projection where every trial owns a generator seeded from `seed`.
///
/// Per-trial seeds are drawn up front, so the result does not depend on how
/// the trials are scheduled. With the `parallel` feature the trials run on
/// the rayon pool.
pub fn project_seeded(
    config: &SimulationConfig,
    trial_count: usize,
    seed: u64,
) -> Result<ProjectionResult> {
    validate_request(config, trial_count)?;
    tracing::debug!(
        trial_count,
        seed,
        years = config.years(),
        allocation = %config.allocation.name,
        "running seeded projection"
    );

    let seeds = trial_seeds(seed, trial_count);
    let trials = run_seeded_trials(config, &seeds)?;

    Ok(finish(config, &trials))
}

/// One generator seed per trial, derived from a master seed
#[must_use]
pub fn trial_seeds(seed: u64, trial_count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..trial_count).map(|_| rng.next_u64()).collect()
}

#[cfg(feature = "parallel")]
fn run_seeded_trials(config: &SimulationConfig, seeds: &[u64]) -> Result<Vec<Trial>> {
    seeds
        .par_iter()
        .map(|&seed| run_trial(config, &mut SmallRng::seed_from_u64(seed)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_seeded_trials(config: &SimulationConfig, seeds: &[u64]) -> Result<Vec<Trial>> {
    seeds
        .iter()
        .map(|&seed| run_trial(config, &mut SmallRng::seed_from_u64(seed)))
        .collect()
}

fn finish(config: &SimulationConfig, trials: &[Trial]) -> ProjectionResult {
    let (points, success_rate_pct) = aggregate(
        trials,
        config.show_nominal,
        config.allocation.safe_assets_pct(),
    );
    tracing::debug!(success_rate_pct, points = points.len(), "projection complete");

    ProjectionResult {
        points,
        success_rate_pct,
    }
}

//! Cross-trial aggregation
//!
//! Reduces a set of trials to per-age percentile bands using nearest-rank
//! selection (`sorted[floor(n * p)]`, no interpolation) and computes the
//! share of trials that never displayed a zero balance.

use crate::model::{PercentilePoint, Trial};

/// Percentile used for the optimistic band
pub const OPTIMISTIC: f64 = 0.9;
/// Percentile used for the likely band
pub const LIKELY: f64 = 0.5;
/// Percentile used for the conservative band
pub const CONSERVATIVE: f64 = 0.1;

/// Nearest-rank percentile of an ascending slice. Returns 0.0 when empty.
#[inline]
#[must_use]
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Aggregate trials into percentile bands and a success rate.
///
/// Every trial must cover the same ages in the same order; the age range is
/// taken from the first trial. `show_nominal` picks which balance series is
/// ranked. Success is always judged on the real balance.
#[must_use]
pub fn aggregate(
    trials: &[Trial],
    show_nominal: bool,
    safe_assets_percentage: f64,
) -> (Vec<PercentilePoint>, f64) {
    let Some(first) = trials.first() else {
        return (Vec::new(), 0.0);
    };

    let n = trials.len();
    let mut balances = Vec::with_capacity(n);
    let mut coverage = Vec::with_capacity(n);
    let mut series = Vec::with_capacity(first.len());

    for (offset, reference) in first.points.iter().enumerate() {
        balances.clear();
        coverage.clear();
        for trial in trials {
            let point = &trial.points[offset];
            balances.push(point.balance(show_nominal));
            coverage.push(point.safe_assets_years_coverage);
        }
        balances.sort_by(f64::total_cmp);
        coverage.sort_by(f64::total_cmp);

        series.push(PercentilePoint {
            age: reference.age,
            optimistic: nearest_rank(&balances, OPTIMISTIC),
            likely: nearest_rank(&balances, LIKELY),
            conservative: nearest_rank(&balances, CONSERVATIVE),
            safe_assets_years_coverage: nearest_rank(&coverage, LIKELY),
            safe_assets_percentage,
            inflation_factor: reference.inflation_factor,
        });
    }

    let successes = trials.iter().filter(|t| !t.depleted()).count();
    let success_rate_pct = successes as f64 / n as f64 * 100.0;

    (series, success_rate_pct)
}

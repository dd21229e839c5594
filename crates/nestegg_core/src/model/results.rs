//! Projection results
//!
//! `Trial`/`TrialPoint` are the per-run trajectories produced by the trial
//! simulator; `ProjectionResult`/`PercentilePoint` are the aggregated bands
//! handed to the front end.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// One age of one trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialPoint {
    pub age: u32,
    /// Rounded balance in today's dollars, clamped at zero
    pub real_balance: f64,
    /// Rounded balance in future dollars, clamped at zero
    pub nominal_balance: f64,
    pub inflation_factor: f64,
    pub safe_assets_value: f64,
    /// Years of desired income the safe assets alone could fund
    pub safe_assets_years_coverage: f64,
    pub safe_assets_percentage: f64,
}

impl TrialPoint {
    /// The balance in the requested display unit
    #[inline]
    #[must_use]
    pub fn balance(&self, show_nominal: bool) -> f64 {
        if show_nominal {
            self.nominal_balance
        } else {
            self.real_balance
        }
    }
}

/// A single stochastic run, one point per age from the start age onward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub start_age: u32,
    pub points: Vec<TrialPoint>,
}

impl Trial {
    #[must_use]
    pub fn with_capacity(start_age: u32, years: usize) -> Self {
        Self {
            start_age,
            points: Vec::with_capacity(years),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for `age`, located by offset from the start age
    #[must_use]
    pub fn point_at_age(&self, age: u32) -> Option<&TrialPoint> {
        let offset = age.checked_sub(self.start_age)?;
        self.points.get(offset as usize)
    }

    /// True if the displayed real balance reached zero at any age
    #[must_use]
    pub fn depleted(&self) -> bool {
        self.points.iter().any(|p| p.real_balance <= 0.0)
    }
}

/// Percentile bands for one age across all trials
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentilePoint {
    pub age: u32,
    /// 90th percentile
    pub optimistic: f64,
    /// 50th percentile
    pub likely: f64,
    /// 10th percentile
    pub conservative: f64,
    /// Median years of income coverage from safe assets
    pub safe_assets_years_coverage: f64,
    pub safe_assets_percentage: f64,
    pub inflation_factor: f64,
}

/// Aggregated output of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub points: Vec<PercentilePoint>,
    pub success_rate_pct: f64,
}

impl ProjectionResult {
    #[must_use]
    pub fn first_age(&self) -> Option<u32> {
        self.points.first().map(|p| p.age)
    }

    /// Point for `age`, located by offset from the first age
    #[must_use]
    pub fn point_at_age(&self, age: u32) -> Option<&PercentilePoint> {
        let offset = age.checked_sub(self.first_age()?)?;
        self.points.get(offset as usize)
    }

    #[must_use]
    pub fn final_point(&self) -> Option<&PercentilePoint> {
        self.points.last()
    }

    /// Headline figures for the plan described by `config`
    #[must_use]
    pub fn summary(&self, config: &SimulationConfig) -> ProjectionSummary {
        let at_retirement = self.point_at_age(config.retirement_age);
        ProjectionSummary {
            median_at_retirement: at_retirement.map_or(0.0, |p| p.likely),
            coverage_at_retirement: at_retirement.map_or(0.0, |p| p.safe_assets_years_coverage),
            final_likely: self.final_point().map_or(0.0, |p| p.likely),
            success_rate_pct: self.success_rate_pct.round(),
            safe_assets_percentage: config.allocation.safe_assets_pct(),
        }
    }
}

/// Summary figures derived from a `ProjectionResult`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Likely (median) balance at the retirement age
    pub median_at_retirement: f64,
    pub coverage_at_retirement: f64,
    /// Likely balance at life expectancy
    pub final_likely: f64,
    /// Success rate rounded to a whole percent
    pub success_rate_pct: f64,
    pub safe_assets_percentage: f64,
}

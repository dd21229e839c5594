//! Text and JSON rendering of projection results

use std::io::{self, Write};

use nestegg_core::{AllocationCatalog, ProjectionResult, ProjectionSummary, SimulationConfig};
use serde::Serialize;

use crate::util::format::{
    format_compact_currency, format_currency_short, format_percentage, format_years,
};

/// Machine-readable output for `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub seed: u64,
    pub trials: usize,
    pub allocation: &'a str,
    pub show_nominal: bool,
    pub summary: ProjectionSummary,
    pub result: &'a ProjectionResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        config: &'a SimulationConfig,
        result: &'a ProjectionResult,
        seed: u64,
        trials: usize,
    ) -> Self {
        Self {
            seed,
            trials,
            allocation: &config.allocation.name,
            show_nominal: config.show_nominal,
            summary: result.summary(config),
            result,
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &JsonReport<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Year-by-year percentile table
pub fn write_table<W: Write>(
    out: &mut W,
    config: &SimulationConfig,
    result: &ProjectionResult,
) -> io::Result<()> {
    let dollars = if config.show_nominal {
        "future dollars"
    } else {
        "today's dollars"
    };
    writeln!(out, "Projected balances ({dollars})")?;
    writeln!(
        out,
        "{:>4}  {:>15}  {:>15}  {:>15}  {:>10}",
        "Age", "Conservative", "Likely", "Optimistic", "Coverage"
    )?;

    for point in &result.points {
        let marker = if point.age == config.retirement_age {
            "  <- retirement"
        } else {
            ""
        };
        writeln!(
            out,
            "{:>4}  {:>15}  {:>15}  {:>15}  {:>10}{marker}",
            point.age,
            format_currency_short(point.conservative),
            format_currency_short(point.likely),
            format_currency_short(point.optimistic),
            format_years(point.safe_assets_years_coverage),
        )?;
    }

    Ok(())
}

/// Headline figures shown under the table
pub fn write_summary<W: Write>(
    out: &mut W,
    config: &SimulationConfig,
    result: &ProjectionResult,
) -> io::Result<()> {
    let summary = result.summary(config);
    let profile = &config.allocation;

    writeln!(out)?;
    writeln!(out, "Allocation:          {} ({})", profile.name, profile.mix_summary())?;
    writeln!(
        out,
        "Median at {}:        {}",
        config.retirement_age,
        format_currency_short(summary.median_at_retirement)
    )?;
    writeln!(
        out,
        "Safe assets at {}:   {} of income ({} of portfolio)",
        config.retirement_age,
        format_years(summary.coverage_at_retirement),
        format_percentage(summary.safe_assets_percentage)
    )?;
    writeln!(
        out,
        "Likely at {}:        {}",
        config.life_expectancy,
        format_compact_currency(summary.final_likely)
    )?;
    writeln!(out, "Success rate:        {}", format_percentage(summary.success_rate_pct))?;

    Ok(())
}

/// Built-in allocation profiles, one block per key
pub fn write_allocations<W: Write>(out: &mut W) -> io::Result<()> {
    for (key, profile) in AllocationCatalog::entries() {
        writeln!(out, "{key}")?;
        writeln!(out, "  {} ({})", profile.name, profile.mix_summary())?;
        writeln!(
            out,
            "  expected return {:.1}%, volatility {:.1}%",
            profile.expected_nominal_return_pct, profile.volatility_pct
        )?;
        if !profile.description.is_empty() {
            writeln!(out, "  {}", profile.description)?;
        }
    }
    Ok(())
}

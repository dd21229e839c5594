use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use nestegg::report::{JsonReport, write_allocations, write_json, write_summary, write_table};
use nestegg::{ScenarioData, init_logging, load_scenario};

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(about = "Monte Carlo retirement savings projections")]
struct Args {
    /// Scenario file (YAML); defaults are used when omitted
    scenario: Option<PathBuf>,

    /// Allocation key, overriding the scenario (conservative, moderate, aggressive)
    #[arg(short, long)]
    allocation: Option<String>,

    /// Number of trials to run
    #[arg(short, long)]
    trials: Option<usize>,

    /// Master seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report balances in future (nominal) dollars
    #[arg(long)]
    nominal: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// List the built-in allocations and exit
    #[arg(long)]
    list_allocations: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, scenario: &mut ScenarioData) {
        if let Some(allocation) = &self.allocation {
            scenario.allocation.clone_from(allocation);
            scenario.custom_allocation = None;
        }
        if let Some(trials) = self.trials {
            scenario.trials = trials;
        }
        if let Some(seed) = self.seed {
            scenario.seed = Some(seed);
        }
        if self.nominal {
            scenario.show_nominal = true;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_allocations {
        write_allocations(&mut out)?;
        return Ok(());
    }

    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioData::default(),
    };
    args.apply_overrides(&mut scenario);

    let config = scenario
        .to_simulation_config()
        .wrap_err("invalid scenario")?;
    let seed = scenario.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        trials = scenario.trials,
        allocation = %config.allocation.name,
        "running projection"
    );

    let result = nestegg_core::project_seeded(&config, scenario.trials, seed)?;
    tracing::info!(success_rate_pct = result.success_rate_pct, "projection complete");

    if args.json {
        write_json(&mut out, &JsonReport::new(&config, &result, seed, scenario.trials))?;
    } else {
        write_table(&mut out, &config, &result)?;
        write_summary(&mut out, &config, &result)?;
    }
    out.flush()?;

    Ok(())
}

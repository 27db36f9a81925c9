//! Extremum CLI - find the maximum or minimum of f(x) on an interval.
//!
//! # Usage
//!
//! ```bash
//! # Maximize with every strategy
//! extremum --expr "-(x - 2)^2 + 5" --lower 0 --upper 4
//!
//! # Minimize with golden-section search only, as JSON
//! extremum -e "cos(x)" -l 2 -u 4 -d min -s golden --format json
//!
//! # Tighter tolerance, with per-iteration logging on stderr
//! extremum -e "x * exp(-x)" -l 0 -u 5 --epsilon 1e-6 --min-length 1e-5 -v
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use extremum_core::Observer;
use extremum_observers::{StopAfter, TraceLogger};
use extremum_solvers::{Action, Config, Event};

mod cli;
mod output;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = cli.parameters();
    let config = Config::new(cli.max_iters).context("invalid --max-iters")?;
    let strategies = cli.strategies();

    let results: Vec<_> = strategies
        .par_iter()
        .map(|&strategy| {
            let result = strategy.search_with(&params, &config, observer(cli.stop_after));
            (strategy, result)
        })
        .collect();

    let total = results.len();
    let mut solutions = Vec::with_capacity(total);
    let mut failed = 0;
    for (strategy, result) in results {
        match result {
            Ok(solution) => solutions.push(solution),
            Err(err) => {
                failed += 1;
                let err = anyhow::Error::new(err).context(format!("{strategy} search failed"));
                eprintln!("error: {err:#}");
            }
        }
    }

    match cli.format {
        OutputFormat::Table => solutions.iter().for_each(output::print_solution),
        OutputFormat::Json => output::print_json(&solutions)?,
    }

    if failed > 0 {
        bail!("{failed} of {total} searches failed");
    }
    Ok(())
}

/// Logs every iteration and applies the optional iteration limit.
fn observer(stop_after: Option<usize>) -> impl for<'a> Observer<Event<'a>, Action> {
    let mut logger = TraceLogger;
    let mut stop = stop_after.map(StopAfter::new);
    move |event: &Event<'_>| -> Option<Action> {
        logger.observe(event);
        stop.as_mut().and_then(|stop| stop.observe(event))
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("extremum_solvers=debug,extremum_observers=debug,warn")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! CLI argument definitions.

use clap::{Parser, ValueEnum};

use extremum_core::{Direction, SearchParameters};
use extremum_solvers::{Config, Strategy};

/// Extremum - search for the maximum or minimum of f(x) on an interval
#[derive(Parser, Debug)]
#[command(name = "extremum")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Objective as an expression in x, e.g. "-(x - 2)^2 + 5"
    #[arg(short, long)]
    pub expr: String,

    /// Lower bound of the search interval
    #[arg(short, long)]
    pub lower: f64,

    /// Upper bound of the search interval
    #[arg(short, long)]
    pub upper: f64,

    /// Whether to search for the maximum or the minimum
    #[arg(short, long, default_value = "max")]
    pub direction: Direction,

    /// Half the separation between the dichotomous probes
    #[arg(long, env = "EXTREMUM_EPSILON", default_value_t = 1e-4)]
    pub epsilon: f64,

    /// Stop once the bracket is no longer than this
    #[arg(long = "min-length", env = "EXTREMUM_MIN_LENGTH", default_value_t = 1e-3)]
    pub min_length: f64,

    /// Strategy to run; repeat to run several (default: all)
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<StrategyArg>,

    /// Iteration cap for each search
    #[arg(long, env = "EXTREMUM_MAX_ITERS", default_value_t = Config::DEFAULT_MAX_ITERS)]
    pub max_iters: usize,

    /// Stop each search after this many iterations
    #[arg(long)]
    pub stop_after: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Dichotomous (bisection) search
    #[value(alias = "bisection")]
    Dichotomous,
    /// Golden-section search
    #[value(alias = "golden-section")]
    Golden,
    /// Fibonacci search
    Fibonacci,
    /// Every strategy
    All,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Trace and summary tables
    #[default]
    Table,
    /// JSON array of solutions
    Json,
}

impl Cli {
    /// Collects the search parameters. Validation happens in the solver.
    pub fn parameters(&self) -> SearchParameters {
        SearchParameters {
            expression: self.expr.clone(),
            lower_bound: self.lower,
            upper_bound: self.upper,
            direction: self.direction,
            epsilon: self.epsilon,
            min_interval_length: self.min_length,
        }
    }

    /// Returns the selected strategies in display order, without duplicates.
    pub fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() || self.strategies.contains(&StrategyArg::All) {
            return Strategy::ALL.to_vec();
        }
        Strategy::ALL
            .into_iter()
            .filter(|strategy| {
                self.strategies.iter().any(|arg| match arg {
                    StrategyArg::Dichotomous => *strategy == Strategy::Dichotomous,
                    StrategyArg::Golden => *strategy == Strategy::GoldenSection,
                    StrategyArg::Fibonacci => *strategy == Strategy::Fibonacci,
                    StrategyArg::All => true,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["extremum", "--expr", "x", "--lower", "-1", "--upper", "2"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments parse")
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_select_every_strategy() {
        let cli = parse(&[]);

        assert_eq!(cli.direction, Direction::Max);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.max_iters, 1000);
        assert_eq!(cli.strategies(), Strategy::ALL.to_vec());

        let params = cli.parameters();
        assert_eq!(params.lower_bound, -1.0);
        assert_eq!(params.upper_bound, 2.0);
        assert_eq!(params.expression, "x");
    }

    #[test]
    fn repeated_strategies_keep_display_order() {
        let cli = parse(&["-s", "fibonacci", "-s", "bisection", "-s", "fibonacci"]);
        assert_eq!(
            cli.strategies(),
            vec![Strategy::Dichotomous, Strategy::Fibonacci]
        );
    }

    #[test]
    fn direction_accepts_long_names() {
        let cli = parse(&["--direction", "minimize", "--format", "json"]);
        assert_eq!(cli.direction, Direction::Min);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let result = Cli::try_parse_from([
            "extremum", "--expr", "x", "--lower", "0", "--upper", "1", "-d", "up",
        ]);
        assert!(result.is_err());
    }
}

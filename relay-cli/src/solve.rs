//! Solve command implementation for the Relay CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use relay_core::{Booking, Solution, Solver, check_unique_ids};
use relay_fs::{create_utf8_file, is_regular_file, open_utf8_file};
use relay_solver_permutation::PermutationSolver;
use relay_solver_tree::{TreeSolver, TreeSolverConfig};
use serde::{Deserialize, Serialize};

use crate::{ARG_INPUT, ARG_OUTPUT, ARG_STRATEGY, ARG_TIME_LIMIT_MS, CliError};

pub(crate) const DEFAULT_INPUT: &str = "data/bookings.json";
pub(crate) const DEFAULT_OUTPUT: &str = "results.json";

/// Ordering strategy used by the `solve` command.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Strategy {
    /// Branch-and-bound search.
    #[default]
    Tree,
    /// Exhaustive enumeration; only practical for a handful of bookings.
    Permutation,
}

impl Strategy {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Permutation => "permutation",
        }
    }
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON array of bookings, find the order with the \
                 fewest relocations and write the winning booking ids as a \
                 JSON array. Options can come from CLI flags, configuration \
                 files, or RELAY_* environment variables.",
    about = "Order bookings to minimise relocations"
)]
#[ortho_config(prefix = "RELAY")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing the bookings.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input_path: Option<Utf8PathBuf>,
    /// Where to write the ordered booking ids.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Solver to run.
    #[arg(long = ARG_STRATEGY, value_enum)]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
    /// Stop the tree search after this many milliseconds and keep the best
    /// ordering found so far.
    #[arg(long = ARG_TIME_LIMIT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) time_limit_ms: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SolveConfig::from(merged))
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the bookings file.
    pub(crate) input: Utf8PathBuf,
    /// Path the ordered ids are written to.
    pub(crate) output: Utf8PathBuf,
    /// Solver to run.
    pub(crate) strategy: Strategy,
    /// Optional tree search time limit.
    pub(crate) time_limit: Option<Duration>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.input, ARG_INPUT)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl From<SolveArgs> for SolveConfig {
    fn from(args: SolveArgs) -> Self {
        let input = args.input_path.unwrap_or_else(|| {
            log::warn!("no input path given; reading {DEFAULT_INPUT}");
            Utf8PathBuf::from(DEFAULT_INPUT)
        });
        let output = args.output.unwrap_or_else(|| {
            log::warn!("no --{ARG_OUTPUT} given; writing {DEFAULT_OUTPUT}");
            Utf8PathBuf::from(DEFAULT_OUTPUT)
        });
        let strategy = args.strategy.unwrap_or_else(|| {
            let fallback = Strategy::default();
            log::warn!("no --{ARG_STRATEGY} given; using {}", fallback.as_str());
            fallback
        });
        let time_limit = args.time_limit_ms.map(Duration::from_millis);
        if time_limit.is_some() && strategy != Strategy::Tree {
            log::warn!(
                "--{ARG_TIME_LIMIT_MS} only applies to the tree strategy; ignoring it for {}",
                strategy.as_str()
            );
        }

        Self {
            input,
            output,
            strategy,
            time_limit,
        }
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolverFactory {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver>;
}

pub(crate) struct DefaultSolverFactory;

impl SolverFactory for DefaultSolverFactory {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver> {
        match config.strategy {
            Strategy::Tree => Box::new(TreeSolver::with_config(TreeSolverConfig {
                time_limit: config.time_limit,
                ..TreeSolverConfig::default()
            })),
            Strategy::Permutation => Box::new(PermutationSolver::new()),
        }
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<Solution, CliError> {
    run_solve_with(args, &DefaultSolverFactory)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    factory: &dyn SolverFactory,
) -> Result<Solution, CliError> {
    let config = resolve_solve_config(args)?;
    let bookings = load_bookings(&config.input)?;
    log::debug!(
        "loaded {} bookings from {}; solving with {}",
        bookings.len(),
        config.input,
        config.strategy.as_str()
    );

    let solution = factory.build(&config).solve(&bookings);
    log::info!("Min relocations: {}", solution.relocations);
    for booking in &solution.bookings {
        log::debug!("{booking}");
    }

    write_ids(&config.output, &solution)?;
    Ok(solution)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON array of [`Booking`]s from disk and rejects duplicate ids.
pub(crate) fn load_bookings(path: &Utf8Path) -> Result<Vec<Booking>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenBookings {
        path: path.to_path_buf(),
        source,
    })?;
    let bookings: Vec<Booking> = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseBookings {
            path: path.to_path_buf(),
            source,
        },
    )?;
    check_unique_ids(&bookings).map_err(|source| CliError::InvalidBookings {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bookings)
}

/// Writes the ids of `solution` as a JSON array, creating parent directories.
pub(crate) fn write_ids(path: &Utf8Path, solution: &Solution) -> Result<(), CliError> {
    let payload = serde_json::to_vec(&solution.ids()).map_err(CliError::SerialiseSolution)?;
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&payload)
        .map_err(|source| CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(SolveConfig::from(merged))
}

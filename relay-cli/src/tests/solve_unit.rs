//! Focused unit tests covering solve configuration, loading and writing.
#![expect(
    clippy::expect_used,
    reason = "unit tests use expect for readable failures"
)]

use super::helpers::{CYCLE_BOOKINGS, Workspace, read_ids, write_utf8};
use crate::solve::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, DefaultSolverFactory, SolveArgs, SolveConfig, SolverFactory,
    Strategy, config_from_layers_for_test, load_bookings, run_solve_with, write_ids,
};
use crate::{ARG_INPUT, CliError};
use camino::Utf8PathBuf;
use relay_core::test_support::bookings;
use relay_core::{BookingSetError, Solution};
use rstest::{fixture, rstest};
use std::time::Duration;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

#[rstest]
fn missing_arguments_fall_back_to_defaults() {
    let config = SolveConfig::from(SolveArgs::default());
    assert_eq!(config.input, Utf8PathBuf::from(DEFAULT_INPUT));
    assert_eq!(config.output, Utf8PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.strategy, Strategy::Tree);
    assert_eq!(config.time_limit, None);
}

#[rstest]
fn explicit_arguments_are_kept() {
    let args = SolveArgs {
        input_path: Some(Utf8PathBuf::from("in.json")),
        output: Some(Utf8PathBuf::from("out/ids.json")),
        strategy: Some(Strategy::Permutation),
        time_limit_ms: Some(250),
    };
    let config = SolveConfig::from(args);
    assert_eq!(config.input, Utf8PathBuf::from("in.json"));
    assert_eq!(config.output, Utf8PathBuf::from("out/ids.json"));
    assert_eq!(config.strategy, Strategy::Permutation);
    assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
}

fn config_for(workspace: &Workspace, input: &str) -> SolveConfig {
    SolveConfig {
        input: workspace.path(input),
        output: workspace.path("results.json"),
        strategy: Strategy::Tree,
        time_limit: None,
    }
}

#[rstest]
fn validate_sources_reports_missing_input(workspace: Workspace) {
    let config = config_for(&workspace, "missing.json");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_INPUT);
            assert_eq!(path, config.input);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let config = config_for(&workspace, "bookings");
    std::fs::create_dir(&config.input).expect("input directory");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, path }) => {
            assert_eq!(field, ARG_INPUT);
            assert_eq!(path, config.input);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_regular_file(workspace: Workspace) {
    let config = config_for(&workspace, "bookings.json");
    write_utf8(&config.input, CYCLE_BOOKINGS);
    config.validate_sources().expect("input is a regular file");
}

#[rstest]
fn load_bookings_decodes_json(workspace: Workspace) {
    let path = workspace.path("bookings.json");
    write_utf8(&path, CYCLE_BOOKINGS);
    let decoded = load_bookings(&path).expect("bookings should decode");
    assert_eq!(
        decoded,
        bookings(&[(1, "a", "b"), (2, "c", "a"), (3, "a", "c")])
    );
}

#[rstest]
fn load_bookings_accepts_negative_ids(workspace: Workspace) {
    let path = workspace.path("bookings.json");
    write_utf8(
        &path,
        br#"[{"id": -3, "start": "a", "end": "b"}, {"id": 0, "start": "b", "end": "a"}]"#,
    );
    let decoded = load_bookings(&path).expect("negative ids should decode");
    assert_eq!(decoded, bookings(&[(-3, "a", "b"), (0, "b", "a")]));
}

#[rstest]
fn load_bookings_rejects_invalid_json(workspace: Workspace) {
    let path = workspace.path("bookings.json");
    write_utf8(&path, b"[{ not valid json");
    match load_bookings(&path) {
        Err(CliError::ParseBookings { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseBookings, found {other:?}"),
    }
}

#[rstest]
fn load_bookings_rejects_duplicate_ids(workspace: Workspace) {
    let path = workspace.path("bookings.json");
    write_utf8(
        &path,
        br#"[{"id": 4, "start": "a", "end": "b"}, {"id": 4, "start": "b", "end": "a"}]"#,
    );
    match load_bookings(&path) {
        Err(CliError::InvalidBookings { source, .. }) => {
            assert_eq!(source, BookingSetError::DuplicateId { id: 4 });
        }
        other => panic!("expected InvalidBookings, found {other:?}"),
    }
}

#[rstest]
fn load_bookings_io_error_returns_open_error(workspace: Workspace) {
    let path = workspace.path("absent.json");
    match load_bookings(&path) {
        Err(CliError::OpenBookings { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected OpenBookings, found {other:?}"),
    }
}

#[rstest]
fn write_ids_creates_parent_directories(workspace: Workspace) {
    let path = workspace.path("nested/out/results.json");
    let solution = Solution::scored(bookings(&[(5, "a", "b"), (2, "b", "c")]));
    write_ids(&path, &solution).expect("write ids");
    assert_eq!(read_ids(&path), vec![5, 2]);
}

#[rstest]
fn write_ids_writes_empty_array_for_no_bookings(workspace: Workspace) {
    let path = workspace.path("results.json");
    write_ids(&path, &Solution::no_bookings()).expect("write ids");
    assert!(read_ids(&path).is_empty());
}

#[rstest]
#[case::tree(Strategy::Tree)]
#[case::permutation(Strategy::Permutation)]
fn both_strategies_solve_the_cycle(workspace: Workspace, #[case] strategy: Strategy) {
    let input = workspace.path("bookings.json");
    let output = workspace.path("results.json");
    write_utf8(&input, CYCLE_BOOKINGS);
    let args = SolveArgs {
        input_path: Some(input),
        output: Some(output.clone()),
        strategy: Some(strategy),
        time_limit_ms: None,
    };

    let solution = run_solve_with(args, &DefaultSolverFactory).expect("solve succeeds");
    assert_eq!(solution.relocations, 0);
    assert_eq!(read_ids(&output), vec![3, 2, 1]);
}

#[rstest]
#[case::tree(Strategy::Tree, -1)]
#[case::permutation(Strategy::Permutation, 0)]
fn default_factory_builds_requested_solver(#[case] strategy: Strategy, #[case] empty: i64) {
    let config = SolveConfig {
        input: Utf8PathBuf::from("unused.json"),
        output: Utf8PathBuf::from("unused-out.json"),
        strategy,
        time_limit: Some(Duration::from_secs(1)),
    };
    // The solvers differ only in how they score an empty input.
    let solver = DefaultSolverFactory.build(&config);
    assert_eq!(solver.solve(&[]).relocations, empty);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "time_limit_ms": "soon" }));

    match config_from_layers_for_test(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let file_output = workspace.path("from-file.json");
    let env_input = workspace.path("from-env.json");
    let cli_output = workspace.path("from-cli.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "output": file_output.as_str(),
            "strategy": "permutation",
            "time_limit_ms": 500,
        }),
        None,
    );
    composer.push_environment(json!({
        "input_path": env_input.as_str(),
        "strategy": "tree",
    }));
    composer.push_cli(json!({
        "output": cli_output.as_str(),
    }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.input, env_input);
    assert_eq!(config.output, cli_output);
    assert_eq!(config.strategy, Strategy::Tree);
    assert_eq!(config.time_limit, Some(Duration::from_millis(500)));
}

//! Unit tests for the CLI commands and edge-list loading.

use super::commands::{load_edges, run_mst_command, run_speed_command};
use super::{Cli, CliError, Command, ExecutionSummary, MstCommand, SpeedCommand, render_summary, run_cli};

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use wgraph_benches::error::BenchSetupError;
use wgraph_benches::workload::{SpeedConfig, SpeedTotals, run_speed};
use wgraph_core::{GraphError, WeightedGraph};

use wgraph_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SQUARE: &str = "# square with a heavy diagonal\n0 1 1.0\n1 2 2.0\n\n2 3 3.0\n0 3 10.0\n";

#[fixture]
fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn create_edge_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

fn mst_cli(path: PathBuf, vertices: usize) -> Cli {
    Cli {
        command: Command::Mst(MstCommand { path, vertices }),
    }
}

fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

#[rstest]
fn clap_applies_speed_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["wgraph", "speed", "100"])?;
    let Command::Speed(speed) = cli.command else {
        panic!("expected the speed command");
    };
    assert_eq!(speed.vertices, 100);
    assert_eq!(speed.seed, 10);
    assert_eq!(speed.rounds, None);
    assert_eq!(speed.inserts_per_round, 10);
    Ok(())
}

#[rstest]
fn clap_accepts_speed_overrides() -> TestResult {
    let cli = Cli::try_parse_from([
        "wgraph",
        "speed",
        "20",
        "--seed",
        "3",
        "--rounds",
        "7",
        "--inserts-per-round",
        "2",
    ])?;
    let Command::Speed(speed) = cli.command else {
        panic!("expected the speed command");
    };
    assert_eq!(
        (speed.vertices, speed.seed, speed.rounds, speed.inserts_per_round),
        (20, 3, Some(7), 2)
    );
    Ok(())
}

#[rstest]
#[case::mst_without_vertices(&["wgraph", "mst", "edges.txt"])]
#[case::speed_without_vertices(&["wgraph", "speed"])]
#[case::negative_vertices(&["wgraph", "speed", "-4"])]
fn clap_rejects_incomplete_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn speed_command_matches_workload() -> TestResult {
    let command = SpeedCommand {
        vertices: 7,
        seed: 10,
        rounds: None,
        inserts_per_round: 10,
    };
    let from_cli = run_speed_command(&command)?;
    let direct = run_speed(&SpeedConfig::new(7))?;
    assert_eq!(from_cli, direct);
    assert_eq!(from_cli.rounds, 49);
    Ok(())
}

#[rstest]
fn speed_command_rejects_zero_vertices() {
    let cli = Cli {
        command: Command::Speed(SpeedCommand {
            vertices: 0,
            seed: 10,
            rounds: None,
            inserts_per_round: 10,
        }),
    };
    let err = run_cli_expecting_error(cli, "zero vertices must fail");
    assert!(matches!(
        err,
        CliError::Bench(BenchSetupError::ZeroValue { .. })
    ));
}

#[rstest]
fn mst_command_computes_tree(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "square.txt", SQUARE)?;
    let ExecutionSummary::Mst(tree) = run_cli(mst_cli(path, 4))? else {
        panic!("mst command yields a tree");
    };
    assert_eq!(tree.as_pair(), (6.0, 3));
    assert_eq!(tree.set_count(), 1);
    Ok(())
}

#[rstest]
fn mst_command_reports_disconnected_forest(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "pair.txt", "0 1 5.0\n")?;
    let tree = run_mst_command(&MstCommand {
        path,
        vertices: 4,
    })?;
    assert_eq!(tree.as_pair(), (5.0, 1));
    assert_eq!(tree.set_count(), 3);
    Ok(())
}

#[rstest]
fn mst_command_reports_parse_line(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "broken.txt", "0 1 1.0\n# ok\n1 x 2.0\n")?;
    let err = run_cli_expecting_error(mst_cli(path, 4), "malformed file must fail");
    match err {
        CliError::Parse { line, reason, path } => {
            assert_eq!(line, 3);
            assert!(reason.contains("right vertex"), "{reason}");
            assert!(path.ends_with("broken.txt"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn mst_command_rejects_out_of_range_vertices(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "wide.txt", "0 9 1.0\n")?;
    let err = run_cli_expecting_error(mst_cli(path, 4), "vertex 9 is out of range");
    assert!(matches!(
        err,
        CliError::Core(GraphError::VertexOutOfRange {
            vertex: 9,
            capacity: 4
        })
    ));
    Ok(())
}

#[rstest]
fn mst_command_rejects_negative_weights(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "negative.txt", "0 1 -2.0\n")?;
    let err = run_cli_expecting_error(mst_cli(path, 2), "negative weight must fail");
    assert!(matches!(
        err,
        CliError::Core(GraphError::NegativeWeight { .. })
    ));
    Ok(())
}

#[rstest]
fn mst_command_reports_missing_file(temp_dir: TempDir) {
    let path = temp_dir.path().join("missing.txt");
    let err = run_cli_expecting_error(mst_cli(path, 2), "missing file must fail");
    assert!(matches!(err, CliError::Io { .. }));
}

#[rstest]
fn load_edges_skips_degenerate_records() -> TestResult {
    let mut graph = WeightedGraph::new(3);
    let loaded = load_edges(
        Path::new("inline"),
        Cursor::new("0 0 4.0\n0 1 0\n1 2 0.5\n"),
        &mut graph,
    )?;
    assert_eq!(loaded, 3);
    assert_eq!(graph.edge_count(), 1);
    Ok(())
}

#[rstest]
fn render_summary_outputs_speed_pair() -> TestResult {
    let summary = ExecutionSummary::Speed(SpeedTotals {
        total_weight: 12.25,
        edges_examined: 30,
        rounds: 4,
    });
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, "12.25, 30\n");
    Ok(())
}

#[rstest]
fn render_summary_outputs_tree(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "square.txt", SQUARE)?;
    let summary = run_cli(mst_cli(path, 4))?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(
        text,
        "weight: 6\nexamined: 3\nsets: 1\n0\t1\t1\n1\t2\t2\n2\t3\t3\n"
    );
    Ok(())
}

#[rstest]
fn mst_command_emits_tracing_fields(temp_dir: TempDir) -> TestResult {
    let path = create_edge_file(&temp_dir, "square.txt", SQUARE)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || run_cli(mst_cli(path, 4)))?;

    let run = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(run.fields.get("command"), Some(&"mst".to_owned()));

    let mst = layer.span_named("cli.mst").expect("cli.mst span must exist");
    assert_eq!(mst.fields.get("vertices"), Some(&"4".to_owned()));
    assert_eq!(mst.fields.get("loaded"), Some(&"4".to_owned()));
    assert!(
        mst.fields
            .get("path")
            .is_some_and(|value| value.ends_with("square.txt"))
    );

    let events = layer.events_with_message("mst command completed");
    assert_eq!(events.len(), 1);
    let event = events.first().expect("event recorded");
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.fields.get("sets"), Some(&"1".to_owned()));
    Ok(())
}

#[rstest]
fn open_edge_list_records_path_on_error(temp_dir: TempDir) {
    let missing = temp_dir.path().join("absent.txt");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || run_cli(mst_cli(missing, 3)))
        .expect_err("missing file must fail");
    assert!(matches!(err, CliError::Io { .. }));

    let reader = layer
        .span_named("cli.open_edge_list")
        .expect("reader span must exist");
    assert!(
        reader
            .fields
            .get("path")
            .is_some_and(|value| value.ends_with("absent.txt"))
    );
}

//! End-to-end runs against a shell script standing in for an instrumented
//! binary. The script records one `main -> <line>` call per input line.
//!
//! The script is passed to `/bin/sh` as a flag rather than executed directly,
//! which avoids "text file busy" races with freshly written executables.

#![cfg(unix)]

use call_trace_studio::commands::{execute_run, OutputOptions, RunArgs};
use call_trace_studio::runner::{InputSelection, InstrumentedRunner};
use call_trace_studio::utils::error::RunnerError;
use std::fs;
use std::path::{Path, PathBuf};

const FAKE_TARGET: &str = r#"#!/bin/sh
# last argument is the test input
for input; do :; done
printf 'source,target\n' > callgraph.csv
while IFS= read -r line; do
  printf 'main,%s\n' "$line" >> callgraph.csv
done < "$input"
"#;

const SHELL: &str = "/bin/sh";

fn fake_target(dir: &Path) -> String {
    let path = dir.join("fake-target.sh");
    fs::write(&path, FAKE_TARGET).unwrap();
    path.to_string_lossy().into_owned()
}

fn seed_dir(dir: &Path) -> PathBuf {
    let seeds = dir.join("seeds");
    fs::create_dir(&seeds).unwrap();
    fs::write(seeds.join("a.txt"), "parse\nparse\n").unwrap();
    fs::write(seeds.join("b.txt"), "parse\nexecute\n").unwrap();
    seeds
}

#[test]
fn test_runner_reads_trace() {
    let dir = tempfile::tempdir().unwrap();
    let seeds = seed_dir(dir.path());

    let runner = InstrumentedRunner::new(SHELL)
        .unwrap()
        .with_flags(vec![fake_target(dir.path())])
        .with_working_dir(dir.path());
    let records = runner.run(&seeds.join("a.txt")).unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.source == "main" && r.target == "parse"));
}

#[test]
fn test_runner_missing_trace() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("silent.sh");
    fs::write(&script, "exit 0\n").unwrap();
    let seeds = seed_dir(dir.path());

    let runner = InstrumentedRunner::new(SHELL)
        .unwrap()
        .with_flags(vec![script.to_string_lossy().into_owned()])
        .with_working_dir(dir.path());

    assert!(matches!(
        runner.run(&seeds.join("a.txt")),
        Err(RunnerError::MissingTrace(_))
    ));
}

#[test]
fn test_execute_run_single_seed_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("callgraph.json");

    let args = RunArgs {
        binary: PathBuf::from(SHELL),
        flags: vec![fake_target(dir.path())],
        inputs_dir: seed_dir(dir.path()),
        selection: InputSelection::Single(1),
        working_dir: dir.path().to_path_buf(),
        outputs: OutputOptions {
            output_json: Some(report.clone()),
            ..Default::default()
        },
        ..Default::default()
    };

    let graph = execute_run(args).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(report.exists());
    assert!(!dir.path().join("callgraph.csv").exists());
}

#[test]
fn test_execute_run_all_inputs_keep_artifacts() {
    let dir = tempfile::tempdir().unwrap();

    let args = RunArgs {
        binary: PathBuf::from(SHELL),
        flags: vec![fake_target(dir.path())],
        inputs_dir: seed_dir(dir.path()),
        selection: InputSelection::All,
        working_dir: dir.path().to_path_buf(),
        keep_artifacts: true,
        outputs: OutputOptions {
            output_json: None,
            ..Default::default()
        },
        ..Default::default()
    };

    let graph = execute_run(args).unwrap();

    assert_eq!(
        graph.edge_weight(&"main".to_string(), &"parse".to_string()),
        Some(3)
    );
    assert_eq!(
        graph.edge_weight(&"main".to_string(), &"execute".to_string()),
        Some(1)
    );
    assert!(dir.path().join("callgraph.csv").exists());
}

#[test]
fn test_execute_run_index_out_of_range() {
    let dir = tempfile::tempdir().unwrap();

    let args = RunArgs {
        binary: PathBuf::from(SHELL),
        flags: vec![fake_target(dir.path())],
        inputs_dir: seed_dir(dir.path()),
        selection: InputSelection::Single(5),
        working_dir: dir.path().to_path_buf(),
        outputs: OutputOptions {
            output_json: None,
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(execute_run(args).is_err());
}

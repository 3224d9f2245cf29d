use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn seeded_run_prints_a_summary() {
    let mut cmd = Command::cargo_bin("gostop").unwrap();
    cmd.args(["--games", "2", "--seed", "4242"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Played 2 games from seed 4242"))
        .stdout(predicate::str::contains("seed 4242:"))
        .stdout(predicate::str::contains("seed 4243:"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        Command::cargo_bin("gostop")
            .unwrap()
            .args(["--games", "3", "--seed", "99", "--json"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn json_summary_decodes() {
    let output = Command::cargo_bin("gostop")
        .unwrap()
        .args(["--games", "1", "--seed", "7", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["games"], 1);
    assert_eq!(summary["base_seed"], 7);
    assert_eq!(summary["reports"].as_array().unwrap().len(), 1);
}

#[test]
fn log_file_receives_json_lines() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("run.jsonl");

    Command::cargo_bin("gostop")
        .unwrap()
        .args(["--games", "1", "--seed", "5"])
        .arg("--log-file")
        .arg(&log_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let game_line = contents
        .lines()
        .find(|line| line.contains("gostop_cli::game"))
        .expect("per-game event logged");
    let value: serde_json::Value = serde_json::from_str(game_line).unwrap();
    assert_eq!(value["fields"]["seed"], 5);
}

#[test]
fn bad_go_table_is_rejected() {
    Command::cargo_bin("gostop")
        .unwrap()
        .args(["--games", "1", "--seed", "1", "--go-table", "1,x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid go table entry"));
}

#[test]
fn oversized_deal_is_rejected() {
    Command::cargo_bin("gostop")
        .unwrap()
        .args(["--games", "1", "--seed", "1", "--hand-size", "25"])
        .assert()
        .failure();
}

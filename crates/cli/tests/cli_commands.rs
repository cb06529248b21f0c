//! CLI tests for the `lineup` binary.
//!
//! Spawns the binary in a scratch directory and checks stdout and exit
//! status for `drain`, `run` and `config`.

use std::path::Path;
use std::process::{Command, Output};

fn lineup(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lineup"))
        .current_dir(dir)
        .args(args)
        .env_remove("LINEUP_CONFIG")
        .env_remove("LINEUP_SERVICE__MAX_SIZE")
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn lineup")
}

#[test]
fn drain_prints_queue_then_priority_order() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = lineup(temp.path(), &["drain", "-e", "Adam:3", "-e", "Eve:9"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("[Adam (Pri:3), Eve (Pri:9)]"), "{}", stdout);

    let (_, table) = stdout
        .split_once("Drained in priority order")
        .expect("drain banner");
    assert!(table.contains("order") && table.contains("name"), "{}", table);

    let eve = table.find("Eve").expect("Eve row");
    let adam = table.find("Adam").expect("Adam row");
    assert!(eve < adam, "Eve should be served before Adam:\n{}", table);
}

#[test]
fn drain_rejects_malformed_entry() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = lineup(temp.path(), &["drain", "-e", "Adam"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NAME:PRIORITY"), "{}", stderr);
}

#[test]
fn run_json_report_lists_outcomes_and_final_queue() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script = temp.path().join("script.json");
    std::fs::write(
        &script,
        r#"[
            {"op": "enqueue", "name": "Adam", "priority": 3},
            {"op": "enqueue", "name": "Beth", "priority": 1},
            {"op": "enqueue", "name": "Eve", "priority": 9},
            {"op": "dequeue"},
            {"op": "dequeue"}
        ]"#,
    )
    .expect("write script");

    let output = lineup(temp.path(), &["run", "script.json", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["queue"], "[Beth (Pri:1)]");

    let served: Vec<&str> = report["outcomes"]
        .as_array()
        .expect("outcomes array")
        .iter()
        .filter(|o| o["outcome"] == "dequeued")
        .filter_map(|o| o["name"].as_str())
        .collect();
    assert_eq!(served, ["Eve", "Adam"]);
}

#[test]
fn run_fails_on_dequeue_from_empty_queue() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("empty.json"), r#"[{"op": "dequeue"}]"#).expect("write script");

    let output = lineup(temp.path(), &["run", "empty.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("The queue is empty"));

    let output = lineup(temp.path(), &["run", "empty.json", "--keep-going"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("rejected"));
}

#[test]
fn config_reflects_file_and_environment() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("lineup.toml"), "[service]\nmax_size = 3\n").expect("write config");

    let output = lineup(temp.path(), &["config"]);
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json settings");
    assert_eq!(settings["service"]["max_size"], 3);

    let output = Command::new(env!("CARGO_BIN_EXE_lineup"))
        .current_dir(temp.path())
        .arg("config")
        .env_remove("LINEUP_CONFIG")
        .env("LINEUP_SERVICE__MAX_SIZE", "4")
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn lineup");
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json settings");
    assert_eq!(settings["service"]["max_size"], 4);
}

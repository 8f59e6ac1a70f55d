//! Integration tests for the tabular-stats binary
//!
//! Runs the compiled binary against temporary folders and checks exit codes,
//! written files and console output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SUPER_BOWL_JSON: &str = r#"[
    {"Winning team": "A", "Losing team": "B", "Winning Team Points": 30, "Losing Team Points": 20},
    {"Winning team": "B", "Losing team": "A", "Winning Team Points": 10, "Losing Team Points": 7}
]"#;

fn tabular_stats(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabular-stats"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("TABULAR_STATS_INPUT_DIR")
        .env_remove("TABULAR_STATS_OUTPUT_DIR")
        .env_remove("TABULAR_STATS_CONFIG")
        .output()
        .expect("failed to run tabular-stats")
}

fn setup(root: &Path) {
    let input = root.join("fetched_data");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("super_bowl.json"), SUPER_BOWL_JSON).unwrap();
}

#[test]
fn test_championship_with_default_folders() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path());

    let output = tabular_stats(&["championship"], temp_dir.path());

    assert!(output.status.success());
    let report =
        fs::read_to_string(temp_dir.path().join("processed_data/super_bowl_analysis.txt")).unwrap();
    assert!(report.contains("Most Super Bowl Wins: A with 1\n"));
    assert!(report.contains("Average Point Spread: 7 points.\n"));
}

#[test]
fn test_missing_input_still_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = tabular_stats(&["streaming", "--input-dir", "nowhere"], temp_dir.path());

    assert!(output.status.success());
    assert!(!temp_dir.path().join("processed_data").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No statistics to write. Skipping file output."));
}

#[test]
fn test_json_output_format() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path());

    let output = tabular_stats(
        &["championship", "--output-format", "json", "-o", "reports"],
        temp_dir.path(),
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcome = &value["outcomes"][0];
    assert_eq!(outcome["analysis"], "championship");
    assert_eq!(outcome["stats"]["accepted"], 2);
    assert_eq!(outcome["summary"]["most_wins"]["team"], "A");
    assert_eq!(outcome["summary"]["average_point_spread"], 7);
    assert!(temp_dir.path().join("reports/super_bowl_analysis.txt").exists());
}

#[test]
fn test_bad_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.toml"), "input_folder = [").unwrap();

    let output = tabular_stats(&["all", "--config", "bad.toml"], temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: 'all' command failed"));
}

#[test]
fn test_convert_writes_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("games.csv"),
        "Winning team,Losing team\nA,B\n",
    )
    .unwrap();

    let output = tabular_stats(&["convert", "games.csv", "out/games.json", "-q"], temp_dir.path());

    assert!(output.status.success());
    let content = fs::read_to_string(temp_dir.path().join("out/games.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["Winning team"], "A");
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp_dir = TempDir::new().unwrap();

    let output = tabular_stats(&[], temp_dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("COMMANDS:"));
}

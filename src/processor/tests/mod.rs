//! Tests for the processor module
//!
//! Each test lays out an input folder in a temporary directory and runs
//! analyses against it with an explicit `RunConfig`.

pub mod basic_processing;

use crate::config::RunConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary input/output folders plus a config pointing at them
pub fn workspace() -> (TempDir, RunConfig) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("fetched_data");
    fs::create_dir_all(&input).unwrap();

    let mut config = RunConfig::new(input, temp_dir.path().join("processed_data"));
    config.box_office.input = Some("box_office_data.csv".to_string());
    (temp_dir, config)
}

pub fn write_input(config: &RunConfig, name: &str, content: &str) {
    fs::write(config.input_folder.join(name), content).unwrap();
}

pub fn read_report(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

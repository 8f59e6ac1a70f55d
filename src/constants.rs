//! Application constants for tabular-stats
//!
//! Default folder and file names used only when building the process-wide
//! default configuration at the entry point.

// =============================================================================
// Folders
// =============================================================================

/// Folder holding the fetched input files
pub const DEFAULT_INPUT_FOLDER: &str = "fetched_data";

/// Folder receiving the text reports
pub const DEFAULT_OUTPUT_FOLDER: &str = "processed_data";

// =============================================================================
// Per-analysis file names
// =============================================================================

pub mod box_office {
    pub const INPUT_FILE: &str = "box_office_data.xlsx";
    pub const OUTPUT_FILE: &str = "box_office_gross_earnings.txt";
}

pub mod streaming {
    pub const INPUT_FILE: &str = "spotify_data.csv";
    pub const OUTPUT_FILE: &str = "spotify_data_2023.txt";
}

pub mod championship {
    pub const INPUT_FILE: &str = "super_bowl.json";
    pub const OUTPUT_FILE: &str = "super_bowl_analysis.txt";
}

// =============================================================================
// Extraction
// =============================================================================

/// Substituted for blank text fields that define a fallback
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

// =============================================================================
// Configuration and logging
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "tabular-stats";

/// Config file looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Target used for the default log filter
pub const LOG_TARGET: &str = "tabular_stats";

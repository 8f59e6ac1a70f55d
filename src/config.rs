//! Run configuration.
//!
//! A [`RunConfig`] names the input and output folders and, optionally, the
//! file names used by each analysis. Values are layered: built-in defaults,
//! then a TOML file, then command-line and environment overrides.
//!
//! ```toml
//! input_folder = "fetched_data"
//! output_folder = "processed_data"
//!
//! [streaming]
//! input = "charts_2023.csv"
//! output = "charts_2023.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyses::AnalysisKind;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_FOLDER, DEFAULT_OUTPUT_FOLDER,
};
use crate::error::{Result, StatsError};

/// File name overrides for one analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisFiles {
    /// Input file name, relative to `input_folder`
    pub input: Option<String>,
    /// Report file name, relative to `output_folder`
    pub output: Option<String>,
}

/// Folders and file names for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub box_office: AnalysisFiles,
    pub streaming: AnalysisFiles,
    pub championship: AnalysisFiles,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_FOLDER, DEFAULT_OUTPUT_FOLDER)
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
}

impl RunConfig {
    /// Configuration with the given folders and default file names
    pub fn new(input_folder: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_folder: output_folder.into(),
            box_office: AnalysisFiles::default(),
            streaming: AnalysisFiles::default(),
            championship: AnalysisFiles::default(),
        }
    }

    /// `<config dir>/tabular-stats/config.toml`, when the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML configuration file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: RunConfig = toml::from_str(&content).map_err(|e| {
            StatsError::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using layered approach (defaults -> file -> overrides)
    ///
    /// An explicit `config_file` must exist. Without one, the default config
    /// path is used only if the file is present.
    pub fn load_layered(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(StatsError::configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Replace folders with any values given on the command line
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(input_folder) = &overrides.input_folder {
            self.input_folder = input_folder.clone();
        }
        if let Some(output_folder) = &overrides.output_folder {
            self.output_folder = output_folder.clone();
        }
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.input_folder.as_os_str().is_empty() {
            return Err(StatsError::configuration("input_folder cannot be empty"));
        }
        if self.output_folder.as_os_str().is_empty() {
            return Err(StatsError::configuration("output_folder cannot be empty"));
        }

        for kind in AnalysisKind::ALL {
            let files = self.files(kind);
            for (key, name) in [("input", &files.input), ("output", &files.output)] {
                if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                    return Err(StatsError::configuration(format!(
                        "[{}] {} file name cannot be empty",
                        kind, key
                    )));
                }
            }

            if self.input_path(kind) == self.output_path(kind) {
                return Err(StatsError::configuration(format!(
                    "{}: report would overwrite its input file {}",
                    kind,
                    self.input_path(kind).display()
                )));
            }
        }

        Ok(())
    }

    /// File name overrides for one analysis
    pub fn files(&self, kind: AnalysisKind) -> &AnalysisFiles {
        match kind {
            AnalysisKind::BoxOffice => &self.box_office,
            AnalysisKind::Streaming => &self.streaming,
            AnalysisKind::Championship => &self.championship,
        }
    }

    /// Path of the input file read by `kind`
    pub fn input_path(&self, kind: AnalysisKind) -> PathBuf {
        let name = self
            .files(kind)
            .input
            .as_deref()
            .unwrap_or_else(|| kind.default_input_file());
        self.input_folder.join(name)
    }

    /// Path of the report written by `kind`
    pub fn output_path(&self, kind: AnalysisKind) -> PathBuf {
        let name = self
            .files(kind)
            .output
            .as_deref()
            .unwrap_or_else(|| kind.default_output_file());
        self.output_folder.join(name)
    }
}

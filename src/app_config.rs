use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Arrangement pipeline options
    #[serde(default)]
    pub arrange: ArrangeConfig,

    /// Output naming options
    #[serde(default)]
    pub output: OutputConfig,

    /// Max number of files processed concurrently in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options for the arrangement pipeline. Both stages default to enabled;
/// deduplication always runs before merging.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ArrangeConfig {
    /// Drop consecutively repeated captions
    #[serde(default = "default_true")]
    pub remove_repeated: bool,

    /// Merge caption fragments into complete sentences
    #[serde(default = "default_true")]
    pub merge: bool,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            remove_repeated: true,
            merge: true,
        }
    }
}

/// Output naming configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Label inserted before the extension of output files
    /// (`input.srt` becomes `input.<suffix>.srt`)
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_concurrent_files() -> usize {
    4
}

fn default_output_suffix() -> String {
    "arranged".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output.suffix.is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if self.output.suffix.contains(['/', '\\', '.']) {
            return Err(anyhow!(
                "Output suffix must not contain path separators or dots: {}",
                self.output.suffix
            ));
        }

        if self.concurrent_files == 0 {
            return Err(anyhow!("concurrent_files must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            arrange: ArrangeConfig::default(),
            output: OutputConfig::default(),
            concurrent_files: default_concurrent_files(),
            log_level: LogLevel::default(),
        }
    }
}

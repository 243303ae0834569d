//! Run configuration.
//!
//! Settings are resolved in three layers, later layers winning:
//! built-in defaults, then the `.textduperc` config file (JSON), then CLI
//! flags. The resolved configuration is validated before any file is read;
//! invalid numeric settings are rejected, never coerced.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::Cli;

/// File name looked up in the root directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".textduperc";

/// Ignore patterns applied when neither the config file nor the CLI
/// provides any.
const DEFAULT_IGNORE: &[&str] = &["node_modules/", ".git/", "target/", "vendor/"];

/// Resolved, validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Failure threshold in percent (0-100, fractional allowed).
    pub threshold: f64,
    /// Minimum number of lines a block must span to be compared.
    pub min_lines: usize,
    /// Minimum number of characters a block must exceed to be compared.
    pub min_chars: usize,
    /// Gitignore-style patterns excluded from the corpus.
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 95.0,
            min_lines: 4,
            min_chars: 100,
            ignore: DEFAULT_IGNORE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// On-disk shape of `.textduperc`. All fields optional; anything absent
/// falls through to the layer below.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    failure_threshold: Option<f64>,
    min_lines: Option<usize>,
    min_chars: Option<usize>,
    ignore: Option<Vec<String>>,
}

/// Errors produced while resolving or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON or has the wrong shape.
    #[error("malformed config file {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The threshold is outside the representable score range.
    #[error("threshold must be a finite number between 0 and 100, got {0}")]
    InvalidThreshold(f64),

    /// A zero line minimum would make the size gate meaningless.
    #[error("minimum line count must be at least 1")]
    InvalidMinLines,
}

impl Config {
    /// Resolve the effective configuration for `cli`.
    ///
    /// The config file is looked up at `--config` if given, otherwise at
    /// `.textduperc` under the root directory. A missing default-path file
    /// is fine; a missing explicitly-requested file is an error.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| cli.root.join(CONFIG_FILE_NAME));

        match fs::read_to_string(&path) {
            Ok(data) => {
                let file: ConfigFile =
                    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                config.apply_file(file);
                log::debug!("Loaded config file {}", path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && cli.config.is_none() => {
                log::debug!("No config file at {}, using defaults", path.display());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        }

        // CLI flags are closest to the run, so they win over the file.
        if let Some(threshold) = cli.threshold {
            config.threshold = threshold;
        }
        if let Some(min_lines) = cli.min_lines {
            config.min_lines = min_lines;
        }
        if let Some(min_chars) = cli.min_chars {
            config.min_chars = min_chars;
        }
        config
            .ignore
            .extend(cli.ignore_patterns.iter().cloned());

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(threshold) = file.failure_threshold {
            self.threshold = threshold;
        }
        if let Some(min_lines) = file.min_lines {
            self.min_lines = min_lines;
        }
        if let Some(min_chars) = file.min_chars {
            self.min_chars = min_chars;
        }
        if let Some(ignore) = file.ignore {
            // An explicit ignore list replaces the built-in one.
            self.ignore = ignore;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.min_lines == 0 {
            return Err(ConfigError::InvalidMinLines);
        }
        Ok(())
    }
}

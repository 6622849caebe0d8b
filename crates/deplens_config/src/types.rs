//! Configuration file data model.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level `deplens.toml` structure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// The `[analysis]` section.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// The `[analysis]` section of `deplens.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Substring patterns; matching files and include directories are
    /// excluded from the analysis.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Default report output path, overridable with `--output`.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Worker-thread count, overridable with `--jobs`. Defaults to the
    /// number of available CPU cores when absent.
    #[serde(default)]
    pub jobs: Option<usize>,
}

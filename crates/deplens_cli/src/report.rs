//! JSON report serialization.

use deplens_engine::UnitDependencies;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Errors that can occur while writing the dependency report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        /// Path the report was being written to.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level shape of the JSON report.
///
/// ```json
/// { "files": [ { "name": "...", "dependencies": ["..."] } ] }
/// ```
#[derive(Serialize)]
struct Report<'a> {
    files: &'a [UnitDependencies],
}

/// Renders the report as pretty-printed JSON.
pub fn render_report(units: &[UnitDependencies]) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(&Report { files: units })?;
    json.push('\n');
    Ok(json)
}

/// Writes the report to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, units: &[UnitDependencies]) -> Result<(), ReportError> {
    let json = render_report(units)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `deplens.toml` from the given path.
///
/// A missing file is not an error — the configuration is optional and
/// defaults apply — but an unreadable or invalid file is fatal.
pub fn load_config(config_path: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    if !config_path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(config_path)?;
    load_config_from_str(&content).map(Some)
}

/// Parses and validates a `deplens.toml` from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.analysis.jobs == Some(0) {
        return Err(ConfigError::Validation(
            "analysis.jobs must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.analysis.ignore.is_empty());
        assert!(config.analysis.output.is_none());
        assert!(config.analysis.jobs.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[analysis]
ignore = ["ThirdParty", "/gen/"]
output = "deps.json"
jobs = 8
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.analysis.ignore, vec!["ThirdParty", "/gen/"]);
        assert_eq!(config.analysis.output, Some(PathBuf::from("deps.json")));
        assert_eq!(config.analysis.jobs, Some(8));
    }

    #[test]
    fn zero_jobs_is_rejected() {
        let err = load_config_from_str("[analysis]\njobs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = load_config_from_str("[analysis]\ntypo = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_none() {
        let loaded = load_config(Path::new("/nonexistent/deplens.toml")).unwrap();
        assert!(loaded.is_none());
    }
}

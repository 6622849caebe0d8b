//! Optional project configuration for deplens.
//!
//! A `deplens.toml` next to the compile database can carry settings that
//! would otherwise be repeated on every invocation: ignore patterns, the
//! report output path, and the worker-thread count. Command-line flags
//! always take precedence over the file.

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{AnalysisConfig, ProjectConfig};

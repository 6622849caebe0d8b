//! Error types for compile-database loading.

use std::path::PathBuf;

/// Errors that can occur while loading a `compile_commands.json` file.
///
/// These are the fatal errors of a run: without a valid build
/// description there is nothing to analyze, so loading aborts instead of
/// degrading.
#[derive(Debug, thiserror::Error)]
pub enum CompileDbError {
    /// The database file could not be opened or read.
    #[error("failed to read compile database {}: {source}", path.display())]
    Io {
        /// The database path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The database content is not the expected JSON structure.
    #[error("failed to parse compile database {}: {reason}", path.display())]
    Parse {
        /// The database path that caused the error.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_display() {
        let err = CompileDbError::Io {
            path: PathBuf::from("/b/compile_commands.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read compile database"));
        assert!(msg.contains("compile_commands.json"));
    }

    #[test]
    fn parse_display() {
        let err = CompileDbError::Parse {
            path: PathBuf::from("cc.json"),
            reason: "expected an array".to_string(),
        };
        assert!(err.to_string().contains("expected an array"));
    }
}

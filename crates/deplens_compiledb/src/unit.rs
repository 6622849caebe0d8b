//! The compilation-unit record consumed by the analysis engine.

use std::path::PathBuf;

/// One compilation unit from the build description.
///
/// Identity is the canonical absolute source path. The include-search
/// directories keep the order they appeared in on the compiler command
/// line; that order decides which physical file wins when duplicate
/// headers exist on the search path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Canonical absolute path of the source file.
    pub path: PathBuf,
    /// Ordered include-search directories (`-I`, `-isystem`).
    pub include_dirs: Vec<PathBuf>,
    /// Files force-included on the command line (`-include`), as written
    /// (raw, not yet resolved against the search directories).
    pub forced_includes: Vec<PathBuf>,
}

impl CompilationUnit {
    /// Creates a unit with no include directories or forced includes.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            include_dirs: Vec::new(),
            forced_includes: Vec::new(),
        }
    }
}

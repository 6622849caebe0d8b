//! Serde model of one compile-database entry.

use serde::Deserialize;
use std::path::PathBuf;

/// One entry of a `compile_commands.json` array.
///
/// cmake emits either a `command` string or an `arguments` array
/// depending on generator and version; both shapes are accepted.
/// Unknown fields (like `output`) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct CompileCommandEntry {
    /// The working directory of the compilation. Relative paths in
    /// `file` and in include flags are interpreted against it.
    pub directory: PathBuf,
    /// The source file being compiled.
    pub file: PathBuf,
    /// The full compiler invocation as a single shell-ish string.
    #[serde(default)]
    pub command: Option<String>,
    /// The compiler invocation as an argument vector.
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
}

impl CompileCommandEntry {
    /// Returns the compiler argument vector of this entry.
    ///
    /// Prefers the `arguments` array; falls back to whitespace-splitting
    /// the `command` string. Arguments containing quoted whitespace are
    /// not reassembled — include paths with spaces are only reliable in
    /// the `arguments` form.
    pub fn argv(&self) -> Vec<String> {
        if let Some(arguments) = &self.arguments {
            return arguments.clone();
        }
        match &self.command {
            Some(command) => command
                .split_whitespace()
                .map(|part| part.to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

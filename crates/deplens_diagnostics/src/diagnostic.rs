//! Structured diagnostic messages with severity, codes, and file locations.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A structured diagnostic message.
///
/// Diagnostics are the only channel for reporting recoverable problems
/// found during analysis. Each carries a severity, a unique code, a
/// message, and optionally the file (and line within it) the problem was
/// found in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the type of diagnostic.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// The file the problem was found in, if any.
    pub file: Option<PathBuf>,
    /// The 1-based line within `file`, if known.
    pub line: Option<u32>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given code and message.
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Creates a new warning diagnostic with the given code and message.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Creates a new note diagnostic with the given code and message.
    pub fn note(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Note, code, message)
    }

    fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            file: None,
            line: None,
        }
    }

    /// Attaches the file the problem was found in.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Attaches the 1-based line number within the file.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code;

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(code::INVALID_ENCODING, "file is not valid UTF-8");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "file is not valid UTF-8");
        assert_eq!(format!("{}", diag.code), "E103");
        assert!(diag.file.is_none());
    }

    #[test]
    fn create_warning_with_location() {
        let diag = Diagnostic::warning(code::MALFORMED_INCLUDE, "unterminated '<'")
            .with_file("/src/a.h")
            .with_line(12);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.file.as_deref(), Some(std::path::Path::new("/src/a.h")));
        assert_eq!(diag.line, Some(12));
    }

    #[test]
    fn create_note() {
        let diag = Diagnostic::note(code::IGNORED_PATH, "skipped by ignore pattern");
        assert_eq!(diag.severity, Severity::Note);
    }
}

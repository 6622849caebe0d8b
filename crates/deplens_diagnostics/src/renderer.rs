//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W101]: could not resolve include "missing.h"
///   --> /src/widget.cpp:42
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_style(&self, diag: &Diagnostic) -> (&'static str, &'static str) {
        if !self.color {
            return ("", "");
        }
        use crate::severity::Severity;
        let start = match diag.severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
            Severity::Note => "\x1b[1;36m",
        };
        (start, "\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let (style, reset) = self.severity_style(diag);
        let mut out = format!(
            "{style}{}[{}]{reset}: {}",
            diag.severity, diag.code, diag.message
        );

        if let Some(file) = &diag.file {
            out.push_str("\n  --> ");
            out.push_str(&file.display().to_string());
            if let Some(line) = diag.line {
                out.push_str(&format!(":{line}"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code;

    #[test]
    fn render_plain() {
        let renderer = TerminalRenderer::new(false);
        let diag = Diagnostic::warning(code::UNRESOLVED_INCLUDE, "could not resolve \"x.h\"");
        assert_eq!(
            renderer.render(&diag),
            "warning[W101]: could not resolve \"x.h\""
        );
    }

    #[test]
    fn render_with_location() {
        let renderer = TerminalRenderer::new(false);
        let diag = Diagnostic::warning(code::MALFORMED_INCLUDE, "unterminated '<'")
            .with_file("/src/a.h")
            .with_line(3);
        let text = renderer.render(&diag);
        assert!(text.contains("warning[W102]: unterminated '<'"));
        assert!(text.contains("--> /src/a.h:3"));
    }

    #[test]
    fn render_with_color() {
        let renderer = TerminalRenderer::new(true);
        let diag = Diagnostic::error(code::INVALID_ENCODING, "bad encoding");
        let text = renderer.render(&diag);
        assert!(text.contains("\x1b[1;31m"));
        assert!(text.contains("\x1b[0m"));
    }
}

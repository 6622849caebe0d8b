//! The per-file parse task: read, validate, extract includes.

use deplens_diagnostics::{code, Diagnostic, DiagnosticSink};
use deplens_lexer::{extract_includes, RawInclude};
use std::path::Path;

/// UTF-8 byte-order mark.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reads `path` and extracts its raw include specifications.
///
/// All failures are recoverable and yield an empty result:
/// - an unreadable file emits a warning,
/// - content that is not valid UTF-8 (after stripping a leading BOM)
///   emits an error diagnostic.
///
/// Either way the run continues; the file simply contributes no
/// dependencies.
pub fn parse_file(path: &Path, sink: &DiagnosticSink) -> Vec<RawInclude> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            sink.emit(
                Diagnostic::warning(code::UNREADABLE_FILE, format!("could not read file: {e}"))
                    .with_file(path),
            );
            return Vec::new();
        }
    };

    let content = bytes.strip_prefix(&BOM).unwrap_or(&bytes);
    let source = match std::str::from_utf8(content) {
        Ok(source) => source,
        Err(_) => {
            sink.emit(
                Diagnostic::error(
                    code::INVALID_ENCODING,
                    "file contains bytes that are not valid UTF-8",
                )
                .with_file(path),
            );
            return Vec::new();
        }
    };

    extract_includes(source, path, sink)
}

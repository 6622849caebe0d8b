//! Reading and decoding the compile database into compilation units.

use crate::command::scan_arguments;
use crate::entry::CompileCommandEntry;
use crate::error::CompileDbError;
use crate::unit::CompilationUnit;
use deplens_common::{join_clean, IgnoreSet};
use deplens_diagnostics::{code, Diagnostic, DiagnosticSink};
use std::path::Path;

/// Source-file extensions treated as compilation units.
///
/// Headers also appear in some databases (precompiled-header entries);
/// only translation units are analyzed as roots.
const UNIT_EXTENSIONS: [&str; 4] = ["c", "cc", "cpp", "cxx"];

/// Loads `compile_commands.json` and produces the compilation units to
/// analyze.
///
/// Entries whose file is not a C/C++ translation unit are skipped
/// silently; entries matching an ignore pattern are skipped with a note
/// diagnostic. Duplicate entries for the same source file are merged
/// into one unit (first entry's flags win), matching how a unit is
/// compiled once per database.
pub fn load_compile_db(
    db_path: &Path,
    ignore: &IgnoreSet,
    sink: &DiagnosticSink,
) -> Result<Vec<CompilationUnit>, CompileDbError> {
    let content = std::fs::read_to_string(db_path).map_err(|source| CompileDbError::Io {
        path: db_path.to_path_buf(),
        source,
    })?;

    let entries: Vec<CompileCommandEntry> =
        serde_json::from_str(&content).map_err(|e| CompileDbError::Parse {
            path: db_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(units_from_entries(&entries, ignore, sink))
}

/// Converts already-decoded entries into compilation units.
///
/// Split out of [`load_compile_db`] so tests can drive it without a
/// filesystem.
pub fn units_from_entries(
    entries: &[CompileCommandEntry],
    ignore: &IgnoreSet,
    sink: &DiagnosticSink,
) -> Vec<CompilationUnit> {
    let mut units: Vec<CompilationUnit> = Vec::new();

    for entry in entries {
        let unit_path = join_clean(&entry.directory, &entry.file);

        if !is_unit_extension(&unit_path) {
            continue;
        }
        if ignore.matches(&unit_path) {
            sink.emit(
                Diagnostic::note(code::IGNORED_PATH, "compilation unit skipped by ignore pattern")
                    .with_file(&unit_path),
            );
            continue;
        }
        if units.iter().any(|u| u.path == unit_path) {
            continue;
        }

        let scanned = scan_arguments(&entry.argv(), &entry.directory, ignore);
        units.push(CompilationUnit {
            path: unit_path,
            include_dirs: scanned.include_dirs,
            forced_includes: scanned.forced_includes,
        });
    }

    units
}

fn is_unit_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            UNIT_EXTENSIONS
                .iter()
                .any(|unit_ext| ext.eq_ignore_ascii_case(unit_ext))
        })
}

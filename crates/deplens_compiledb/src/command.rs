//! Compiler-argument scanning for include-relevant flags.

use deplens_common::{clean_path, join_clean, IgnoreSet};
use std::path::{Path, PathBuf};

/// The include-relevant parts of one compiler invocation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScannedCommand {
    /// Ordered include-search directories, absolute and cleaned.
    pub include_dirs: Vec<PathBuf>,
    /// Forced-include files (`-include`), absolute where they were
    /// written absolute, otherwise cleaned as given (they resolve
    /// against the search directories later).
    pub forced_includes: Vec<PathBuf>,
}

/// Scans a compiler argument vector for `-I`, `-isystem`, and `-include`.
///
/// Both the joined (`-Ifoo`) and separate (`-I foo`) spellings are
/// accepted for all three flags. Relative directories are interpreted
/// against `directory` (the compile-database working directory). Search
/// directories matching an ignore pattern are dropped before the
/// analysis ever sees them.
pub fn scan_arguments(argv: &[String], directory: &Path, ignore: &IgnoreSet) -> ScannedCommand {
    let mut scanned = ScannedCommand::default();

    let mut args = argv.iter().peekable();
    while let Some(arg) = args.next() {
        if let Some(value) = flag_value("-isystem", arg, &mut args) {
            push_include_dir(&mut scanned, directory, &value, ignore);
        } else if let Some(value) = flag_value("-include", arg, &mut args) {
            scanned.forced_includes.push(clean_path(Path::new(&value)));
        } else if let Some(value) = flag_value("-I", arg, &mut args) {
            push_include_dir(&mut scanned, directory, &value, ignore);
        }
    }
    scanned
}

/// Matches `arg` against a flag, consuming the following argument for
/// the separate spelling. Returns the flag's value if it matched.
fn flag_value<'a, I>(
    flag: &str,
    arg: &'a str,
    rest: &mut std::iter::Peekable<I>,
) -> Option<String>
where
    I: Iterator<Item = &'a String>,
{
    if arg == flag {
        return rest.next().cloned();
    }
    arg.strip_prefix(flag)
        .filter(|tail| !tail.is_empty())
        .map(|tail| tail.to_string())
}

fn push_include_dir(
    scanned: &mut ScannedCommand,
    directory: &Path,
    value: &str,
    ignore: &IgnoreSet,
) {
    let dir = join_clean(directory, Path::new(value));
    if !ignore.matches(&dir) {
        scanned.include_dirs.push(dir);
    }
}

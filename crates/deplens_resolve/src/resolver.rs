//! Search-path resolution of raw include specifications.

use crate::exists_cache::ExistsCache;
use deplens_common::{clean_path, join_clean};
use deplens_lexer::RawInclude;
use std::path::{Path, PathBuf};

/// Resolves a raw include specification to an absolute path.
///
/// If the raw text is already absolute, it is cleaned and accepted if a
/// file exists there. Otherwise the search directories are tried in
/// order and the first existing candidate wins. The order is a
/// correctness contract: it mirrors the include-directory precedence the
/// compiler uses, so when duplicate headers exist on the search path it
/// decides which physical file is "the" dependency.
///
/// Quoted and angle-bracket includes resolve identically: the build
/// description supplies every needed search directory explicitly, so no
/// includer-adjacent probe is performed.
///
/// Returns `None` if no search directory contains the file; the caller
/// logs a warning and omits the dependency.
pub fn resolve(
    raw: &RawInclude,
    search_dirs: &[PathBuf],
    exists: &mut ExistsCache,
) -> Option<PathBuf> {
    let raw_path = Path::new(&raw.text);

    if raw_path.is_absolute() {
        let candidate = clean_path(raw_path);
        return exists.exists(&candidate).then_some(candidate);
    }

    for dir in search_dirs {
        let candidate = join_clean(dir, raw_path);
        if exists.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

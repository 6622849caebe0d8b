//! Lexical path normalization.
//!
//! Include resolution concatenates search directories with raw include text
//! and must produce one canonical spelling per physical file, without
//! touching the filesystem (the candidate may not exist). `clean_path`
//! folds `.` and `..` components and collapses separators purely
//! lexically, mirroring what a compiler does with `-I` paths.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path lexically: removes `.` components, folds `..` into
/// the preceding component where possible, and canonicalizes separators.
///
/// Never touches the filesystem, so symlinks are not resolved and the
/// input does not need to exist. Leading `..` components on a relative
/// path are preserved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !has_root(&out) {
                    out.push("..");
                }
                // `..` above the root stays at the root.
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Joins `base` and `tail` and cleans the result.
///
/// If `tail` is already absolute it wins outright, matching `Path::join`.
pub fn join_clean(base: &Path, tail: &Path) -> PathBuf {
    clean_path(&base.join(tail))
}

fn has_root(path: &Path) -> bool {
    path.components()
        .next()
        .is_some_and(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
}

//! Shared utilities for the deplens dependency analyzer.
//!
//! Small, dependency-free helpers used across the workspace: lexical path
//! normalization matching compiler include-path semantics, and the
//! substring-based ignore-pattern filter applied to compilation units and
//! include directories.

pub mod ignore;
pub mod paths;

pub use ignore::IgnoreSet;
pub use paths::{clean_path, join_clean};

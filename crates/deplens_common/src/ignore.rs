//! Substring-based path ignore filter.

use std::path::Path;

/// A set of ignore patterns matched as plain substrings against the
/// string form of a cleaned path.
///
/// Matching paths are excluded from analysis before the parallel phase:
/// they become neither compilation units nor tracked include-search
/// directories. An empty set matches nothing.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    patterns: Vec<String>,
}

impl IgnoreSet {
    /// Creates an ignore set from the given patterns.
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Adds a pattern to the set.
    pub fn add(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
    }

    /// Returns `true` if the path matches any ignore pattern.
    pub fn matches(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.patterns.iter().any(|p| text.contains(p.as_str()))
    }

    /// Returns `true` if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

//! Diagnostic codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Error diagnostics, prefixed with `E`.
    Error,
    /// Warning diagnostics, prefixed with `W`.
    Warning,
    /// Informational diagnostics, prefixed with `N`.
    Note,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Note => 'N',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric
/// identifier, displayed as e.g. `E103` or `W101`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// An include specification that could not be resolved in any search directory.
pub const UNRESOLVED_INCLUDE: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 101,
};

/// A syntactically malformed `#include` directive.
pub const MALFORMED_INCLUDE: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 102,
};

/// A source or header file that could not be opened or read.
pub const UNREADABLE_FILE: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 103,
};

/// A forced-include file (`-include`) missing from every search directory.
pub const FORCED_INCLUDE_NOT_FOUND: DiagnosticCode = DiagnosticCode {
    category: Category::Warning,
    number: 104,
};

/// A file whose contents are not valid UTF-8.
pub const INVALID_ENCODING: DiagnosticCode = DiagnosticCode {
    category: Category::Error,
    number: 103,
};

/// A compilation unit or include directory skipped by an ignore pattern.
pub const IGNORED_PATH: DiagnosticCode = DiagnosticCode {
    category: Category::Note,
    number: 201,
};

/// Progress report after an analysis round (verbose runs only).
pub const ROUND_PROGRESS: DiagnosticCode = DiagnosticCode {
    category: Category::Note,
    number: 202,
};

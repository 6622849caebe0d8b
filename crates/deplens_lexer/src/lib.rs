//! Tokenizer and `#include` extractor for C/C++ source text.
//!
//! This is not a preprocessor: no macro expansion and no conditional
//! evaluation. The tokenizer produces just enough structure (line-aware
//! tokens with comments stripped) for the extractor to recognize
//! syntactic `#include` directives and pull out their raw, unresolved
//! include specifications.

pub mod extract;
pub mod lexer;
pub mod token;

pub use extract::{extract_includes, IncludeForm, RawInclude};
pub use lexer::tokenize;
pub use token::{Token, TokenKind};

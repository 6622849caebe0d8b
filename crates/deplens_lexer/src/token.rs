//! Token definitions for the include scanner.

/// The kind of a lexed token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    /// A `#` character.
    Hash,
    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident,
    /// A double-quoted string literal, including the quotes.
    Str,
    /// Any other single non-whitespace byte (operators, digits, brackets).
    Punct(u8),
    /// A line break. Logical line structure matters to the extractor, so
    /// newlines are real tokens rather than skipped trivia.
    Newline,
    /// End of input.
    Eof,
}

/// A token with its byte range in the source and its 1-based line number.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte offset of the first byte of the token.
    pub start: usize,
    /// Byte offset one past the last byte of the token.
    pub end: usize,
    /// 1-based line the token starts on.
    pub line: u32,
}

impl Token {
    /// Returns the source text covered by this token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

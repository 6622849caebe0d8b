//! Byte-level tokenizer for C/C++ source text.
//!
//! Converts source text into a flat token stream. Whitespace and comments
//! are skipped, but newlines are emitted as tokens (including newlines
//! inside block comments) so the extractor can see logical line
//! boundaries. The returned vector always ends with a
//! [`TokenKind::Eof`] token.

use crate::token::{Token, TokenKind};

/// Lexes the given source text into a vector of tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        source: source.as_bytes(),
        pos: 0,
        line: 1,
    };
    lexer.lex_all()
}

struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    line: u32,
}

impl Lexer<'_> {
    fn lex_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_blank();
            if self.pos >= self.source.len() {
                tokens.push(self.make(TokenKind::Eof, self.pos));
                break;
            }

            let start = self.pos;
            let b = self.peek();

            // Line comment: runs to (but not through) the newline.
            if b == b'/' && self.peek_at(1) == b'/' {
                while self.pos < self.source.len() && self.source[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }

            // Block comment: newlines inside still count as line breaks.
            if b == b'/' && self.peek_at(1) == b'*' {
                self.pos += 2;
                loop {
                    if self.pos >= self.source.len() {
                        break;
                    }
                    if self.peek() == b'*' && self.peek_at(1) == b'/' {
                        self.pos += 2;
                        break;
                    }
                    if self.peek() == b'\n' {
                        tokens.push(self.make(TokenKind::Newline, self.pos));
                        self.line += 1;
                    }
                    self.pos += 1;
                }
                continue;
            }

            if b == b'\n' {
                self.pos += 1;
                tokens.push(Token {
                    kind: TokenKind::Newline,
                    start,
                    end: self.pos,
                    line: self.line,
                });
                self.line += 1;
                continue;
            }

            if b == b'#' {
                self.pos += 1;
                tokens.push(self.make(TokenKind::Hash, start));
                continue;
            }

            if is_ident_start(b) {
                self.pos += 1;
                while self.pos < self.source.len() && is_ident_continue(self.peek()) {
                    self.pos += 1;
                }
                tokens.push(self.make(TokenKind::Ident, start));
                continue;
            }

            if b == b'"' {
                tokens.push(self.lex_string(start));
                continue;
            }

            self.pos += 1;
            tokens.push(self.make(TokenKind::Punct(b), start));
        }
        tokens
    }

    /// Consumes a string literal. An unterminated literal ends at the
    /// newline (which is left for the main loop to tokenize).
    fn lex_string(&mut self, start: usize) -> Token {
        self.pos += 1; // opening quote
        while self.pos < self.source.len() {
            match self.peek() {
                b'"' => {
                    self.pos += 1;
                    break;
                }
                b'\\' if self.pos + 1 < self.source.len() => {
                    self.pos += 2;
                }
                b'\n' => break,
                _ => self.pos += 1,
            }
        }
        self.make(TokenKind::Str, start)
    }

    fn skip_blank(&mut self) {
        while self.pos < self.source.len() {
            match self.peek() {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn peek(&self) -> u8 {
        self.source[self.pos]
    }

    fn peek_at(&self, offset: usize) -> u8 {
        let idx = self.pos + offset;
        if idx < self.source.len() {
            self.source[idx]
        } else {
            0
        }
    }

    fn make(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            end: self.pos,
            line: self.line,
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

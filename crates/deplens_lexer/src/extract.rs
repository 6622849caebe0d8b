//! Extraction of raw `#include` specifications from a token stream.

use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};
use deplens_diagnostics::{code, Diagnostic, DiagnosticSink};
use std::collections::HashSet;
use std::path::Path;

/// The syntactic form of an include directive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IncludeForm {
    /// `#include "file.h"`
    Quoted,
    /// `#include <file.h>`
    AngleBracket,
}

/// A raw, unresolved include specification: the literal text of the
/// directive together with its syntactic form.
///
/// Both forms resolve the same way (by search-directory order); the form
/// is kept because it is part of the directive's identity and useful in
/// diagnostics.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RawInclude {
    /// The literal text between the quotes or angle brackets.
    pub text: String,
    /// Whether the directive used quotes or angle brackets.
    pub form: IncludeForm,
}

impl RawInclude {
    /// Creates a quoted-form include specification.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            form: IncludeForm::Quoted,
        }
    }

    /// Creates an angle-bracket-form include specification.
    pub fn angled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            form: IncludeForm::AngleBracket,
        }
    }
}

/// Extracts all `#include` specifications from `source`.
///
/// `origin` names the file being scanned and is only used in diagnostics.
/// Malformed directives (an unterminated `<...>`, or something other than
/// a string or `<` after `#include`) produce a warning and the rest of
/// that line is skipped; extraction continues on the next line. The
/// result is deduplicated by raw include text, preserving first-seen
/// order.
pub fn extract_includes(source: &str, origin: &Path, sink: &DiagnosticSink) -> Vec<RawInclude> {
    let tokens = tokenize(source);
    let mut extractor = Extractor {
        source,
        origin,
        sink,
        tokens: &tokens,
        pos: 0,
        seen: HashSet::new(),
        found: Vec::new(),
    };
    extractor.run();
    extractor.found
}

struct Extractor<'a> {
    source: &'a str,
    origin: &'a Path,
    sink: &'a DiagnosticSink,
    tokens: &'a [Token],
    pos: usize,
    seen: HashSet<String>,
    found: Vec<RawInclude>,
}

impl Extractor<'_> {
    fn run(&mut self) {
        // A directive is only recognized when `#` is the first token on
        // its logical line.
        let mut at_line_start = true;
        while self.pos < self.tokens.len() {
            let token = self.tokens[self.pos];
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    at_line_start = true;
                    self.pos += 1;
                }
                TokenKind::Hash if at_line_start => {
                    self.pos += 1;
                    self.directive(token.line);
                    at_line_start = false;
                }
                _ => {
                    at_line_start = false;
                    self.skip_line();
                }
            }
        }
    }

    /// Handles the tokens after a line-leading `#`.
    fn directive(&mut self, line: u32) {
        let token = self.current();
        if token.kind != TokenKind::Ident || token.text(self.source) != "include" {
            // Some other preprocessor directive; not our business.
            self.skip_line();
            return;
        }
        self.pos += 1;

        let token = self.current();
        match token.kind {
            TokenKind::Str => {
                self.pos += 1;
                let text = strip_quotes(token.text(self.source));
                self.record(RawInclude::quoted(text));
            }
            TokenKind::Punct(b'<') => {
                self.pos += 1;
                self.angle_include(token, line);
            }
            _ => {
                self.malformed("cannot parse #include directive", line);
                self.skip_line();
            }
        }
    }

    /// Scans forward from a consumed `<` to the matching `>` on the same
    /// logical line. The raw include text is the exact source slice
    /// between the brackets.
    fn angle_include(&mut self, open: Token, line: u32) {
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::Punct(b'>') => {
                    self.pos += 1;
                    let text = &self.source[open.end..token.start];
                    self.record(RawInclude::angled(text));
                    return;
                }
                TokenKind::Newline | TokenKind::Eof => {
                    self.malformed("unterminated '<' in #include directive", line);
                    // Leave the newline for the main loop so the next
                    // line is scanned normally.
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn record(&mut self, include: RawInclude) {
        if self.seen.insert(include.text.clone()) {
            self.found.push(include);
        }
    }

    fn malformed(&self, message: &str, line: u32) {
        self.sink.emit(
            Diagnostic::warning(code::MALFORMED_INCLUDE, message)
                .with_file(self.origin)
                .with_line(line),
        );
    }

    fn skip_line(&mut self) {
        while self.pos < self.tokens.len() {
            match self.tokens[self.pos].kind {
                TokenKind::Newline | TokenKind::Eof => return,
                _ => self.pos += 1,
            }
        }
    }

    fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }
}

/// Strips the surrounding quotes from a string-literal token's text.
///
/// An unterminated literal has no closing quote to strip.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

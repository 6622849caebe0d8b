//! Diagnostics for the deplens dependency analyzer.
//!
//! All recoverable conditions encountered during analysis (unresolvable
//! includes, malformed directives, unreadable files) are reported as
//! structured [`Diagnostic`]s into a thread-safe [`DiagnosticSink`] shared
//! by every worker. Nothing recoverable unwinds across a task boundary;
//! the offending file simply contributes fewer dependencies.

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;

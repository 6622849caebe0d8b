//! The parallel dependency-resolution engine.
//!
//! For every compilation unit in the build description, computes the
//! complete transitive set of headers it includes, over an implicit,
//! lazily discovered, possibly cyclic graph of files. All units are
//! analyzed concurrently; a shared [`HeaderCache`] guarantees each header
//! is tokenized at most once for the whole run, and an explicit
//! round/barrier structure (rather than nested blocking waits) keeps the
//! worker pool deadlock-free.

pub mod collector;
pub mod driver;
pub mod header_cache;
pub mod parse;

pub use collector::DependencyCollector;
pub use driver::{analyze, analyze_with_stats, AnalysisStats, UnitDependencies};
pub use header_cache::{HeaderCache, HeaderRecord};

//! The round loop driving all collectors to convergence.

use crate::collector::DependencyCollector;
use crate::header_cache::{HeaderCache, HeaderRecord};
use crate::parse::parse_file;
use deplens_compiledb::CompilationUnit;
use deplens_diagnostics::{code, Diagnostic, DiagnosticSink};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// The final analysis result for one compilation unit.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UnitDependencies {
    /// Canonical path of the compilation unit.
    pub name: PathBuf,
    /// Every header transitively reachable through `#include`, sorted
    /// for deterministic output.
    pub dependencies: Vec<PathBuf>,
}

/// Counters describing how a run went, reported in verbose mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    /// Number of header files read and tokenized. Each distinct header
    /// is parsed at most once for the whole run, so this never exceeds
    /// the number of distinct reachable headers, no matter how many
    /// units include them.
    pub headers_parsed: usize,
    /// Number of expansion rounds until every collector converged.
    pub rounds: usize,
}

/// Computes the transitive header dependencies of every unit.
pub fn analyze(units: Vec<CompilationUnit>, sink: &DiagnosticSink) -> Vec<UnitDependencies> {
    analyze_with_stats(units, sink).0
}

/// Like [`analyze`], also returning run counters.
///
/// All collectors run concurrently on the current rayon pool, one task
/// per unit. Between rounds the driver parses the batch of headers that
/// collectors claimed this round — that gap is the round barrier: no
/// collector resumes until every outstanding parse has been published.
/// Each round either converges some collectors or strictly grows the
/// published-header set, which is bounded by the number of distinct
/// reachable headers, so the loop terminates.
pub fn analyze_with_stats(
    units: Vec<CompilationUnit>,
    sink: &DiagnosticSink,
) -> (Vec<UnitDependencies>, AnalysisStats) {
    let cache = HeaderCache::new();
    let total = units.len();
    let mut stats = AnalysisStats::default();

    let mut collectors: Vec<DependencyCollector> =
        units.into_iter().map(DependencyCollector::new).collect();

    // Seed phase: tokenize each unit's own source in parallel.
    collectors
        .par_iter_mut()
        .for_each(|collector| collector.seed(sink));

    loop {
        let to_parse: Vec<PathBuf> = collectors
            .par_iter_mut()
            .flat_map_iter(|collector| collector.run_round(&cache, sink))
            .collect();

        stats.rounds += 1;
        stats.headers_parsed += to_parse.len();

        // Round barrier: publish every header claimed this round before
        // any collector looks again.
        to_parse.par_iter().for_each(|path| {
            let includes = parse_file(path, sink);
            cache.publish(path.clone(), HeaderRecord::new(includes));
        });

        let remaining = collectors.iter().filter(|c| c.has_work_left()).count();
        if remaining == 0 {
            break;
        }
        sink.emit(Diagnostic::note(
            code::ROUND_PROGRESS,
            format!("collecting dependencies: {remaining} of {total} units still expanding"),
        ));
    }

    let mut results: Vec<UnitDependencies> = collectors
        .into_iter()
        .map(|collector| {
            let (name, resolved) = collector.into_result();
            let mut dependencies: Vec<PathBuf> = resolved.into_iter().collect();
            dependencies.sort();
            UnitDependencies { name, dependencies }
        })
        .collect();
    results.sort_by(|a, b| a.name.cmp(&b.name));
    (results, stats)
}

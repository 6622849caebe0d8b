//! The per-unit dependency collector: a round-based BFS over the
//! lazily discovered include graph.

use crate::header_cache::HeaderCache;
use crate::parse::parse_file;
use deplens_compiledb::CompilationUnit;
use deplens_diagnostics::{code, Diagnostic, DiagnosticSink};
use deplens_lexer::{IncludeForm, RawInclude};
use deplens_resolve::{resolve, ExistsCache};
use std::collections::HashSet;
use std::path::PathBuf;

/// Collects the transitive dependency set of one compilation unit.
///
/// Each collector owns its unit's state exclusively; nothing here is
/// shared between threads except the [`HeaderCache`] and the sink. The
/// collector advances in rounds: within a round it expands every
/// frontier path whose header record is already published, and defers
/// the rest to `leftover`. The driver parses the deferred headers
/// between rounds (the round barrier), then calls
/// [`run_round`](Self::run_round) again with the leftovers as the new
/// frontier. Convergence is reached when a round ends with nothing left
/// over.
///
/// `seen` makes the walk cycle-safe: a header that directly or
/// indirectly includes an ancestor finds that ancestor already seen and
/// does not re-expand it, so inclusion cycles yield a finite, fully
/// connected dependency set rather than an infinite loop.
pub struct DependencyCollector {
    unit: CompilationUnit,
    /// Confirmed absolute dependency paths. Grows monotonically.
    resolved: HashSet<PathBuf>,
    /// Every path ever placed on a frontier.
    seen: HashSet<PathBuf>,
    /// Paths to examine in the current round.
    frontier: Vec<PathBuf>,
    /// Paths whose record was not yet published this round.
    leftover: Vec<PathBuf>,
    /// Private existence memoization; never shared, never locked.
    exists: ExistsCache,
}

impl DependencyCollector {
    /// Creates a collector for `unit` with an empty state.
    pub fn new(unit: CompilationUnit) -> Self {
        Self {
            unit,
            resolved: HashSet::new(),
            seen: HashSet::new(),
            frontier: Vec::new(),
            leftover: Vec::new(),
            exists: ExistsCache::new(),
        }
    }

    /// Seeds the collector with the unit's direct includes.
    ///
    /// Tokenizes the unit's own source and resolves its includes, and
    /// resolves any `-include` files forced on the command line. An
    /// unreadable or invalid unit source is recoverable and seeds
    /// nothing.
    pub fn seed(&mut self, sink: &DiagnosticSink) {
        let forced: Vec<RawInclude> = self
            .unit
            .forced_includes
            .iter()
            .map(|path| RawInclude::quoted(path.to_string_lossy()))
            .collect();
        for raw in &forced {
            if let Some(path) = resolve(raw, &self.unit.include_dirs, &mut self.exists) {
                if let Some(new) = self.admit(path) {
                    self.frontier.push(new);
                }
            } else {
                sink.emit(
                    Diagnostic::warning(
                        code::FORCED_INCLUDE_NOT_FOUND,
                        format!(
                            "forced include '{}' not found in any include path",
                            raw.text
                        ),
                    )
                    .with_file(&self.unit.path),
                );
            }
        }

        let direct = parse_file(&self.unit.path, sink);
        for raw in &direct {
            if let Some(new) = self.resolve_and_admit(raw, sink) {
                self.frontier.push(new);
            }
        }
    }

    /// Runs one expansion round.
    ///
    /// Returns the paths this collector claimed for parsing: those it
    /// was the first in the whole run to request. The driver must parse
    /// and publish them before the next round.
    pub fn run_round(&mut self, cache: &HeaderCache, sink: &DiagnosticSink) -> Vec<PathBuf> {
        let mut stack = std::mem::take(&mut self.leftover);
        stack.extend(std::mem::take(&mut self.frontier));

        let mut to_parse = Vec::new();

        while let Some(path) = stack.pop() {
            match cache.lookup(&path) {
                Some(record) => {
                    for raw in &record.includes {
                        if let Some(next) = self.resolve_and_admit(raw, sink) {
                            stack.push(next);
                        }
                    }
                }
                None => {
                    if cache.try_schedule(&path) {
                        to_parse.push(path.clone());
                    }
                    self.leftover.push(path);
                }
            }
        }

        to_parse
    }

    /// Returns `true` while some frontier path is still waiting on an
    /// unpublished header record.
    pub fn has_work_left(&self) -> bool {
        !self.leftover.is_empty() || !self.frontier.is_empty()
    }

    /// The unit this collector works on.
    pub fn unit(&self) -> &CompilationUnit {
        &self.unit
    }

    /// Consumes the collector, yielding the unit path and its final
    /// transitive dependency set.
    pub fn into_result(self) -> (PathBuf, HashSet<PathBuf>) {
        (self.unit.path, self.resolved)
    }

    /// Resolves one raw include against this unit's search directories.
    ///
    /// A hit that is new to `resolved` is admitted to the frontier and
    /// returned; a miss emits a warning and is omitted from the result.
    fn resolve_and_admit(
        &mut self,
        raw: &RawInclude,
        sink: &DiagnosticSink,
    ) -> Option<PathBuf> {
        match resolve(raw, &self.unit.include_dirs, &mut self.exists) {
            Some(path) => self.admit(path),
            None => {
                let delimiters = match raw.form {
                    IncludeForm::Quoted => ('"', '"'),
                    IncludeForm::AngleBracket => ('<', '>'),
                };
                sink.emit(
                    Diagnostic::warning(
                        code::UNRESOLVED_INCLUDE,
                        format!(
                            "could not resolve include {}{}{} in any include path",
                            delimiters.0, raw.text, delimiters.1
                        ),
                    )
                    .with_file(&self.unit.path),
                );
                None
            }
        }
    }

    /// Records a resolved path; returns it if it was new (so the caller
    /// can push it on the frontier).
    fn admit(&mut self, path: PathBuf) -> Option<PathBuf> {
        if self.resolved.insert(path.clone()) && self.seen.insert(path.clone()) {
            Some(path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header_cache::HeaderRecord;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn unit_with_inc(dir: &Path, source: &str) -> CompilationUnit {
        let main = dir.join("main.cpp");
        touch(&main, source);
        let mut unit = CompilationUnit::new(main);
        unit.include_dirs.push(dir.join("inc"));
        unit
    }

    #[test]
    fn seed_resolves_direct_includes() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("inc/a.h"), "");
        let unit = unit_with_inc(dir.path(), "#include \"a.h\"\n");

        let sink = DiagnosticSink::new();
        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);

        assert!(collector.has_work_left());
        let (_, resolved) = {
            // Frontier holds the unexpanded a.h; the resolved set
            // already contains it.
            let cache = HeaderCache::new();
            cache.publish(dir.path().join("inc/a.h"), HeaderRecord::empty());
            collector.run_round(&cache, &sink);
            assert!(!collector.has_work_left());
            collector.into_result()
        };
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains(&dir.path().join("inc/a.h")));
    }

    #[test]
    fn unpublished_header_goes_to_leftover_and_is_claimed_once() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("inc/a.h"), "");
        let unit = unit_with_inc(dir.path(), "#include \"a.h\"\n");

        let sink = DiagnosticSink::new();
        let cache = HeaderCache::new();
        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);

        let to_parse = collector.run_round(&cache, &sink);
        assert_eq!(to_parse, vec![dir.path().join("inc/a.h")]);
        assert!(collector.has_work_left());

        // Re-running before publication claims nothing new but keeps
        // waiting.
        let to_parse = collector.run_round(&cache, &sink);
        assert!(to_parse.is_empty());
        assert!(collector.has_work_left());

        cache.publish(dir.path().join("inc/a.h"), HeaderRecord::empty());
        let to_parse = collector.run_round(&cache, &sink);
        assert!(to_parse.is_empty());
        assert!(!collector.has_work_left());
    }

    #[test]
    fn include_cycle_terminates_with_both_headers_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("inc/a.h");
        let b = dir.path().join("inc/b.h");
        touch(&a, "#include \"b.h\"\n");
        touch(&b, "#include \"a.h\"\n");
        let unit = unit_with_inc(dir.path(), "#include \"a.h\"\n");

        let sink = DiagnosticSink::new();
        let cache = HeaderCache::new();
        cache.publish(a.clone(), HeaderRecord::new(vec![RawInclude::quoted("b.h")]));
        cache.publish(b.clone(), HeaderRecord::new(vec![RawInclude::quoted("a.h")]));

        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);
        let to_parse = collector.run_round(&cache, &sink);

        assert!(to_parse.is_empty());
        assert!(!collector.has_work_left());
        let (_, resolved) = collector.into_result();
        assert_eq!(resolved, HashSet::from([a, b]));
    }

    #[test]
    fn unresolved_include_warns_and_is_omitted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("inc")).unwrap();
        let unit = unit_with_inc(dir.path(), "#include \"missing.h\"\n");

        let sink = DiagnosticSink::new();
        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);

        assert!(!collector.has_work_left());
        assert_eq!(sink.warning_count(), 1);
        let diag = &sink.diagnostics()[0];
        assert!(diag.message.contains("\"missing.h\""));
        let (_, resolved) = collector.into_result();
        assert!(resolved.is_empty());
    }

    #[test]
    fn forced_include_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("inc/pch.h"), "");
        let mut unit = unit_with_inc(dir.path(), "int main() { return 0; }\n");
        unit.forced_includes.push(PathBuf::from("pch.h"));

        let sink = DiagnosticSink::new();
        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);

        let cache = HeaderCache::new();
        cache.publish(dir.path().join("inc/pch.h"), HeaderRecord::empty());
        collector.run_round(&cache, &sink);

        let (_, resolved) = collector.into_result();
        assert!(resolved.contains(&dir.path().join("inc/pch.h")));
    }

    #[test]
    fn missing_forced_include_warns() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("inc")).unwrap();
        let mut unit = unit_with_inc(dir.path(), "");
        unit.forced_includes.push(PathBuf::from("gone.h"));

        let sink = DiagnosticSink::new();
        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);

        assert_eq!(sink.warning_count(), 1);
        assert!(sink.diagnostics()[0].message.contains("gone.h"));
    }

    #[test]
    fn converged_collector_round_is_a_fixpoint() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("inc/a.h"), "");
        let unit = unit_with_inc(dir.path(), "#include \"a.h\"\n");

        let sink = DiagnosticSink::new();
        let cache = HeaderCache::new();
        cache.publish(dir.path().join("inc/a.h"), HeaderRecord::empty());

        let mut collector = DependencyCollector::new(unit);
        collector.seed(&sink);
        collector.run_round(&cache, &sink);
        assert!(!collector.has_work_left());

        // Re-running a converged collector discovers nothing new.
        let to_parse = collector.run_round(&cache, &sink);
        assert!(to_parse.is_empty());
        assert!(!collector.has_work_left());
        let (_, resolved) = collector.into_result();
        assert_eq!(resolved.len(), 1);
    }
}

//! End-to-end analysis scenarios exercising the parallel round loop.

use deplens_compiledb::CompilationUnit;
use deplens_diagnostics::DiagnosticSink;
use deplens_engine::{analyze, analyze_with_stats};
use std::fs;
use std::path::{Path, PathBuf};

fn touch(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn unit(path: &Path, inc: &Path) -> CompilationUnit {
    let mut unit = CompilationUnit::new(path);
    unit.include_dirs.push(inc.to_path_buf());
    unit
}

/// A header included by many units is read and tokenized exactly once
/// for the whole run, regardless of thread count.
#[test]
fn shared_headers_are_parsed_at_most_once() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("inc");

    touch(&inc.join("shared.h"), "#include \"level1.h\"\n");
    touch(&inc.join("level1.h"), "#include \"level2.h\"\n");
    touch(&inc.join("level2.h"), "");

    let mut units = Vec::new();
    for i in 0..16 {
        let source = dir.path().join(format!("unit{i}.cpp"));
        touch(&source, "#include \"shared.h\"\n");
        units.push(unit(&source, &inc));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(8)
        .build()
        .unwrap();

    let sink = DiagnosticSink::new();
    let (results, stats) = pool.install(|| analyze_with_stats(units, &sink));

    assert_eq!(results.len(), 16);
    for result in &results {
        assert_eq!(
            result.dependencies,
            vec![
                inc.join("level1.h"),
                inc.join("level2.h"),
                inc.join("shared.h")
            ]
        );
    }
    // 3 distinct headers, 16 units: still exactly 3 parses.
    assert_eq!(stats.headers_parsed, 3);
    assert!(!sink.has_errors());
}

/// A mutual include cycle across two headers converges to the full
/// finite set; bounded by the test harness timeout rather than looping.
#[test]
fn include_cycle_across_units_terminates() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("inc");
    touch(&inc.join("a.h"), "#include \"b.h\"\n");
    touch(&inc.join("b.h"), "#include \"a.h\"\n");

    let main_a = dir.path().join("uses_a.cpp");
    let main_b = dir.path().join("uses_b.cpp");
    touch(&main_a, "#include \"a.h\"\n");
    touch(&main_b, "#include \"b.h\"\n");

    let sink = DiagnosticSink::new();
    let results = analyze(vec![unit(&main_a, &inc), unit(&main_b, &inc)], &sink);

    for result in &results {
        assert_eq!(result.dependencies, vec![inc.join("a.h"), inc.join("b.h")]);
    }
}

/// The documented end-to-end scenario: a two-level chain whose deepest
/// header has one unresolvable angle include.
#[test]
fn chain_with_unresolved_tail() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("inc");
    let main = dir.path().join("main.cpp");
    touch(&main, "#include \"a.h\"\n");
    touch(&inc.join("a.h"), "#include \"b.h\"\n");
    touch(&inc.join("b.h"), "#include <missing>\n");

    let sink = DiagnosticSink::new();
    let results = analyze(vec![unit(&main, &inc)], &sink);

    assert_eq!(results[0].dependencies, vec![inc.join("a.h"), inc.join("b.h")]);
    assert_eq!(sink.warning_count(), 1);
    assert!(!sink.has_errors());
}

/// Malformed directives are skipped without losing the rest of the file.
#[test]
fn malformed_include_recovery_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("inc");
    touch(&inc.join("ok.h"), "");
    let main = dir.path().join("main.cpp");
    touch(&main, "#include <unterminated\n#include \"ok.h\"\n");

    let sink = DiagnosticSink::new();
    let results = analyze(vec![unit(&main, &inc)], &sink);

    assert_eq!(results[0].dependencies, vec![inc.join("ok.h")]);
    assert_eq!(sink.warning_count(), 1);
}

/// Deep chains take several rounds; every level still lands in the set.
#[test]
fn deep_chain_converges_over_multiple_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let inc = dir.path().join("inc");
    let depth = 20;
    for i in 0..depth {
        let content = if i + 1 < depth {
            format!("#include \"h{}.h\"\n", i + 1)
        } else {
            String::new()
        };
        touch(&inc.join(format!("h{i}.h")), &content);
    }
    let main = dir.path().join("main.cpp");
    touch(&main, "#include \"h0.h\"\n");

    let sink = DiagnosticSink::new();
    let (results, stats) = analyze_with_stats(vec![unit(&main, &inc)], &sink);

    assert_eq!(results[0].dependencies.len(), depth);
    assert_eq!(stats.headers_parsed, depth);
    assert!(stats.rounds >= 2);
}

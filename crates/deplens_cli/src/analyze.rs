//! The end-to-end pipeline behind the `deplens` binary.
//!
//! Load the compile database, run the parallel dependency analysis on a
//! sized rayon pool, write the JSON report, then print the accumulated
//! diagnostics. Recoverable per-file problems become diagnostics and a
//! nonzero exit status; only setup failures (bad config, unreadable
//! database, unwritable report) abort the run.

use crate::report::write_report;
use crate::{Cli, ColorChoice};
use deplens_common::IgnoreSet;
use deplens_compiledb::load_compile_db;
use deplens_config::{load_config, AnalysisConfig};
use deplens_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use deplens_engine::analyze_with_stats;
use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

/// Effective settings after layering the command line over the
/// configuration file. Command-line values always win.
#[derive(Debug)]
struct Settings {
    ignore: IgnoreSet,
    output: PathBuf,
    jobs: Option<usize>,
}

fn merge_settings(cli: &Cli, file: AnalysisConfig) -> Result<Settings, String> {
    let mut ignore = IgnoreSet::new(file.ignore);
    for pattern in &cli.ignore_pattern {
        ignore.add(pattern.clone());
    }

    let output = cli
        .output
        .clone()
        .or(file.output)
        .ok_or("no report path given; pass --output or set analysis.output in deplens.toml")?;

    let jobs = cli.jobs.or(file.jobs);
    if jobs == Some(0) {
        return Err("--jobs must be at least 1".to_string());
    }

    Ok(Settings {
        ignore,
        output,
        jobs,
    })
}

fn load_file_config(cli: &Cli) -> Result<AnalysisConfig, Box<dyn Error>> {
    let (path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => {
            let sibling = cli
                .compile_commands
                .parent()
                .map(|dir| dir.join("deplens.toml"))
                .unwrap_or_else(|| PathBuf::from("deplens.toml"));
            (sibling, false)
        }
    };

    match load_config(&path)? {
        Some(config) => Ok(config.analysis),
        None if explicit => {
            Err(format!("configuration file not found: {}", path.display()).into())
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    }
}

/// Runs the full analysis pipeline and returns the process exit code.
pub fn run(cli: &Cli) -> Result<i32, Box<dyn Error>> {
    let settings = merge_settings(cli, load_file_config(cli)?)?;
    let sink = DiagnosticSink::new();

    let started = Instant::now();
    let units = load_compile_db(&cli.compile_commands, &settings.ignore, &sink)?;
    let load_elapsed = started.elapsed();

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = settings.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build()?;

    let started = Instant::now();
    let unit_count = units.len();
    let (results, stats) = pool.install(|| analyze_with_stats(units, &sink));
    let analyze_elapsed = started.elapsed();

    let started = Instant::now();
    write_report(&settings.output, &results)?;
    let write_elapsed = started.elapsed();

    let threshold = if cli.quiet {
        Severity::Error
    } else if cli.verbose {
        Severity::Note
    } else {
        Severity::Warning
    };
    let renderer = TerminalRenderer::new(use_color(cli.color));
    for diag in sink.diagnostics() {
        if diag.severity >= threshold {
            eprintln!("{}", renderer.render(&diag));
        }
    }

    if cli.verbose {
        eprintln!(
            "analyzed {unit_count} units: {} headers parsed in {} rounds",
            stats.headers_parsed, stats.rounds
        );
        eprintln!(
            "load {:.1?}, analyze {:.1?}, write {:.1?}",
            load_elapsed, analyze_elapsed, write_elapsed
        );
    }
    if !cli.quiet {
        eprintln!(
            "wrote {} ({} units, {} warnings, {} errors)",
            settings.output.display(),
            results.len(),
            sink.warning_count(),
            sink.error_count()
        );
    }

    Ok(if sink.has_errors() { 1 } else { 0 })
}

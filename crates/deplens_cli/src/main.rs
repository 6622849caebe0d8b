//! deplens — transitive `#include` dependency analysis for C/C++ builds.
//!
//! Reads a cmake-generated `compile_commands.json`, computes the full
//! transitive header dependency set of every compilation unit in
//! parallel, and writes the result as a JSON report. Build tooling uses
//! the report to detect stale dependency graphs and over-inclusion.

#![warn(missing_docs)]

mod analyze;
mod report;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

/// deplens — include-dependency analysis for C/C++ build descriptions.
#[derive(Parser, Debug)]
#[command(name = "deplens", version, about = "C/C++ include dependency analyzer")]
pub struct Cli {
    /// Path to the `compile_commands.json` to analyze.
    pub compile_commands: PathBuf,

    /// Path of the JSON report to write.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore all source files and include directories containing this
    /// substring. May be given multiple times.
    #[arg(short = 'i', long = "ignore-pattern")]
    pub ignore_pattern: Vec<String>,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output (notes, per-phase timings, run counters).
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads. Defaults to the available CPU cores.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Path to a `deplens.toml` configuration file. Defaults to the one
    /// next to the compile database, if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Control colored diagnostic output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

fn main() {
    let cli = Cli::parse();

    match analyze::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

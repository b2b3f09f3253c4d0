//! Command-line interface definitions.
//!
//! Defines the argument parser and subcommands using clap's derive API.
//! `convert` runs the rewrite pipeline over discovered build files (or over
//! stdin when no path is given); `scan` lists what a conversion run would
//! touch without converting anything.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert Gradle Groovy-DSL build files to the Kotlin DSL.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert build files, writing each result next to its input as `.kts`.
    Convert {
        /// File or directory to convert. A directory resolves to the
        /// `build.gradle` inside it. With no path, reads Groovy from stdin
        /// and writes Kotlin to stdout.
        path: Option<PathBuf>,

        /// Recurse from the directory, converting every `build.gradle` below it.
        #[arg(short, long)]
        recursive: bool,

        /// Delete each input file after its conversion is written.
        #[arg(long)]
        delete_input: bool,

        /// Glob patterns for directories/files to exclude (e.g., "vendor", "*.bak").
        /// By default, entries starting with `.` or `_` are excluded.
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Disable default exclusion of `.` and `_` prefixed entries.
        #[arg(long)]
        no_default_excludes: bool,

        /// Interactively confirm each file before converting it.
        #[arg(short, long)]
        interactive: bool,

        /// Emit the run summary as JSON instead of human-readable output.
        #[arg(long)]
        json: bool,

        /// Print additional diagnostics to stderr.
        #[arg(short, long)]
        verbose: bool,
    },

    /// List files that would be converted without processing them.
    Scan {
        /// File or directory to inspect. Defaults to current directory.
        path: Option<PathBuf>,

        /// Recurse from the directory instead of expecting a single `build.gradle`.
        #[arg(short, long)]
        recursive: bool,

        /// Glob patterns for directories/files to exclude.
        /// By default, entries starting with `.` or `_` are excluded.
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Disable default exclusion of `.` and `_` prefixed entries.
        #[arg(long)]
        no_default_excludes: bool,
    },
}

//! Run reporting.
//!
//! Per-file outcomes accumulate into a [`Summary`] that either prints in the
//! colored human format or serializes to JSON wholesale.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one discovered file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub non_literal_version: bool,
    pub deleted_input: bool,
    pub skipped: bool,
}

impl FileOutcome {
    pub fn converted(
        input: PathBuf,
        output: PathBuf,
        non_literal_version: bool,
        deleted_input: bool,
    ) -> Self {
        Self {
            input,
            output: Some(output),
            non_literal_version,
            deleted_input,
            skipped: false,
        }
    }

    pub fn skipped(input: PathBuf) -> Self {
        Self {
            input,
            output: None,
            non_literal_version: false,
            deleted_input: false,
            skipped: true,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    /// True when any file in the run set an SDK version from a variable.
    pub non_literal_version: bool,
    pub files: Vec<FileOutcome>,
}

impl Summary {
    pub fn record(&mut self, outcome: FileOutcome) {
        if outcome.skipped {
            self.skipped += 1;
        } else {
            self.converted += 1;
        }
        self.non_literal_version |= outcome.non_literal_version;
        self.files.push(outcome);
    }
}

pub fn print_converted(input: &Path, output: &Path) {
    println!(
        "{} converted {} to {}",
        "ok:".green().bold(),
        input.display(),
        output.display()
    );
}

pub fn print_skipped(input: &Path) {
    println!("{} skipped {}", "info:".blue().bold(), input.display());
}

pub fn print_overwrite_warning(path: &Path) {
    eprintln!(
        "{} {} already ends in .kts and will be overwritten in place",
        "warn:".yellow().bold(),
        path.display()
    );
}

pub fn print_summary(summary: &Summary) {
    println!(
        "{} {} file(s) converted, {} skipped",
        "info:".blue().bold(),
        summary.converted,
        summary.skipped
    );
}

/// End-of-run advisories. The ext-variable warning only appears when a file
/// raised the non-literal flag; the flavor hint prints every run because the
/// rewrite rules cannot see custom configurations at all.
pub fn print_hints(non_literal_version: bool) {
    if non_literal_version {
        eprintln!(
            "{} an SDK version (compileSdkVersion, minSdkVersion or targetSdkVersion) \
             is set from a Groovy variable; Kotlin build scripts cannot read ext \
             variables, so move shared versions into buildSrc: \
             https://docs.gradle.org/current/userguide/organizing_gradle_projects.html#sec:build_sources",
            "warn:".yellow().bold()
        );
    }
    eprintln!(
        "{} configurations from custom flavors, such as prodImplementation, are \
         not rewritten; quote them by hand after reviewing the output",
        "hint:".cyan().bold()
    );
}

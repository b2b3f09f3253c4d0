//! gradle2kts: Convert Gradle Groovy-DSL build files to the Kotlin DSL.
//!
//! This tool discovers `build.gradle` files, runs them through an ordered
//! catalog of rewrite rules, and writes the results next to the inputs as
//! `.kts` files. Without a path it converts stdin to stdout, which makes it
//! usable as a filter.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use gradle2kts::cli::{Args, Commands};
use gradle2kts::report::{self, FileOutcome, Summary};
use gradle2kts::{pipeline, scanner, writer};
use std::io::Read;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Convert {
            path,
            recursive,
            delete_input,
            exclude,
            no_default_excludes,
            interactive,
            json,
            verbose,
        } => cmd_convert(
            path,
            recursive,
            delete_input,
            &exclude,
            no_default_excludes,
            interactive,
            json,
            verbose,
        ),
        Commands::Scan {
            path,
            recursive,
            exclude,
            no_default_excludes,
        } => cmd_scan(path, recursive, &exclude, no_default_excludes),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_convert(
    path: Option<PathBuf>,
    recursive: bool,
    delete_input: bool,
    exclude: &[String],
    no_default_excludes: bool,
    interactive: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let Some(path) = path else {
        return convert_stdin();
    };

    let files = scanner::collect_build_files(&path, recursive, exclude, !no_default_excludes)?;
    if verbose {
        eprintln!(
            "{} found {} build file(s) under {}",
            "info:".blue().bold(),
            files.len(),
            path.display()
        );
    }

    let mut summary = Summary::default();
    for file in &files {
        if interactive {
            let proceed = Confirm::new()
                .with_prompt(format!("Convert {}?", file.display()))
                .default(true)
                .interact()?;
            if !proceed {
                if !json {
                    report::print_skipped(file);
                }
                summary.record(FileOutcome::skipped(file.clone()));
                continue;
            }
        }
        summary.record(convert_file(file, delete_input, json)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report::print_summary(&summary);
        report::print_hints(summary.non_literal_version);
    }
    Ok(())
}

fn convert_file(file: &Path, delete_input: bool, json: bool) -> Result<FileOutcome> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let conversion = pipeline::convert(&source);

    if writer::is_kts(file) {
        report::print_overwrite_warning(file);
    }
    let output = writer::write_converted(file, &conversion.text)?;

    // Overwriting in place makes input and output the same file; deleting
    // it would throw away the result.
    let mut deleted = false;
    if delete_input && output != *file {
        writer::delete_input(file)?;
        deleted = true;
    }

    if !json {
        report::print_converted(file, &output);
    }
    Ok(FileOutcome::converted(
        file.to_path_buf(),
        output,
        conversion.non_literal_version,
        deleted,
    ))
}

/// Filter mode: Groovy in on stdin, Kotlin out on stdout. Advisories go to
/// stderr so the output stays pipeable.
fn convert_stdin() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let conversion = pipeline::convert(&input);
    print!("{}", conversion.text);
    report::print_hints(conversion.non_literal_version);
    Ok(())
}

fn cmd_scan(
    path: Option<PathBuf>,
    recursive: bool,
    exclude: &[String],
    no_default_excludes: bool,
) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    let files = scanner::collect_build_files(&root, recursive, exclude, !no_default_excludes)?;
    println!(
        "{} would convert {} file(s):",
        "info:".blue().bold(),
        files.len()
    );
    for file in &files {
        println!("  {}", file.display());
    }
    Ok(())
}

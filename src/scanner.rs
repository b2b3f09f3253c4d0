//! Build-file discovery.
//!
//! A conversion target is either a single file, a directory (expanded to the
//! `build.gradle` directly inside it), or, in recursive mode, every
//! `build.gradle` under a root. Recursive walks skip entries whose names
//! start with `.` or `_` unless default excludes are disabled, plus any
//! user-supplied glob patterns.

use anyhow::{Context, Result, bail};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves the files a conversion run will process.
///
/// A plain file is taken as-is, whatever its name. A directory without
/// `recursive` must contain a `build.gradle`. Recursive discovery returns
/// paths in sorted order so runs are deterministic.
pub fn collect_build_files(
    root: &Path,
    recursive: bool,
    excludes: &[String],
    default_excludes: bool,
) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        bail!("no file or directory at {}", root.display());
    }

    if !recursive {
        let candidate = root.join("build.gradle");
        if !candidate.is_file() {
            bail!("no build.gradle inside {}", root.display());
        }
        return Ok(vec![candidate]);
    }

    let patterns = compile_excludes(excludes)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|entry| {
        // The walk root itself may be `.` or `_`-prefixed; only children
        // are subject to exclusion.
        if entry.depth() == 0 {
            return true;
        }
        if default_excludes && is_hidden_or_underscore(entry) {
            return false;
        }
        !matches_exclude(entry, &patterns)
    }) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == "build.gradle" {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn compile_excludes(excludes: &[String]) -> Result<Vec<Pattern>> {
    excludes
        .iter()
        .map(|raw| {
            Pattern::new(raw).with_context(|| format!("invalid exclude pattern '{raw}'"))
        })
        .collect()
}

fn is_hidden_or_underscore(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || name.starts_with('_'))
}

fn matches_exclude(entry: &walkdir::DirEntry, patterns: &[Pattern]) -> bool {
    let name = entry.file_name().to_str().unwrap_or_default();
    patterns
        .iter()
        .any(|pattern| pattern.matches(name) || pattern.matches_path(entry.path()))
}

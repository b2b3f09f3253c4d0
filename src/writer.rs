//! Converted-output persistence.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a conversion of `input` lands: the sibling path with `.kts`
/// appended, so `build.gradle` becomes `build.gradle.kts`. An input that
/// already ends in `.kts` maps to itself and is overwritten in place.
pub fn output_path(input: &Path) -> PathBuf {
    if is_kts(input) {
        input.to_path_buf()
    } else {
        let mut name = input.as_os_str().to_os_string();
        name.push(".kts");
        PathBuf::from(name)
    }
}

pub fn is_kts(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "kts")
}

/// Writes the converted text next to its input and returns the output path.
pub fn write_converted(input: &Path, text: &str) -> Result<PathBuf> {
    let target = output_path(input);
    fs::write(&target, text).with_context(|| format!("failed to write {}", target.display()))?;
    Ok(target)
}

pub fn delete_input(input: &Path) -> Result<()> {
    fs::remove_file(input).with_context(|| format!("failed to delete {}", input.display()))
}

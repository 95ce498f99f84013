//! Seed file loading
//!
//! A seed file lists one song title per line. Blank lines and lines starting
//! with `#` are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read song titles from a seed file
pub fn load_titles(path: &Path) -> Result<Vec<String>> {
    let expanded = expand_path(path);
    let contents = fs::read_to_string(&expanded)
        .with_context(|| format!("Failed to read seed file: {:?}", expanded))?;

    let titles = parse_titles(&contents);
    log::debug!("Parsed {} titles from {:?}", titles.len(), expanded);
    Ok(titles)
}

/// Extract titles from seed file contents
pub fn parse_titles(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Expand a leading `~` to the home directory
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

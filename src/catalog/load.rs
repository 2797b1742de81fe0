use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::record::ProblemRecord;

pub fn load_catalog(path: &Path) -> Result<Vec<ProblemRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog feed {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("failed to parse catalog feed {}", path.display()))
}

pub(super) fn parse_catalog(raw: &str) -> Result<Vec<ProblemRecord>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in catalog feed")?;
    let entries = parsed
        .as_array()
        .ok_or_else(|| anyhow!("catalog feed must be a JSON array of problems"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            ProblemRecord::deserialize(entry)
                .with_context(|| format!("invalid problem record at position {index}"))
        })
        .collect()
}

/// Relative solution paths are looked up next to the catalog file.
pub fn resolve_solution_path(catalog_path: &Path, solution_file: &str) -> PathBuf {
    let solution = Path::new(solution_file);
    if solution.is_absolute() {
        return solution.to_path_buf();
    }

    catalog_path
        .parent()
        .map(|dir| dir.join(solution))
        .unwrap_or_else(|| solution.to_path_buf())
}

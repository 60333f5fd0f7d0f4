// Output formatting — terminal display and the JSON report.

pub mod terminal;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::ranking::CategoryRanking;

/// Write the full ranking report as pretty-printed JSON.
pub fn write_json_report(path: &Path, rankings: &[CategoryRanking]) -> Result<()> {
    let json = serde_json::to_string_pretty(rankings)?;
    fs::write(path, json).with_context(|| format!("writing JSON report {}", path.display()))?;
    Ok(())
}

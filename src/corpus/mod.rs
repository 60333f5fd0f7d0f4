// Corpus loading and term counting.
//
// One tokenized file = one category. The counting pass reads every
// category file once and produces the frequency tables in
// [`counts::CorpusCounts`]. Any unreadable or non-UTF-8 file aborts the
// whole run: skipping a category silently would corrupt the global
// totals every other category is scored against.

pub mod counts;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::info;

use self::counts::CorpusCounts;

/// Find the tokenized category files directly under `dir` (no recursion),
/// sorted by name so discovery order is reproducible.
pub fn discover(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading corpus directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading corpus directory {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort_unstable();
    Ok(files)
}

/// Count every category file into a single accumulator.
///
/// The per-category scans are independent, so they run in parallel and
/// merge partition-then-merge. Merging is commutative; the result is
/// identical to a sequential pass.
pub fn count_files(paths: &[PathBuf]) -> Result<CorpusCounts> {
    let progress = ProgressBar::new(paths.len() as u64);

    let counts = paths
        .par_iter()
        .map(|path| {
            let counts = count_file(path);
            progress.inc(1);
            counts
        })
        .try_reduce(CorpusCounts::default, |mut acc, partial| {
            acc.merge(partial);
            Ok(acc)
        });
    progress.finish_and_clear();

    let counts = counts?;
    info!(
        categories = counts.categories().len(),
        distinct_terms = counts.distinct_terms(),
        corpus_total = counts.corpus_total(),
        "Counted corpus"
    );
    Ok(counts)
}

/// Count one category file.
///
/// Tokens are whitespace-separated; empty lines and runs of whitespace
/// contribute nothing. The file must be valid UTF-8; malformed input is
/// an error, never silently replaced.
pub fn count_file(path: &Path) -> Result<CorpusCounts> {
    let category = category_name(path);
    let bytes =
        fs::read(path).with_context(|| format!("reading category file {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => bail!("category file {} is not valid UTF-8", path.display()),
    };

    let mut counts = CorpusCounts::default();
    counts.ensure_category(&category);
    for line in text.lines() {
        for token in line.split_whitespace() {
            counts.add(&category, token, 1);
        }
    }
    Ok(counts)
}

/// The category identifier for a tokenized file: its file name without
/// the tokenized extension (`politics.seg` -> `politics`).
pub fn category_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_strips_extension() {
        assert_eq!(category_name(Path::new("/corpus/politics.seg")), "politics");
        assert_eq!(category_name(Path::new("sports.txt.seg")), "sports.txt");
    }
}

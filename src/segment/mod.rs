// Segment stage — tokenize raw corpus files into token files.
//
// A thin wrapper around a Segmenter backend: every raw file in the
// corpus directory becomes `<name>.<ext>` beside it, one line of
// space-joined tokens per input line. The rank stage only ever sees
// these token files, so any tokenizer producing whitespace-separated
// output can stand in.

pub mod traits;
pub mod unicode;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use indicatif::ProgressBar;
use tracing::info;

pub use self::traits::Segmenter;
pub use self::unicode::UnicodeSegmenter;

/// Tokenize every raw file directly under `dir`, writing `<name>.<ext>`
/// next to each. Returns how many files were segmented.
///
/// Files already carrying the tokenized extension are skipped (they are
/// outputs, not inputs), as are hidden files. Output files from a
/// previous run are overwritten.
pub fn segment_corpus(dir: &Path, ext: &str, segmenter: &dyn Segmenter) -> Result<usize> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading corpus directory {}", dir.display()))?;

    let mut raw = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading corpus directory {}", dir.display()))?;
        let path = entry.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        let tokenized = path.extension().is_some_and(|e| e == ext);
        if path.is_file() && !hidden && !tokenized {
            raw.push(path);
        }
    }
    raw.sort_unstable();

    let progress = ProgressBar::new(raw.len() as u64);
    for path in &raw {
        segment_file(path, ext, segmenter)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(files = raw.len(), ext, "Segmentation complete");
    Ok(raw.len())
}

/// Tokenize one raw file into `<file name>.<ext>`.
///
/// Line structure is preserved: line N of the output holds the tokens of
/// line N of the input, space-joined, and an input line with no tokens
/// stays an empty line. Raw files must be valid UTF-8.
pub fn segment_file(path: &Path, ext: &str, segmenter: &dyn Segmenter) -> Result<PathBuf> {
    let bytes = fs::read(path).with_context(|| format!("reading raw file {}", path.display()))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => bail!("raw file {} is not valid UTF-8", path.display()),
    };

    let out_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(format!(".{ext}"));
        PathBuf::from(name)
    };
    let file = File::create(&out_path)
        .with_context(|| format!("creating token file {}", out_path.display()))?;
    let mut out = BufWriter::new(file);

    for line in text.lines() {
        writeln!(out, "{}", segmenter.segment_line(line).join(" "))
            .with_context(|| format!("writing token file {}", out_path.display()))?;
    }
    out.flush()
        .with_context(|| format!("writing token file {}", out_path.display()))?;

    Ok(out_path)
}

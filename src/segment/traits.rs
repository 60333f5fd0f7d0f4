// Segmenter trait — swap-ready abstraction.
//
// The pipeline only depends on "raw line in, tokens out". The default
// backend splits on Unicode word boundaries, but a dictionary-based
// segmenter could be swapped in without touching the counting stage.

/// Trait for splitting one raw text line into tokens.
pub trait Segmenter {
    /// Tokenize a single line. An empty or all-separator line yields an
    /// empty vector.
    fn segment_line(&self, line: &str) -> Vec<String>;
}

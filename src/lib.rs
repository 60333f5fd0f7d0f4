// Shibboleth: characteristic vocabulary per document category.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: segment raw text into token files, count terms per category,
// score every (category, term) pair, rank and report the top terms.

pub mod config;
pub mod corpus;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod segment;

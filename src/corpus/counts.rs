// CorpusCounts — the frequency tables the scorer reads.
//
// Built once by the counting pass, merged across parallel partitions,
// and read-only afterwards. Accumulation is commutative: counting the
// same files in any order, or in any partitioning, produces the same
// tables.

use std::collections::HashMap;

use anyhow::{bail, Result};

/// Term frequency tables for a whole corpus.
///
/// One category = one tokenized input file. The four tables are kept in
/// lockstep by [`CorpusCounts::add`]:
/// - per-category term counts,
/// - global term counts,
/// - per-category totals,
/// - the corpus total.
#[derive(Debug, Clone, Default)]
pub struct CorpusCounts {
    /// category -> term -> occurrences within that category
    category_terms: HashMap<String, HashMap<String, u64>>,
    /// term -> occurrences across all categories
    term_totals: HashMap<String, u64>,
    /// category -> sum of its term counts
    category_totals: HashMap<String, u64>,
    /// sum over all categories
    corpus_total: u64,
}

impl CorpusCounts {
    /// Register a category even if no tokens are ever counted for it.
    ///
    /// An empty input file is still a category; it shows up in the report
    /// with an empty term list rather than disappearing.
    pub fn ensure_category(&mut self, category: &str) {
        self.category_terms.entry(category.to_string()).or_default();
        self.category_totals.entry(category.to_string()).or_insert(0);
    }

    /// Count `n` occurrences of `term` in `category`.
    pub fn add(&mut self, category: &str, term: &str, n: u64) {
        if n == 0 {
            return;
        }
        *self
            .category_terms
            .entry(category.to_string())
            .or_default()
            .entry(term.to_string())
            .or_insert(0) += n;
        *self.term_totals.entry(term.to_string()).or_insert(0) += n;
        *self.category_totals.entry(category.to_string()).or_insert(0) += n;
        self.corpus_total += n;
    }

    /// Fold another accumulator into this one.
    ///
    /// Used for partition-then-merge parallel counting; merging is
    /// commutative, so partition boundaries never affect the result.
    pub fn merge(&mut self, other: CorpusCounts) {
        for (category, terms) in other.category_terms {
            let table = self.category_terms.entry(category).or_default();
            for (term, n) in terms {
                *table.entry(term).or_insert(0) += n;
            }
        }
        for (term, n) in other.term_totals {
            *self.term_totals.entry(term).or_insert(0) += n;
        }
        for (category, n) in other.category_totals {
            *self.category_totals.entry(category).or_insert(0) += n;
        }
        self.corpus_total += other.corpus_total;
    }

    /// Category names in ascending order.
    ///
    /// The tables are hash maps, so this sorted view is what every
    /// deterministic consumer (scorer, reporter, tests) iterates.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.category_terms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The term table for one category, if the category exists.
    pub fn terms_in(&self, category: &str) -> Option<&HashMap<String, u64>> {
        self.category_terms.get(category)
    }

    /// Total term occurrences within one category.
    pub fn category_total(&self, category: &str) -> u64 {
        self.category_totals.get(category).copied().unwrap_or(0)
    }

    /// Total occurrences of one term across the whole corpus.
    pub fn term_total(&self, term: &str) -> u64 {
        self.term_totals.get(term).copied().unwrap_or(0)
    }

    /// Total term occurrences across the whole corpus.
    pub fn corpus_total(&self) -> u64 {
        self.corpus_total
    }

    /// Number of distinct terms observed anywhere in the corpus.
    pub fn distinct_terms(&self) -> usize {
        self.term_totals.len()
    }

    /// Recompute every sum invariant and fail on the first violation.
    ///
    /// A violation means the accumulator itself is defective, so the
    /// error is a diagnostic for us, not a user mistake.
    pub fn verify(&self) -> Result<()> {
        let mut recomputed_terms: HashMap<&str, u64> = HashMap::new();
        let mut total_from_categories = 0u64;

        for (category, terms) in &self.category_terms {
            let sum: u64 = terms.values().sum();
            let recorded = self.category_total(category);
            if sum != recorded {
                bail!(
                    "count defect: category {category:?} sums to {sum} \
                     but its recorded total is {recorded}"
                );
            }
            total_from_categories += sum;
            for (term, n) in terms {
                *recomputed_terms.entry(term.as_str()).or_insert(0) += n;
            }
        }

        for (term, &recorded) in &self.term_totals {
            let sum = recomputed_terms.get(term.as_str()).copied().unwrap_or(0);
            if sum != recorded {
                bail!(
                    "count defect: term {term:?} sums to {sum} across categories \
                     but its recorded global total is {recorded}"
                );
            }
        }
        if recomputed_terms.len() != self.term_totals.len() {
            bail!(
                "count defect: {} terms recorded globally but {} observed in categories",
                self.term_totals.len(),
                recomputed_terms.len()
            );
        }

        if total_from_categories != self.corpus_total {
            bail!(
                "count defect: categories sum to {total_from_categories} \
                 but the recorded corpus total is {}",
                self.corpus_total
            );
        }

        Ok(())
    }
}

// Association scoring — the statistical core of the pipeline.
//
// For every (category, term) pair observed by the counter, compares the
// term's frequency inside the category against its frequency in the rest
// of the corpus. The statistic is a two-term log-likelihood ratio from
// the chi-square family; larger values mean the term is more
// characteristic of the category.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::corpus::counts::CorpusCounts;

/// Sentinel score for terms occurring only inside one category.
///
/// An exclusive term has no outside-the-category frequency, so the second
/// log term of the statistic is undefined for it. Under
/// [`ExclusivePolicy::MaxScore`] the pair is pinned to this value, which
/// sorts above any reachable statistic.
pub const MAX_SCORE: f64 = 99999.0;

/// What to do with a term that occurs exclusively in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusivePolicy {
    /// Leave exclusive terms out of the category's output entirely (default).
    #[default]
    Skip,
    /// Report exclusive terms at [`MAX_SCORE`] so they rank first.
    MaxScore,
}

/// One scored term within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

/// The association statistic for a single (category, term) pair.
///
/// - `a`: occurrences of the term inside the category
/// - `category_total`: all term occurrences inside the category
/// - `term_total`: occurrences of the term across the whole corpus
/// - `corpus_total`: all term occurrences across the whole corpus
///
/// Callers must rule out the exclusive case (`term_total == a`) first;
/// the policy decision for those pairs lives in [`score_category`].
pub fn log_likelihood(a: u64, category_total: u64, term_total: u64, corpus_total: u64) -> f64 {
    let a = a as f64;
    let inside_total = category_total as f64;
    let b = term_total as f64;
    let n = corpus_total as f64;

    // Expected counts inside and outside the category if the term were
    // spread evenly over the corpus.
    let e1 = b / n * inside_total;
    let e2 = b / n * (n - inside_total);

    let t1 = a * (a / e1).ln();
    let other = b - a;
    let t2 = other * (other / e2).ln();

    2.0 * (t1 + t2)
}

/// Score every term observed in `category`.
///
/// Exclusive terms are skipped or pinned per `policy`. The returned list
/// is unordered; [`crate::ranking::top_k`] imposes the output order.
///
/// Counts that violate the counter's invariants (a per-category count
/// above the term's global total, a total above the corpus total, a
/// "non-exclusive" term in a category spanning the whole corpus) are
/// internal defects: this fails fast with a diagnostic instead of
/// returning NaN or infinity.
pub fn score_category(
    counts: &CorpusCounts,
    category: &str,
    policy: ExclusivePolicy,
) -> Result<Vec<TermScore>> {
    let Some(terms) = counts.terms_in(category) else {
        bail!("unknown category {category:?}");
    };
    let category_total = counts.category_total(category);
    let corpus_total = counts.corpus_total();

    let mut scores = Vec::with_capacity(terms.len());
    for (term, &a) in terms {
        let term_total = counts.term_total(term);
        if a == 0 || a > term_total || term_total > corpus_total || category_total > corpus_total {
            bail!(
                "count defect for term {term:?} in category {category:?}: \
                 {a} in category (category total {category_total}), \
                 {term_total} in corpus (corpus total {corpus_total})"
            );
        }

        if term_total == a {
            match policy {
                ExclusivePolicy::Skip => continue,
                ExclusivePolicy::MaxScore => {
                    scores.push(TermScore {
                        term: term.clone(),
                        score: MAX_SCORE,
                    });
                    continue;
                }
            }
        }

        if category_total == corpus_total {
            // The term occurs outside this category, yet the category
            // accounts for the whole corpus. The tables contradict
            // each other.
            bail!(
                "count defect for term {term:?}: occurs outside category {category:?} \
                 but that category spans the whole corpus"
            );
        }

        scores.push(TermScore {
            term: term.clone(),
            score: log_likelihood(a, category_total, term_total, corpus_total),
        });
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scenario: category "x" holds {a:3, b:1}, category "y" holds
    // {a:1, c:2}. Corpus total 7, term "a" total 4.
    fn two_category_counts() -> CorpusCounts {
        let mut counts = CorpusCounts::default();
        counts.add("x", "a", 3);
        counts.add("x", "b", 1);
        counts.add("y", "a", 1);
        counts.add("y", "c", 2);
        counts
    }

    #[test]
    fn test_log_likelihood_known_value() {
        // a=3, A=4, b=4, N=7:
        //   E1 = 4/7*4, E2 = 4/7*3
        //   2 * (3*ln(3/E1) + 1*ln(1/E2)) = 0.553605...
        let score = log_likelihood(3, 4, 4, 7);
        assert!((score - 0.553605).abs() < 1e-5, "got {score}");
    }

    #[test]
    fn test_log_likelihood_symmetric_complement() {
        // Term "a" seen from x (3 of 4 inside) and from y (1 of 4
        // inside) swaps T1 and T2, so the scores coincide.
        let from_x = log_likelihood(3, 4, 4, 7);
        let from_y = log_likelihood(1, 3, 4, 7);
        assert!((from_x - from_y).abs() < 1e-12);
    }

    #[test]
    fn test_log_likelihood_grows_with_concentration() {
        // Same category size, same global total: the more of the term
        // falls inside the category, the stronger the association.
        let weak = log_likelihood(5, 100, 10, 1000);
        let strong = log_likelihood(9, 100, 10, 1000);
        assert!(strong > weak, "strong={strong} weak={weak}");
    }

    #[test]
    fn test_log_likelihood_deterministic() {
        let first = log_likelihood(17, 230, 41, 9001);
        let second = log_likelihood(17, 230, 41, 9001);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_exclusive_terms_skipped_by_default() {
        let counts = two_category_counts();
        let scores = score_category(&counts, "x", ExclusivePolicy::Skip).unwrap();
        // "b" is exclusive to x, so only "a" survives.
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].term, "a");
    }

    #[test]
    fn test_exclusive_terms_pinned_under_max_policy() {
        let counts = two_category_counts();
        let scores = score_category(&counts, "x", ExclusivePolicy::MaxScore).unwrap();
        assert_eq!(scores.len(), 2);
        let b = scores.iter().find(|s| s.term == "b").unwrap();
        assert_eq!(b.score, MAX_SCORE);
        let a = scores.iter().find(|s| s.term == "a").unwrap();
        assert!(a.score < MAX_SCORE);
    }

    #[test]
    fn test_trivially_exclusive_category_scores_empty() {
        // A category whose single term occurs once, corpus-wide once.
        let mut counts = CorpusCounts::default();
        counts.add("solo", "only", 1);
        counts.add("other", "filler", 5);
        let scores = score_category(&counts, "solo", ExclusivePolicy::Skip).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_single_category_corpus_scores_empty() {
        // Every term is exclusive when there is only one category, so
        // nothing reaches the statistic and nothing divides by zero.
        let mut counts = CorpusCounts::default();
        counts.add("all", "a", 3);
        counts.add("all", "b", 2);
        let scores = score_category(&counts, "all", ExclusivePolicy::Skip).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let counts = two_category_counts();
        assert!(score_category(&counts, "nope", ExclusivePolicy::Skip).is_err());
    }

    #[test]
    fn test_scores_are_finite() {
        let counts = two_category_counts();
        for category in counts.categories() {
            for scored in score_category(&counts, category, ExclusivePolicy::Skip).unwrap() {
                assert!(scored.score.is_finite(), "{}: {}", scored.term, scored.score);
            }
        }
    }
}

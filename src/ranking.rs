// Ranking — deterministic top-K selection per category.
//
// The scorer returns unordered (term, score) lists; hash-map iteration
// order must never leak into the output. Sorting is total: score
// descending, ties broken by term ascending.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::corpus::counts::CorpusCounts;
use crate::scoring::{self, ExclusivePolicy, TermScore};

/// One category's ranked terms, most characteristic first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRanking {
    pub category: String,
    pub terms: Vec<TermScore>,
}

/// Sort scored terms descending by score, ties broken by term ascending,
/// and keep the top `k`.
pub fn top_k(mut terms: Vec<TermScore>, k: usize) -> Vec<TermScore> {
    terms.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    terms.truncate(k);
    terms
}

/// Score and rank every category in the corpus, in category-name order.
pub fn rank_corpus(
    counts: &CorpusCounts,
    policy: ExclusivePolicy,
    k: usize,
) -> Result<Vec<CategoryRanking>> {
    let mut rankings = Vec::new();
    for category in counts.categories() {
        let scores = scoring::score_category(counts, category, policy)?;
        rankings.push(CategoryRanking {
            category: category.to_string(),
            terms: top_k(scores, k),
        });
    }
    Ok(rankings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pairs: &[(&str, f64)]) -> Vec<TermScore> {
        pairs
            .iter()
            .map(|(term, score)| TermScore {
                term: term.to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn test_sorts_descending() {
        let ranked = top_k(scored(&[("low", 1.0), ("high", 9.0), ("mid", 4.0)]), 50);
        let order: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_break_by_term_ascending() {
        let ranked = top_k(scored(&[("zeta", 2.0), ("alpha", 2.0), ("mu", 2.0)]), 50);
        let order: Vec<&str> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["alpha", "mu", "zeta"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let many: Vec<TermScore> = (0..120)
            .map(|i| TermScore {
                term: format!("t{i:03}"),
                score: i as f64,
            })
            .collect();
        let ranked = top_k(many, 50);
        assert_eq!(ranked.len(), 50);
        assert_eq!(ranked[0].term, "t119");
    }

    #[test]
    fn test_fewer_than_k_keeps_all() {
        let ranked = top_k(scored(&[("a", 1.0), ("b", 2.0)]), 50);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_corpus_orders_categories_by_name() {
        let mut counts = CorpusCounts::default();
        counts.add("zebra", "shared", 2);
        counts.add("alpha", "shared", 1);
        let rankings = rank_corpus(&counts, ExclusivePolicy::Skip, 50).unwrap();
        let names: Vec<&str> = rankings.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zebra"]);
    }
}

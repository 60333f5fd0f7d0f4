// Colored terminal output for ranked vocabularies and corpus stats.
//
// Block headers are styled; the term/score lines themselves stay plain
// tab-separated text so the output can still be cut/awk'd.

use colored::Colorize;

use crate::corpus::counts::CorpusCounts;
use crate::ranking::CategoryRanking;

/// Print each category's ranked terms as a labeled block.
pub fn display_rankings(rankings: &[CategoryRanking]) {
    for ranking in rankings {
        println!(
            "\n{}",
            format!(
                "=== {} ({} terms) ===",
                ranking.category,
                ranking.terms.len()
            )
            .bold()
        );
        for scored in &ranking.terms {
            println!("{}\t{}", scored.term, scored.score);
        }
    }
}

/// Print per-category totals and the corpus summary.
pub fn display_stats(counts: &CorpusCounts) {
    println!("\n{}", "=== Corpus ===".bold());
    println!(
        "  {:<28} {:>10}  {:>10}",
        "Category".dimmed(),
        "Terms".dimmed(),
        "Total".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());

    for category in counts.categories() {
        let distinct = counts.terms_in(category).map_or(0, |terms| terms.len());
        println!(
            "  {:<28} {:>10}  {:>10}",
            category,
            distinct,
            counts.category_total(category),
        );
    }

    println!();
    println!(
        "  {} categories, {} distinct terms, {} term occurrences",
        counts.categories().len(),
        counts.distinct_terms(),
        counts.corpus_total(),
    );
}

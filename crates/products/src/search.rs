//! Substring-count relevance scoring.
//!
//! A product's score is the number of non-overlapping occurrences of the query
//! in its lower-cased `name` plus those in its lower-cased `description_long`.
//! Products scoring zero never appear in results.

use serde::Serialize;

use crate::product::Product;

/// How the query itself is treated before counting.
///
/// Catalog text is always lower-cased. `AsGiven` leaves the query untouched, so
/// an upper-case query letter can never match; `Folded` lower-cases it too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryCase {
    #[default]
    AsGiven,
    Folded,
}

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// The matched product (owned copy).
    pub product: Product,
    /// Relevance score (higher is better, never zero).
    pub score: usize,
}

/// Count non-overlapping occurrences of `needle`, scanning left to right.
///
/// The empty needle matches at every char boundary, i.e. `chars + 1` times.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Relevance of `product` for an already-prepared query.
///
/// Fields are lowered with `str::to_lowercase`, i.e. full Unicode case mapping:
/// a word-final `Σ` becomes `ς` and `İ` becomes two chars.
pub fn score(product: &Product, query: &str) -> usize {
    count_occurrences(&product.name.to_lowercase(), query)
        + count_occurrences(&product.description_long.to_lowercase(), query)
}

/// Score every product, drop the misses, order by descending score.
///
/// Equal scores keep their input order.
pub fn rank<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    query: &str,
    case: QueryCase,
) -> Vec<SearchHit> {
    let folded;
    let query = match case {
        QueryCase::AsGiven => query,
        QueryCase::Folded => {
            folded = query.to_lowercase();
            folded.as_str()
        }
    };

    let mut hits: Vec<SearchHit> = products
        .into_iter()
        .filter_map(|p| {
            let relevance = score(p, query);
            (relevance > 0).then(|| SearchHit {
                product: p.clone(),
                score: relevance,
            })
        })
        .collect();

    // `sort_by` is stable.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

//! Relevance scoring and ordering over the catalog.
//!
//! Pure and deterministic: identical catalog state and term set always
//! produce the same ordering. Matching is whole-word only, so the term
//! "phone" never scores a product whose text merely contains "headphones".

use std::cmp::Reverse;

use regex::Regex;

use crate::{query::SearchTermSet, types::Product};

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 2;

/// Per-term weight of a title match.
const TITLE_WEIGHT: u32 = 2;
/// Per-term weight of a description or product-type match, counted only when
/// the same term did not already match the title.
const FIELD_WEIGHT: u32 = 1;

/// A product paired with its relevance score; recomputed on every call.
struct ScoredProduct<'a> {
    product: &'a Product,
    score: u32,
}

/// Scores and orders `products` against `terms`, returning at most
/// [`MAX_RESULTS`] entries by descending relevance.
///
/// Ties preserve original catalog order (the sort is stable). When the term
/// set is empty, or nothing scores above zero, the head of the catalog is
/// returned instead — the result is never empty for a non-empty catalog.
pub fn rank<'a>(products: &'a [Product], terms: &SearchTermSet) -> Vec<&'a Product> {
    if products.is_empty() || terms.is_empty() {
        return fallback(products);
    }

    let matchers: Vec<Regex> = terms.iter().filter_map(word_matcher).collect();

    let mut scored: Vec<ScoredProduct<'a>> = products
        .iter()
        .filter_map(|product| {
            let score = score_product(product, &matchers);
            (score > 0).then_some(ScoredProduct { product, score })
        })
        .collect();

    if scored.is_empty() {
        return fallback(products);
    }

    // sort_by_key is stable; equal scores keep catalog order.
    scored.sort_by_key(|s| Reverse(s.score));
    scored
        .into_iter()
        .take(MAX_RESULTS)
        .map(|s| s.product)
        .collect()
}

/// First `min(MAX_RESULTS, len)` products in original order.
fn fallback(products: &[Product]) -> Vec<&Product> {
    products.iter().take(MAX_RESULTS).collect()
}

fn score_product(product: &Product, matchers: &[Regex]) -> u32 {
    let mut score = 0;
    for m in matchers {
        if m.is_match(&product.display_title) {
            score += TITLE_WEIGHT;
        } else if m.is_match(&product.embedding_text) || m.is_match(&product.product_type) {
            score += FIELD_WEIGHT;
        }
    }
    score
}

/// Case-insensitive whole-word matcher for one search term.
///
/// The term is escaped, so this cannot fail in practice; a term that somehow
/// produces an invalid pattern is skipped rather than panicking.
fn word_matcher(term: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, description: &str, product_type: &str) -> Product {
        Product {
            display_title: title.to_string(),
            embedding_text: description.to_string(),
            url: String::new(),
            image_url: String::new(),
            product_type: product_type.to_string(),
            discount: 0.0,
            price: String::new(),
            variants: String::new(),
            create_date: String::new(),
        }
    }

    fn terms(list: &[&str]) -> SearchTermSet {
        SearchTermSet::from_terms(list.iter().copied())
    }

    #[test]
    fn empty_terms_fall_back_to_catalog_head() {
        let catalog = vec![
            product("First", "", ""),
            product("Second", "", ""),
            product("Third", "", ""),
        ];
        let hits = rank(&catalog, &SearchTermSet::default());
        let titles: Vec<_> = hits.iter().map(|p| p.display_title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn fallback_on_single_entry_catalog_returns_one() {
        let catalog = vec![product("Only", "", "")];
        assert_eq!(rank(&catalog, &SearchTermSet::default()).len(), 1);
    }

    #[test]
    fn no_match_falls_back_instead_of_returning_nothing() {
        let catalog = vec![product("Scarf", "wool scarf", "ACCESSORIES")];
        let hits = rank(&catalog, &terms(&["spaceship"]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_title, "Scarf");
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(rank(&[], &terms(&["watch"])).is_empty());
    }

    #[test]
    fn title_match_outweighs_description_match() {
        let catalog = vec![
            product("Travel Mug", "a watch for divers", "MUGS"),
            product("Dive Watch", "steel bracelet", "WATCHES"),
        ];
        let hits = rank(&catalog, &terms(&["watch"]));
        assert_eq!(hits[0].display_title, "Dive Watch");
        assert_eq!(hits[1].display_title, "Travel Mug");
    }

    #[test]
    fn scores_accumulate_across_terms() {
        let catalog = vec![
            // "watch" in title only: 2
            product("Dive Watch", "steel bracelet", ""),
            // "watch" in title + "men" in title: 4
            product("Men Watch", "for men", ""),
        ];
        let hits = rank(&catalog, &terms(&["watch", "men"]));
        assert_eq!(hits[0].display_title, "Men Watch");
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let catalog = vec![
            product("Watch A", "", ""),
            product("Watch B", "", ""),
            product("Watch C", "", ""),
        ];
        let hits = rank(&catalog, &terms(&["watch"]));
        let titles: Vec<_> = hits.iter().map(|p| p.display_title.as_str()).collect();
        assert_eq!(titles, ["Watch A", "Watch B"]);
    }

    #[test]
    fn never_more_than_two_results() {
        let catalog = vec![
            product("Watch 1", "", ""),
            product("Watch 2", "", ""),
            product("Watch 3", "", ""),
            product("Watch 4", "", ""),
        ];
        assert_eq!(rank(&catalog, &terms(&["watch"])).len(), MAX_RESULTS);
    }

    #[test]
    fn phone_does_not_match_inside_headphones() {
        let catalog = vec![
            product("Wireless Headphones", "over-ear headphones", "AUDIO"),
            product("Smartphone Case", "fits any phone", "ACCESSORIES"),
        ];
        let hits = rank(&catalog, &terms(&["phone"]));
        // Only the case matches: "phone" appears as a whole word in its
        // description; "headphones" and "Smartphone" do not count.
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_title, "Smartphone Case");
    }

    #[test]
    fn product_type_counts_like_description() {
        let catalog = vec![
            product("Classic Chrono", "steel bracelet", "WATCHES"),
            product("Wool Scarf", "warm and soft", "ACCESSORIES"),
        ];
        let hits = rank(&catalog, &terms(&["watches"]));
        assert_eq!(hits[0].display_title, "Classic Chrono");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = vec![product("IPHONE 13 CASE", "", "")];
        let hits = rank(&catalog, &terms(&["iphone"]));
        assert_eq!(hits.len(), 1);
    }
}

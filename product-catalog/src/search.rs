//! Search facade joining the catalog, the expander, and the ranker.

use tracing::debug;

use crate::{
    catalog::CatalogStore,
    query::QueryExpander,
    ranking::rank,
    types::Product,
};

/// One-call product search over a loaded catalog.
///
/// Owns the read-only store and the expander; safe to share behind an `Arc`
/// across concurrent requests.
#[derive(Debug)]
pub struct ProductSearch {
    store: CatalogStore,
    expander: QueryExpander,
}

impl ProductSearch {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            expander: QueryExpander::new(),
        }
    }

    /// Expands `query` and ranks the catalog against it.
    ///
    /// Returns at most two products; never empty while the catalog has
    /// entries (see [`rank`] for the fallback policy).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let terms = self.expander.search_terms(query);
        debug!(query, terms = terms.len(), "ranking catalog");
        rank(self.store.products(), &terms)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn product(title: &str, description: &str) -> Product {
        Product {
            display_title: title.to_string(),
            embedding_text: description.to_string(),
            url: String::new(),
            image_url: String::new(),
            product_type: String::new(),
            discount: 0.0,
            price: String::new(),
            variants: String::new(),
            create_date: String::new(),
        }
    }

    #[test]
    fn iphone_query_finds_phone_products_via_synonyms() {
        let search = ProductSearch::new(CatalogStore::from_products(vec![
            product("Wireless Headphones", "over-ear headphones"),
            product("Phone Stand", "desk stand for your phone"),
            product("iPhone 13 Case", "slim case"),
        ]));

        let hits = search.search("I am looking for iphone");
        assert_eq!(hits.len(), 2);
        // Title matches for "iphone" (2) and "phone" (2) rank the case and
        // the stand; the headphones never match a whole word.
        let titles: Vec<_> = hits.iter().map(|p| p.display_title.as_str()).collect();
        assert!(titles.contains(&"iPhone 13 Case"));
        assert!(titles.contains(&"Phone Stand"));
    }

    #[test]
    fn filler_only_query_returns_catalog_head() {
        let search = ProductSearch::new(CatalogStore::from_products(vec![
            product("First", ""),
            product("Second", ""),
            product("Third", ""),
        ]));
        let hits = search.search("I want some, please");
        let titles: Vec<_> = hits.iter().map(|p| p.display_title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }
}

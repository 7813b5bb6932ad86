//! Read-only product store loaded from a CSV export.
//!
//! Format: first line is a header, each following line holds the nine
//! product fields in fixed column order. Text fields may be wrapped in
//! double quotes to protect embedded commas. Lines with fewer than nine
//! fields are dropped; the parser never fails on bad data.

use std::path::Path;

use tracing::{info, trace};

use crate::{errors::CatalogError, types::Product};

/// Column count of a well-formed catalog line.
const FIELDS_PER_LINE: usize = 9;

/// Products parsed once at startup; read-only afterwards.
///
/// Concurrent readers need no locking — the store is never mutated after
/// construction.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Reads and parses the catalog file at `path`.
    ///
    /// # Errors
    /// [`CatalogError::Io`] when the file cannot be read. Malformed lines
    /// inside a readable file are skipped, not reported.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_csv(&raw);
        info!(path = %path.display(), products = store.len(), "catalog loaded");
        Ok(store)
    }

    /// Parses catalog CSV text. The first non-empty line is the header.
    pub fn from_csv(raw: &str) -> Self {
        let products = raw
            .lines()
            .filter(|l| !l.trim().is_empty())
            .skip(1)
            .filter_map(|line| {
                let parsed = parse_line(line);
                if parsed.is_none() {
                    trace!(line, "dropping malformed catalog line");
                }
                parsed
            })
            .collect();
        Self { products }
    }

    /// Builds a store from already-constructed products (fixtures, embedding).
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in original file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Parses one data line into a product; `None` when under nine fields.
fn parse_line(line: &str) -> Option<Product> {
    let fields = split_quoted(line);
    let [title, description, url, image_url, product_type, discount, price, variants, create_date, ..] =
        fields.as_slice()
    else {
        return None;
    };

    Some(Product {
        display_title: title.clone(),
        embedding_text: description.clone(),
        url: url.clone(),
        image_url: image_url.clone(),
        product_type: product_type.clone(),
        discount: discount.parse().unwrap_or_default(),
        price: price.clone(),
        variants: variants.clone(),
        create_date: create_date.clone(),
    })
}

/// Comma split that respects double quotes (sufficient for this export).
///
/// Quote characters toggle quoting and are not kept. A trailing field is
/// only emitted when non-empty, matching the upstream export's behavior.
fn split_quoted(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                result.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        result.push(current.trim().to_string());
    }

    result
}

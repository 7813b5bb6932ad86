//! In-memory product catalog with synonym-aware lexical search.
//!
//! The pipeline has three stages, each usable on its own:
//! 1. [`CatalogStore`] — products parsed once from a CSV export, read-only
//!    afterwards;
//! 2. [`QueryExpander`] — free text → lower-cased, stop-word-filtered,
//!    synonym-expanded [`SearchTermSet`];
//! 3. [`ranking::rank`] — whole-word scoring against title, description, and
//!    product type, capped at two results with a deterministic fallback.
//!
//! [`ProductSearch`] wires the three together behind a single call.

pub mod catalog;
pub mod errors;
pub mod query;
pub mod ranking;
pub mod search;
pub mod types;

pub use catalog::CatalogStore;
pub use errors::CatalogError;
pub use query::{QueryExpander, SearchTermSet};
pub use search::ProductSearch;
pub use types::Product;

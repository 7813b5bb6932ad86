/// A single catalog entry.
///
/// Identity is positional: products carry no explicit id and keep the order
/// of the source file. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Customer-facing title, the strongest ranking signal.
    pub display_title: String,
    /// Longer free-text description used for secondary matches.
    pub embedding_text: String,
    pub url: String,
    pub image_url: String,
    /// Coarse category label (e.g. `WATCHES`), matched like the description.
    pub product_type: String,
    pub discount: f64,
    /// Kept as the raw string from the export (currency formatting varies).
    pub price: String,
    pub variants: String,
    pub create_date: String,
}

//! Tool surface offered to the model.
//!
//! Exactly two functions are advertised: `searchProducts` and
//! `convertCurrencies`. Argument and result shapes use the wire's camelCase
//! names; [`ToolResult`] serializes untagged so the model sees either a bare
//! product array or a conversion record, nothing else.

use llm_service::ToolDefinition;
use product_catalog::Product;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Name of the product-search tool.
pub const SEARCH_PRODUCTS: &str = "searchProducts";
/// Name of the currency-conversion tool.
pub const CONVERT_CURRENCIES: &str = "convertCurrencies";

/// The two tool schemas sent with every first-round model call.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::function(
            SEARCH_PRODUCTS,
            "Search the product catalog and return up to two relevant products.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text description of what the shopper is looking for."
                    }
                },
                "required": ["query"]
            }),
        ),
        ToolDefinition::function(
            CONVERT_CURRENCIES,
            "Convert a positive amount between two ISO 4217 currencies.",
            json!({
                "type": "object",
                "properties": {
                    "amount": {
                        "type": "number",
                        "description": "Amount to convert; must be positive."
                    },
                    "fromCurrency": {
                        "type": "string",
                        "description": "ISO code of the source currency, e.g. USD."
                    },
                    "toCurrency": {
                        "type": "string",
                        "description": "ISO code of the target currency, e.g. EUR."
                    }
                },
                "required": ["amount", "fromCurrency", "toCurrency"]
            }),
        ),
    ]
}

/// Arguments of `searchProducts`, parsed from the model's raw JSON.
#[derive(Debug, Deserialize)]
pub struct SearchProductsArgs {
    pub query: String,
}

/// Arguments of `convertCurrencies`, parsed from the model's raw JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrenciesArgs {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// One product summary handed back to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHit {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub discount: f64,
    pub price: String,
    pub variants: String,
    pub create_date: String,
}

impl From<&Product> for ProductHit {
    fn from(p: &Product) -> Self {
        Self {
            title: p.display_title.clone(),
            description: p.embedding_text.clone(),
            url: p.url.clone(),
            image_url: p.image_url.clone(),
            discount: p.discount,
            price: p.price.clone(),
            variants: p.variants.clone(),
            create_date: p.create_date.clone(),
        }
    }
}

/// Outcome of a `convertCurrencies` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrenciesResult {
    pub from_currency: String,
    pub to_currency: String,
    pub original_amount: f64,
    pub converted_amount: f64,
}

/// Result of a locally-executed tool call.
///
/// Serialized untagged and passed to the model as opaque JSON content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    Products(Vec<ProductHit>),
    Conversion(ConvertCurrenciesResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_declare_required_fields() {
        let defs = tool_definitions();
        assert_eq!(defs.len(), 2);

        let v = serde_json::to_value(&defs).expect("serializable");
        assert_eq!(v[0]["function"]["name"], SEARCH_PRODUCTS);
        assert_eq!(v[0]["function"]["parameters"]["required"][0], "query");
        assert_eq!(v[1]["function"]["name"], CONVERT_CURRENCIES);
        let required = &v[1]["function"]["parameters"]["required"];
        assert_eq!(required.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn tool_result_serializes_without_a_tag() {
        let conversion = ToolResult::Conversion(ConvertCurrenciesResult {
            from_currency: "USD".into(),
            to_currency: "EUR".into(),
            original_amount: 100.0,
            converted_amount: 90.0,
        });
        let v = serde_json::to_value(&conversion).expect("serializable");
        assert_eq!(v["fromCurrency"], "USD");
        assert_eq!(v["convertedAmount"], 90.0);
        assert!(v.get("Conversion").is_none());

        let products = ToolResult::Products(Vec::new());
        let v = serde_json::to_value(&products).expect("serializable");
        assert!(v.is_array());
    }

    #[test]
    fn args_parse_from_camel_case_wire_names() {
        let args: ConvertCurrenciesArgs =
            serde_json::from_str(r#"{"amount": 42.5, "fromCurrency": "usd", "toCurrency": "cad"}"#)
                .expect("valid args");
        assert_eq!(args.amount, 42.5);
        assert_eq!(args.from_currency, "usd");
    }
}

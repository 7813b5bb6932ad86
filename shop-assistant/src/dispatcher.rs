//! Maps a named tool invocation to a local component.

use currency_exchange::{CurrencyConverter, RatesProvider};
use product_catalog::ProductSearch;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::AssistantError,
    tools::{
        self, ConvertCurrenciesArgs, ConvertCurrenciesResult, ProductHit, SearchProductsArgs,
        ToolResult,
    },
};

/// Executes the two locally-implemented tools on behalf of the model.
///
/// Exactly the names [`tools::SEARCH_PRODUCTS`] and
/// [`tools::CONVERT_CURRENCIES`] are recognized; anything else is an
/// [`AssistantError::UnknownTool`].
pub struct ToolDispatcher<R> {
    search: ProductSearch,
    converter: CurrencyConverter<R>,
}

impl<R: RatesProvider> ToolDispatcher<R> {
    pub fn new(search: ProductSearch, converter: CurrencyConverter<R>) -> Self {
        Self { search, converter }
    }

    /// Runs one tool invocation against its component.
    ///
    /// `raw_args` is the JSON-encoded argument string exactly as the model
    /// produced it.
    ///
    /// # Errors
    /// - [`AssistantError::InvalidToolArguments`] when `raw_args` does not
    ///   parse into the tool's argument shape
    /// - [`AssistantError::UnknownTool`] for unrecognized names
    /// - conversion failures as mapped by
    ///   [`From<ExchangeError>`](AssistantError)
    pub async fn dispatch(
        &self,
        name: &str,
        raw_args: &str,
    ) -> Result<ToolResult, AssistantError> {
        match name {
            tools::SEARCH_PRODUCTS => {
                let args: SearchProductsArgs = parse_args(name, raw_args)?;
                let hits: Vec<ProductHit> = self
                    .search
                    .search(&args.query)
                    .into_iter()
                    .map(ProductHit::from)
                    .collect();
                debug!(query = %args.query, hits = hits.len(), "searchProducts executed");
                Ok(ToolResult::Products(hits))
            }
            tools::CONVERT_CURRENCIES => {
                let args: ConvertCurrenciesArgs = parse_args(name, raw_args)?;
                let converted = self
                    .converter
                    .convert(args.amount, &args.from_currency, &args.to_currency)
                    .await?;
                debug!(
                    amount = args.amount,
                    from = %args.from_currency,
                    to = %args.to_currency,
                    converted,
                    "convertCurrencies executed"
                );
                Ok(ToolResult::Conversion(ConvertCurrenciesResult {
                    from_currency: args.from_currency.to_uppercase(),
                    to_currency: args.to_currency.to_uppercase(),
                    original_amount: args.amount,
                    converted_amount: converted,
                }))
            }
            other => Err(AssistantError::UnknownTool(other.to_string())),
        }
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, raw: &str) -> Result<T, AssistantError> {
    serde_json::from_str(raw).map_err(|source| AssistantError::InvalidToolArguments {
        tool: tool.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use currency_exchange::{ExchangeError, RateTable};
    use product_catalog::{CatalogStore, Product};
    use std::collections::HashMap;
    use std::future::Future;

    struct FixedRates(RateTable);

    impl RatesProvider for FixedRates {
        fn latest_rates(
            &self,
        ) -> impl Future<Output = Result<RateTable, ExchangeError>> + Send {
            let table = self.0.clone();
            async move { Ok(table) }
        }
    }

    fn product(title: &str, description: &str) -> Product {
        Product {
            display_title: title.to_string(),
            embedding_text: description.to_string(),
            url: format!("https://shop.test/{}", title.to_lowercase().replace(' ', "-")),
            image_url: String::new(),
            product_type: String::new(),
            discount: 5.0,
            price: "49.99 USD".to_string(),
            variants: "one size".to_string(),
            create_date: "2024-01-01".to_string(),
        }
    }

    fn dispatcher() -> ToolDispatcher<FixedRates> {
        let store = CatalogStore::from_products(vec![
            product("iPhone 13 Case", "slim case for your phone"),
            product("Wireless Headphones", "over-ear headphones"),
            product("Phone Stand", "desk stand"),
        ]);
        let rates = FixedRates(RateTable::new(
            "USD",
            HashMap::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.9),
            ]),
        ));
        ToolDispatcher::new(ProductSearch::new(store), CurrencyConverter::new(rates))
    }

    #[tokio::test]
    async fn search_route_returns_capped_product_hits() {
        let result = dispatcher()
            .dispatch(tools::SEARCH_PRODUCTS, r#"{"query": "I am looking for iphone"}"#)
            .await
            .expect("search succeeds");

        let ToolResult::Products(hits) = result else {
            panic!("expected product hits");
        };
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| !h.title.contains("Headphones")));

        // Wire shape uses camelCase names.
        let v = serde_json::to_value(&hits).expect("serializable");
        assert!(v[0].get("imageUrl").is_some());
        assert!(v[0].get("createDate").is_some());
    }

    #[tokio::test]
    async fn convert_route_produces_rounded_record() {
        let result = dispatcher()
            .dispatch(
                tools::CONVERT_CURRENCIES,
                r#"{"amount": 100, "fromCurrency": "usd", "toCurrency": "eur"}"#,
            )
            .await
            .expect("conversion succeeds");

        let ToolResult::Conversion(record) = result else {
            panic!("expected conversion record");
        };
        assert_eq!(record.from_currency, "USD");
        assert_eq!(record.to_currency, "EUR");
        assert_eq!(record.original_amount, 100.0);
        assert_eq!(record.converted_amount, 90.0);
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_by_name() {
        let err = dispatcher()
            .dispatch("orderPizza", "{}")
            .await
            .expect_err("must fail");
        assert!(matches!(err, AssistantError::UnknownTool(name) if name == "orderPizza"));
    }

    #[tokio::test]
    async fn malformed_arguments_name_the_tool() {
        let err = dispatcher()
            .dispatch(tools::SEARCH_PRODUCTS, "{not json")
            .await
            .expect_err("must fail");
        assert!(matches!(
            err,
            AssistantError::InvalidToolArguments { tool, .. } if tool == tools::SEARCH_PRODUCTS
        ));
    }

    #[tokio::test]
    async fn non_positive_amount_is_invalid_input() {
        let err = dispatcher()
            .dispatch(
                tools::CONVERT_CURRENCIES,
                r#"{"amount": -5, "fromCurrency": "USD", "toCurrency": "EUR"}"#,
            )
            .await
            .expect_err("must fail");
        assert!(matches!(err, AssistantError::InvalidInput(_)));
    }
}

use currency_exchange::{CurrencyConverter, OpenExchangeRatesClient};
use llm_service::{OpenAiService, config_openai_chat};
use product_catalog::{CatalogStore, ProductSearch};
use shop_assistant::{ShopAssistant, ToolDispatcher};

use crate::error_handler::AppError;

const DEFAULT_CATALOG_PATH: &str = "data/products_list.csv";

/// The assistant wired to its production backends.
pub type LiveAssistant = ShopAssistant<OpenAiService, OpenExchangeRatesClient>;

/// Shared state for all HTTP handlers.
pub struct AppState {
    pub assistant: LiveAssistant,
    /// Number of catalog entries loaded at startup, for boot logging.
    pub catalog_size: usize,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// Required: `OPENAI_API_KEY`, `OPEN_EXCHANGE_RATES_API_KEY`. The catalog
    /// path falls back to `data/products_list.csv` when `CATALOG_PATH` is
    /// unset.
    pub fn from_env() -> Result<Self, AppError> {
        let llm = OpenAiService::new(config_openai_chat()?)?;

        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        let store = CatalogStore::load(&catalog_path)?;
        let catalog_size = store.len();

        let rates = OpenExchangeRatesClient::from_env()?;
        let dispatcher =
            ToolDispatcher::new(ProductSearch::new(store), CurrencyConverter::new(rates));

        Ok(Self {
            assistant: ShopAssistant::new(llm, dispatcher),
            catalog_size,
        })
    }
}

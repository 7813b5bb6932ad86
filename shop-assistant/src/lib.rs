//! Tool-augmented shopping dialogue with a single public entry point.
//!
//! [`ShopAssistant::chat`] runs one complete exchange: the user message goes
//! to the model together with two tool schemas; if the model requests a tool,
//! the [`ToolDispatcher`] executes it locally (product search or currency
//! conversion) and the result is folded back into a second model call whose
//! content becomes the final answer. No state survives between exchanges.

pub mod dispatcher;
pub mod error;
pub mod orchestrator;
pub mod tools;

pub use dispatcher::ToolDispatcher;
pub use error::AssistantError;
pub use orchestrator::{FALLBACK_ANSWER, ShopAssistant};
pub use tools::{
    ConvertCurrenciesArgs, ConvertCurrenciesResult, ProductHit, SearchProductsArgs, ToolResult,
};

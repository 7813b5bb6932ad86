//! Typed errors for the currency-exchange crate.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The amount failed the positive-number precondition; nothing was fetched.
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    /// A requested ISO code is absent from the fetched rate table.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// HTTP transport failure while fetching rates (connect, TLS, timeout).
    #[error("transport error while fetching exchange rates: {0}")]
    Transport(#[from] reqwest::Error),

    /// The rate service answered with a non-2xx status.
    #[error("exchange rate service returned HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// The rate payload could not be decoded as expected.
    #[error("failed to decode exchange rate payload: {0}")]
    Decode(String),
}

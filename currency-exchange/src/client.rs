//! Open Exchange Rates client.
//!
//! GET `latest.json` with `app_id` and `base` query parameters; the response
//! is `{"rates": {"EUR": 0.9, ...}}`. Free-plan feeds always quote against
//! USD; the base parameter is still sent explicitly.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::{error::ExchangeError, rates::RateTable};

const DEFAULT_URL: &str = "https://openexchangerates.org/api/latest.json";
const DEFAULT_BASE: &str = "USD";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of a current [`RateTable`].
///
/// Production code uses [`OpenExchangeRatesClient`]; tests hand the converter
/// a fixed table.
pub trait RatesProvider: Send + Sync {
    /// Fetches the current rate table.
    fn latest_rates(&self) -> impl Future<Output = Result<RateTable, ExchangeError>> + Send;
}

/// Thin client for the Open Exchange Rates `latest.json` endpoint.
#[derive(Debug)]
pub struct OpenExchangeRatesClient {
    client: reqwest::Client,
    url: String,
    app_id: String,
    base: String,
}

impl OpenExchangeRatesClient {
    /// Builds a client from environment variables.
    ///
    /// # Env
    /// - `OPEN_EXCHANGE_RATES_API_KEY` (required)
    /// - `OPEN_EXCHANGE_RATES_BASE` (default `USD`)
    ///
    /// # Errors
    /// [`ExchangeError::MissingVar`] when the API key is absent;
    /// [`ExchangeError::Transport`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ExchangeError> {
        let app_id = match std::env::var("OPEN_EXCHANGE_RATES_API_KEY") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => return Err(ExchangeError::MissingVar("OPEN_EXCHANGE_RATES_API_KEY")),
        };
        let base = std::env::var("OPEN_EXCHANGE_RATES_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE.to_string());
        Self::new(app_id, base)
    }

    /// Builds a client with an explicit key and base currency.
    pub fn new(app_id: impl Into<String>, base: impl Into<String>) -> Result<Self, ExchangeError> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        let base = base.into();

        info!(%base, "OpenExchangeRatesClient initialized");

        Ok(Self {
            client,
            url: DEFAULT_URL.to_string(),
            app_id: app_id.into(),
            base,
        })
    }

    /// Fetches the current rate table.
    ///
    /// # Errors
    /// - [`ExchangeError::Transport`] for client/network failures
    /// - [`ExchangeError::HttpStatus`] for non-2xx responses
    /// - [`ExchangeError::Decode`] if the JSON cannot be parsed
    pub async fn latest(&self) -> Result<RateTable, ExchangeError> {
        let started = Instant::now();

        debug!(base = %self.base, "GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .query(&[("app_id", self.app_id.as_str()), ("base", self.base.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = one_line_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "rate fetch returned non-success status"
            );

            return Err(ExchangeError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: LatestResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode latest.json response"
                );
                return Err(ExchangeError::Decode(format!(
                    "serde error: {e}; expected `rates` object"
                )));
            }
        };

        info!(
            codes = out.rates.len(),
            latency_ms = started.elapsed().as_millis(),
            "rate table fetched"
        );

        Ok(RateTable::new(self.base.clone(), out.rates))
    }
}

impl RatesProvider for OpenExchangeRatesClient {
    fn latest_rates(&self) -> impl Future<Output = Result<RateTable, ExchangeError>> + Send {
        self.latest()
    }
}

/// Response body of `latest.json`; everything beyond `rates` is ignored.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

const SNIPPET_MAX_CHARS: usize = 200;

fn one_line_snippet(body: &str) -> String {
    let one_line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    one_line.chars().take(SNIPPET_MAX_CHARS).collect()
}

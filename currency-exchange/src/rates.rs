//! Rate table and cross-rate conversion math.
//!
//! Every conversion goes through the base currency: `amount / rate[from]`
//! into the base, `× rate[to]` out of it, rounded to two decimals. The math
//! is pure; fetching lives in [`crate::client`].

use std::collections::HashMap;

use crate::{client::RatesProvider, error::ExchangeError};

/// Exchange rates quoted against a single base currency.
///
/// The base itself appears in the table with rate 1.0, as delivered by the
/// upstream feed.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    /// ISO code all rates are quoted against.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Rate for `code` (upper-cased lookup), if present.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&code.to_uppercase()).copied()
    }

    /// Converts `amount` from one ISO code to another via the base currency.
    ///
    /// Codes are upper-cased before lookup. The result is rounded to two
    /// decimal places with standard rounding.
    ///
    /// # Errors
    /// - [`ExchangeError::InvalidAmount`] unless `amount` is a positive,
    ///   finite number
    /// - [`ExchangeError::UnsupportedCurrency`] naming the first code absent
    ///   from the table
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ExchangeError> {
        if !(amount > 0.0 && amount.is_finite()) {
            return Err(ExchangeError::InvalidAmount(amount));
        }

        let from_code = from.to_uppercase();
        let to_code = to.to_uppercase();

        let from_rate = self
            .rates
            .get(&from_code)
            .copied()
            .ok_or(ExchangeError::UnsupportedCurrency(from_code))?;
        let to_rate = self
            .rates
            .get(&to_code)
            .copied()
            .ok_or(ExchangeError::UnsupportedCurrency(to_code))?;

        let amount_in_base = amount / from_rate;
        let converted = amount_in_base * to_rate;

        Ok(round_to_cents(converted))
    }
}

/// Currency converter backed by a live rate feed.
///
/// Validates the amount before any network call, then fetches a fresh table
/// and delegates the math to [`RateTable::convert`].
#[derive(Debug)]
pub struct CurrencyConverter<R> {
    provider: R,
}

impl<R: RatesProvider> CurrencyConverter<R> {
    pub fn new(provider: R) -> Self {
        Self { provider }
    }

    /// One full conversion: precondition check, fetch, cross-rate, rounding.
    ///
    /// # Errors
    /// Everything [`RateTable::convert`] signals, plus the provider's fetch
    /// errors. A non-positive amount fails before the fetch is attempted.
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, ExchangeError> {
        if !(amount > 0.0 && amount.is_finite()) {
            return Err(ExchangeError::InvalidAmount(amount));
        }
        let table = self.provider.latest_rates().await?;
        table.convert(amount, from, to)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

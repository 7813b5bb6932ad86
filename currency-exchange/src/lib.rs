//! Currency conversion backed by the Open Exchange Rates feed.
//!
//! The crate splits the concern in two: [`OpenExchangeRatesClient`] fetches a
//! [`RateTable`] (all rates quoted against one base currency), and the table
//! itself carries the pure cross-rate math — validation, lookup, rounding.
//! [`CurrencyConverter`] glues the two together for one-call conversions.
//!
//! The [`RatesProvider`] trait is the seam for tests: conversion logic runs
//! against a fixed table without touching the network.

pub mod client;
pub mod error;
pub mod rates;

pub use client::{OpenExchangeRatesClient, RatesProvider};
pub use error::ExchangeError;
pub use rates::{CurrencyConverter, RateTable};

//! Finpanel Market Data Crate
//!
//! This crate is the boundary to third-party financial data providers.
//!
//! # Overview
//!
//! A provider supplies two operations:
//! - the current quote for a symbol
//! - a bundle of fundamentals, statistics and historical income statements,
//!   selected by a list of [`SummaryModule`]s
//!
//! The returned models keep the provider's field names. Mapping them into
//! the stable, provider-agnostic contract happens in `finpanel-core`.
//!
//! # Core Types
//!
//! - [`FinancialDataProvider`] - Provider trait
//! - [`YahooProvider`] - Yahoo Finance implementation
//! - [`ProviderQuote`] - Quote snapshot as the provider sends it
//! - [`QuoteSummary`] - Fundamentals and statements bundle
//! - [`MarketDataError`] - Provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{
    ProviderIncomeStatement, ProviderQuote, ProviderTimestamp, QuoteSummary, SummaryModule,
};

pub use provider::yahoo::YahooProvider;
pub use provider::FinancialDataProvider;

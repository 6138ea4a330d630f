//! Provider-facing data models
//!
//! - `quote` - Live quote snapshot (ProviderQuote)
//! - `summary` - Fundamentals and statement bundle (QuoteSummary, SummaryModule)
//! - `value` - Wire helpers for provider number and timestamp shapes

mod quote;
mod summary;
mod value;

pub use quote::ProviderQuote;
pub use summary::{
    AssetProfile, FinancialData, IncomeStatementHistory, KeyStatistics, ProviderIncomeStatement,
    QuoteSummary, SummaryDetail, SummaryModule, SummaryPrice,
};
pub use value::{raw_number, ProviderTimestamp};

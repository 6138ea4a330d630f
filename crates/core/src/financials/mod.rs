//! Financial data module.
//!
//! - [`model`] - The provider-agnostic response contract
//! - [`mapping`] - Provider payload → contract mapping rules
//! - [`symbol`] - Ticker normalization
//! - [`service`] - Concurrent fetch and normalization service
//!
//! ```text
//! FinancialService → FinancialDataProvider (market-data crate)
//!       ↓
//!   mapping → FinancialResponse
//! ```

pub mod mapping;
pub mod model;
pub mod service;
pub mod symbol;


pub use model::{
    FinancialResponse, FinancialStatements, Financials, Fundamentals, IncomeStatementEntry,
    IncomeStatements, Periodicity, Quote, StatementMetric, StatementSeries,
};
pub use service::{FinancialService, FinancialServiceTrait};
pub use symbol::normalize_symbol;

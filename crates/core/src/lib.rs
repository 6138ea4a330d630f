//! Finpanel Core - financial data contract and normalization.
//!
//! This crate turns provider payloads from `finpanel-market-data` into the
//! stable response shape consumed by the view and the HTTP API.

pub mod errors;
pub mod financials;

pub use financials::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Financial data provider abstraction and implementations.
//!
//! This module contains:
//! - The `FinancialDataProvider` trait every provider implements
//! - The Yahoo Finance implementation

mod traits;

pub mod yahoo;

pub use traits::FinancialDataProvider;

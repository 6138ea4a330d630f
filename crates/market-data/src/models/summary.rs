use serde::Deserialize;

use super::value::{raw_number, ProviderTimestamp};

/// Data modules that can be requested in a quote summary bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SummaryModule {
    Price,
    SummaryDetail,
    DefaultKeyStatistics,
    FinancialData,
    AssetProfile,
    IncomeStatementHistory,
    IncomeStatementHistoryQuarterly,
}

impl SummaryModule {
    /// Every module the financial panel needs, in request order.
    pub const FINANCIAL_PANEL: &'static [SummaryModule] = &[
        SummaryModule::Price,
        SummaryModule::SummaryDetail,
        SummaryModule::DefaultKeyStatistics,
        SummaryModule::FinancialData,
        SummaryModule::AssetProfile,
        SummaryModule::IncomeStatementHistory,
        SummaryModule::IncomeStatementHistoryQuarterly,
    ];

    /// Wire name of the module.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::SummaryDetail => "summaryDetail",
            Self::DefaultKeyStatistics => "defaultKeyStatistics",
            Self::FinancialData => "financialData",
            Self::AssetProfile => "assetProfile",
            Self::IncomeStatementHistory => "incomeStatementHistory",
            Self::IncomeStatementHistoryQuarterly => "incomeStatementHistoryQuarterly",
        }
    }

    /// Comma-separated module list for a request URL.
    pub fn join(modules: &[SummaryModule]) -> String {
        modules
            .iter()
            .map(SummaryModule::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Bundle of fundamentals, statistics, and historical statements for a symbol.
///
/// Each module is present only if it was requested and the provider had it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub price: Option<SummaryPrice>,
    pub summary_detail: Option<SummaryDetail>,
    pub default_key_statistics: Option<KeyStatistics>,
    pub financial_data: Option<FinancialData>,
    pub asset_profile: Option<AssetProfile>,
    pub income_statement_history: Option<IncomeStatementHistory>,
    pub income_statement_history_quarterly: Option<IncomeStatementHistory>,
}

/// `price` module: naming and listing data
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPrice {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub quote_type: Option<String>,
}

/// `summaryDetail` module: valuation and trading statistics
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    #[serde(default, deserialize_with = "raw_number")]
    pub market_cap: Option<f64>,
    #[serde(rename = "trailingPE", default, deserialize_with = "raw_number")]
    pub trailing_pe: Option<f64>,
    /// Fraction, e.g. 0.005 for 0.5%
    #[serde(default, deserialize_with = "raw_number")]
    pub dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub beta: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub fifty_two_week_low: Option<f64>,
}

/// `defaultKeyStatistics` module
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatistics {
    #[serde(default, deserialize_with = "raw_number")]
    pub trailing_eps: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub price_to_book: Option<f64>,
}

/// `financialData` module
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    /// Fraction, e.g. 0.2531 for 25.31%
    #[serde(default, deserialize_with = "raw_number")]
    pub profit_margins: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub total_revenue: Option<f64>,
}

/// `assetProfile` module
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
}

/// Container shared by the annual and quarterly statement modules.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementHistory {
    #[serde(default)]
    pub income_statement_history: Vec<ProviderIncomeStatement>,
}

/// One income statement period.
///
/// Fields the panel does not show (interest expense, minority interest, ...)
/// are not modelled and are dropped on deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderIncomeStatement {
    pub end_date: Option<ProviderTimestamp>,
    #[serde(default, deserialize_with = "raw_number")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub gross_profit: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub operating_income: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub ebitda: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub research_development: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub selling_general_administrative: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub total_operating_expenses: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub net_income: Option<f64>,
}

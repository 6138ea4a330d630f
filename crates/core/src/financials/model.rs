//! Provider-agnostic financial data contract.
//!
//! Every numeric field is either a finite number or `None`, and `None`
//! serializes as an explicit `null` so the JSON key set never changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Point-in-time quote snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub price: Option<f64>,
    /// Percent change since previous close, in percent units
    pub change_percent: Option<f64>,
    pub volume: Option<f64>,
    pub previous_close: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub average_volume: Option<f64>,
}

/// Company-level ratios and descriptive attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fundamentals {
    pub company_name: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub eps: Option<f64>,
    /// Percentage (25.31 means 25.31%)
    pub profit_margin: Option<f64>,
    /// Trailing twelve month revenue
    pub revenue: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub beta: Option<f64>,
    /// Percentage (0.5 means 0.5%)
    pub dividend_yield: Option<f64>,
    pub price_to_book: Option<f64>,
}

/// Income statement line items shown on the panel, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementMetric {
    TotalRevenue,
    GrossProfit,
    OperatingIncome,
    Ebitda,
    ResearchDevelopment,
    SellingGeneralAdministrative,
    TotalOperatingExpenses,
    NetIncome,
}

impl StatementMetric {
    pub const ALL: [StatementMetric; 8] = [
        StatementMetric::TotalRevenue,
        StatementMetric::GrossProfit,
        StatementMetric::OperatingIncome,
        StatementMetric::Ebitda,
        StatementMetric::ResearchDevelopment,
        StatementMetric::SellingGeneralAdministrative,
        StatementMetric::TotalOperatingExpenses,
        StatementMetric::NetIncome,
    ];

    /// Machine key used in the JSON contract.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TotalRevenue => "totalRevenue",
            Self::GrossProfit => "grossProfit",
            Self::OperatingIncome => "operatingIncome",
            Self::Ebitda => "ebitda",
            Self::ResearchDevelopment => "researchDevelopment",
            Self::SellingGeneralAdministrative => "sellingGeneralAdministrative",
            Self::TotalOperatingExpenses => "totalOperatingExpenses",
            Self::NetIncome => "netIncome",
        }
    }
}

/// One reporting period of an income statement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeStatementEntry {
    pub total_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub operating_income: Option<f64>,
    pub ebitda: Option<f64>,
    pub research_development: Option<f64>,
    pub selling_general_administrative: Option<f64>,
    pub total_operating_expenses: Option<f64>,
    pub net_income: Option<f64>,
}

impl IncomeStatementEntry {
    pub fn get(&self, metric: StatementMetric) -> Option<f64> {
        match metric {
            StatementMetric::TotalRevenue => self.total_revenue,
            StatementMetric::GrossProfit => self.gross_profit,
            StatementMetric::OperatingIncome => self.operating_income,
            StatementMetric::Ebitda => self.ebitda,
            StatementMetric::ResearchDevelopment => self.research_development,
            StatementMetric::SellingGeneralAdministrative => self.selling_general_administrative,
            StatementMetric::TotalOperatingExpenses => self.total_operating_expenses,
            StatementMetric::NetIncome => self.net_income,
        }
    }
}

/// Income statements keyed by ISO period-end date (`YYYY-MM-DD`).
pub type IncomeStatements = BTreeMap<String, IncomeStatementEntry>;

/// Reporting periodicity of a statement series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Periodicity {
    Quarterly,
    Annual,
}

impl Periodicity {
    pub const ALL: [Periodicity; 2] = [Periodicity::Quarterly, Periodicity::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }
}

/// Statements for one periodicity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementSeries {
    pub income_statement: IncomeStatements,
}

/// Quarterly and annual statements, transformed independently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialStatements {
    pub quarterly: StatementSeries,
    pub annual: StatementSeries,
}

impl FinancialStatements {
    pub fn series(&self, periodicity: Periodicity) -> &StatementSeries {
        match periodicity {
            Periodicity::Quarterly => &self.quarterly,
            Periodicity::Annual => &self.annual,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    pub financial_statements: FinancialStatements,
}

/// Response body of the financial data endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialResponse {
    pub quote: Quote,
    pub fundamentals: Fundamentals,
    pub financials: Financials,
}

impl FinancialResponse {
    pub fn income_statements(&self, periodicity: Periodicity) -> &IncomeStatements {
        &self
            .financials
            .financial_statements
            .series(periodicity)
            .income_statement
    }
}

//! Statement pivot: metrics as rows, period-end dates as columns.

use finpanel_core::{IncomeStatements, Periodicity, StatementMetric};
use serde::Serialize;

use crate::format::{format_currency, format_date_header};

/// Display label for a statement metric.
pub fn metric_label(metric: StatementMetric) -> &'static str {
    match metric {
        StatementMetric::TotalRevenue => "Total Revenue",
        StatementMetric::GrossProfit => "Gross Profit",
        StatementMetric::OperatingIncome => "Operating Income",
        StatementMetric::Ebitda => "EBITDA",
        StatementMetric::ResearchDevelopment => "Research & Development",
        StatementMetric::SellingGeneralAdministrative => "SG&A Expenses",
        StatementMetric::TotalOperatingExpenses => "Total Operating Expenses",
        StatementMetric::NetIncome => "Net Income",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatementRow {
    pub label: &'static str,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatementTable {
    pub periodicity: &'static str,
    pub title: String,
    /// Date headers, most recent first
    pub columns: Vec<String>,
    pub rows: Vec<StatementRow>,
    /// Set when there is nothing to tabulate
    pub empty_message: Option<String>,
}

impl StatementTable {
    pub fn pivot(periodicity: Periodicity, statements: Option<&IncomeStatements>) -> Self {
        let title = match periodicity {
            Periodicity::Quarterly => "Quarterly Income Statement",
            Periodicity::Annual => "Annual Income Statement",
        }
        .to_string();

        let statements = match statements.filter(|s| !s.is_empty()) {
            Some(statements) => statements,
            None => {
                return Self {
                    periodicity: periodicity.as_str(),
                    title,
                    columns: Vec::new(),
                    rows: Vec::new(),
                    empty_message: Some(empty_message(periodicity)),
                }
            }
        };

        // ISO keys sort chronologically as strings
        let dates: Vec<&String> = statements.keys().rev().collect();

        let rows = StatementMetric::ALL
            .iter()
            .map(|metric| StatementRow {
                label: metric_label(*metric),
                cells: dates
                    .iter()
                    .map(|date| format_currency(statements[*date].get(*metric)))
                    .collect(),
            })
            .collect();

        Self {
            periodicity: periodicity.as_str(),
            title,
            columns: dates.iter().map(|d| format_date_header(d)).collect(),
            rows,
            empty_message: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub fn empty_message(periodicity: Periodicity) -> String {
    format!("No {} data available.", periodicity.as_str())
}

use finpanel_core::{FinancialResponse, Periodicity};
use serde::Serialize;

use crate::metrics::MetricsGrid;
use crate::table::StatementTable;

/// Everything the page shows for one fetched symbol.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinancialPanel {
    pub metrics: MetricsGrid,
    /// Quarterly first, then annual
    pub tables: Vec<StatementTable>,
}

impl FinancialPanel {
    pub fn build(symbol: &str, response: Option<&FinancialResponse>) -> Self {
        let tables = Periodicity::ALL
            .iter()
            .map(|p| StatementTable::pivot(*p, response.map(|r| r.income_statements(*p))))
            .collect();

        Self {
            metrics: MetricsGrid::from_response(symbol, response),
            tables,
        }
    }

    pub fn table(&self, periodicity: Periodicity) -> Option<&StatementTable> {
        self.tables
            .iter()
            .find(|t| t.periodicity == periodicity.as_str())
    }
}

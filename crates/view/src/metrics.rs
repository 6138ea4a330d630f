//! Header block and key-metrics grid.

use finpanel_core::FinancialResponse;
use serde::Serialize;

use crate::format::{
    format_currency, format_number, format_percent, format_price, format_volume, PLACEHOLDER,
};

/// Color of the percent-change indicator next to the price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

impl ChangeDirection {
    pub fn from_change(change: Option<f64>) -> Self {
        match change.filter(|c| c.is_finite()) {
            Some(c) if c > 0.0 => Self::Positive,
            Some(c) if c < 0.0 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricCell {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsGrid {
    /// Company name, or the typed symbol when the provider has none
    pub title: String,
    pub price: String,
    pub change: String,
    pub direction: ChangeDirection,
    pub direction_class: &'static str,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub cells: Vec<MetricCell>,
}

impl MetricsGrid {
    pub fn from_response(symbol: &str, response: Option<&FinancialResponse>) -> Self {
        let quote = response.map(|r| &r.quote);
        let fundamentals = response.map(|r| &r.fundamentals);

        let title = fundamentals
            .and_then(|f| f.company_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(symbol)
            .to_string();

        let change_percent = quote.and_then(|q| q.change_percent);
        let direction = ChangeDirection::from_change(change_percent);

        let cells = vec![
            MetricCell {
                label: "Market Cap",
                value: format_currency(fundamentals.and_then(|f| f.market_cap)),
            },
            MetricCell {
                label: "P/E Ratio",
                value: format_number(fundamentals.and_then(|f| f.pe_ratio)),
            },
            MetricCell {
                label: "EPS",
                value: format_number(fundamentals.and_then(|f| f.eps)),
            },
            MetricCell {
                label: "Revenue",
                value: format_currency(fundamentals.and_then(|f| f.revenue)),
            },
            MetricCell {
                label: "Profit Margin",
                value: format_percent(fundamentals.and_then(|f| f.profit_margin)),
            },
            MetricCell {
                label: "52W Range",
                value: week_range(
                    fundamentals.and_then(|f| f.fifty_two_week_low),
                    fundamentals.and_then(|f| f.fifty_two_week_high),
                ),
            },
            MetricCell {
                label: "Volume",
                value: format_volume(quote.and_then(|q| q.volume)),
            },
            MetricCell {
                label: "Beta",
                value: format_number(fundamentals.and_then(|f| f.beta)),
            },
            MetricCell {
                label: "Dividend Yield",
                value: format_percent(fundamentals.and_then(|f| f.dividend_yield)),
            },
        ];

        Self {
            title,
            price: format_price(quote.and_then(|q| q.price)),
            change: format_percent(change_percent),
            direction,
            direction_class: direction.css_class(),
            sector: fundamentals.and_then(|f| f.sector.clone()),
            industry: fundamentals.and_then(|f| f.industry.clone()),
            cells,
        }
    }

    pub fn cell(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value.as_str())
    }
}

fn week_range(low: Option<f64>, high: Option<f64>) -> String {
    if low.is_none() && high.is_none() {
        return PLACEHOLDER.to_string();
    }
    format!("{} - {}", format_price(low), format_price(high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpanel_core::{Fundamentals, Quote};

    fn response() -> FinancialResponse {
        FinancialResponse {
            quote: Quote {
                price: Some(150.25),
                change_percent: Some(-1.234),
                volume: Some(51_234_567.0),
                ..Default::default()
            },
            fundamentals: Fundamentals {
                company_name: Some("Apple Inc.".to_string()),
                market_cap: Some(2_500_000_000_000.0),
                pe_ratio: Some(28.456),
                profit_margin: Some(25.3123),
                fifty_two_week_low: Some(124.17),
                fifty_two_week_high: Some(198.23),
                sector: Some("Technology".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_change_direction() {
        assert_eq!(ChangeDirection::from_change(Some(0.5)), ChangeDirection::Positive);
        assert_eq!(ChangeDirection::from_change(Some(-0.5)), ChangeDirection::Negative);
        assert_eq!(ChangeDirection::from_change(Some(0.0)), ChangeDirection::Neutral);
        assert_eq!(ChangeDirection::from_change(None), ChangeDirection::Neutral);
        assert_eq!(ChangeDirection::Negative.css_class(), "negative");
    }

    #[test]
    fn test_grid_formats_values() {
        let response = response();
        let grid = MetricsGrid::from_response("AAPL", Some(&response));

        assert_eq!(grid.title, "Apple Inc.");
        assert_eq!(grid.price, "$150.25");
        assert_eq!(grid.change, "-1.23%");
        assert_eq!(grid.direction_class, "negative");
        assert_eq!(grid.cell("Market Cap"), Some("$2.5T"));
        assert_eq!(grid.cell("P/E Ratio"), Some("28.46"));
        assert_eq!(grid.cell("Profit Margin"), Some("25.31%"));
        assert_eq!(grid.cell("52W Range"), Some("$124.17 - $198.23"));
        assert_eq!(grid.cell("Volume"), Some("51,234,567"));
        assert_eq!(grid.cell("EPS"), Some(PLACEHOLDER));
        assert_eq!(grid.sector.as_deref(), Some("Technology"));
    }

    #[test]
    fn test_grid_without_response_is_all_placeholders() {
        let grid = MetricsGrid::from_response("MSFT", None);

        assert_eq!(grid.title, "MSFT");
        assert_eq!(grid.price, PLACEHOLDER);
        assert_eq!(grid.change, PLACEHOLDER);
        assert_eq!(grid.direction, ChangeDirection::Neutral);
        assert!(grid.cells.iter().all(|c| c.value == PLACEHOLDER));
    }

    #[test]
    fn test_blank_company_name_falls_back_to_symbol() {
        let mut response = response();
        response.fundamentals.company_name = Some("  ".to_string());

        let grid = MetricsGrid::from_response("AAPL", Some(&response));

        assert_eq!(grid.title, "AAPL");
    }

    #[test]
    fn test_half_known_week_range() {
        let mut response = response();
        response.fundamentals.fifty_two_week_high = None;

        let grid = MetricsGrid::from_response("AAPL", Some(&response));

        assert_eq!(grid.cell("52W Range"), Some("$124.17 - N/A"));
    }
}

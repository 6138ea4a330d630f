//! Provider → contract field mapping.
//!
//! Provider fields are read through `Option` chains; anything missing
//! becomes `None` in the output rather than being left out.

use chrono::{DateTime, NaiveDate};
use log::warn;

use finpanel_market_data::{
    ProviderIncomeStatement, ProviderQuote, ProviderTimestamp, QuoteSummary,
};

use super::model::{
    FinancialResponse, FinancialStatements, Financials, Fundamentals, IncomeStatementEntry,
    IncomeStatements, Quote, StatementSeries,
};

/// Epoch values above this are milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Build the full response from the two provider payloads.
pub fn build_response(
    symbol: &str,
    quote: &ProviderQuote,
    summary: &QuoteSummary,
) -> FinancialResponse {
    let quarterly = summary
        .income_statement_history_quarterly
        .as_ref()
        .map(|h| map_income_statements(&h.income_statement_history))
        .unwrap_or_default();
    let annual = summary
        .income_statement_history
        .as_ref()
        .map(|h| map_income_statements(&h.income_statement_history))
        .unwrap_or_default();

    FinancialResponse {
        quote: map_quote(quote),
        fundamentals: map_fundamentals(symbol, quote, summary),
        financials: Financials {
            financial_statements: FinancialStatements {
                quarterly: StatementSeries {
                    income_statement: quarterly,
                },
                annual: StatementSeries {
                    income_statement: annual,
                },
            },
        },
    }
}

pub fn map_quote(quote: &ProviderQuote) -> Quote {
    Quote {
        price: quote.regular_market_price,
        change_percent: quote.regular_market_change_percent,
        volume: quote.regular_market_volume,
        previous_close: quote.regular_market_previous_close,
        day_high: quote.regular_market_day_high,
        day_low: quote.regular_market_day_low,
        average_volume: quote.average_daily_volume_3_month,
    }
}

/// Map fundamentals, falling back to the quote snapshot where the summary
/// bundle has no value. The company name falls back to the symbol itself.
pub fn map_fundamentals(
    symbol: &str,
    quote: &ProviderQuote,
    summary: &QuoteSummary,
) -> Fundamentals {
    let price = summary.price.as_ref();
    let detail = summary.summary_detail.as_ref();
    let stats = summary.default_key_statistics.as_ref();
    let financial = summary.financial_data.as_ref();
    let profile = summary.asset_profile.as_ref();

    let company_name = [
        price.and_then(|p| p.long_name.as_deref()),
        price.and_then(|p| p.short_name.as_deref()),
        quote.display_name(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|name| !name.is_empty())
    .unwrap_or(symbol)
    .to_string();

    Fundamentals {
        company_name: Some(company_name),
        market_cap: detail.and_then(|d| d.market_cap).or(quote.market_cap),
        pe_ratio: detail.and_then(|d| d.trailing_pe).or(quote.trailing_pe),
        eps: stats
            .and_then(|s| s.trailing_eps)
            .or(quote.eps_trailing_twelve_months),
        profit_margin: financial.and_then(|f| f.profit_margins).map(to_percent),
        revenue: financial.and_then(|f| f.total_revenue),
        fifty_two_week_low: detail.and_then(|d| d.fifty_two_week_low),
        fifty_two_week_high: detail.and_then(|d| d.fifty_two_week_high),
        sector: profile.and_then(|p| non_blank(p.sector.as_deref())),
        industry: profile.and_then(|p| non_blank(p.industry.as_deref())),
        beta: detail.and_then(|d| d.beta),
        dividend_yield: detail.and_then(|d| d.dividend_yield).map(to_percent),
        price_to_book: stats.and_then(|s| s.price_to_book),
    }
}

/// Key each statement by its ISO period-end date and flatten it into the
/// fixed metric set. Statements without a usable date are skipped.
pub fn map_income_statements(statements: &[ProviderIncomeStatement]) -> IncomeStatements {
    let mut mapped = IncomeStatements::new();

    for statement in statements {
        let Some(date) = statement.end_date.as_ref().and_then(period_end_date) else {
            warn!(
                "Skipping income statement without a usable period end date: {:?}",
                statement.end_date
            );
            continue;
        };

        mapped.insert(
            date,
            IncomeStatementEntry {
                total_revenue: statement.total_revenue,
                gross_profit: statement.gross_profit,
                operating_income: statement.operating_income,
                ebitda: statement.ebitda,
                research_development: statement.research_development,
                selling_general_administrative: statement.selling_general_administrative,
                total_operating_expenses: statement.total_operating_expenses,
                net_income: statement.net_income,
            },
        );
    }

    mapped
}

/// Format a provider period-end timestamp as `YYYY-MM-DD`.
///
/// Epoch values are read as UTC. ISO strings keep the calendar date they
/// were written with; their time of day and offset are ignored.
pub fn period_end_date(timestamp: &ProviderTimestamp) -> Option<String> {
    let date = match timestamp {
        ProviderTimestamp::Epoch(value) => epoch_date(*value),
        ProviderTimestamp::Iso(text) => iso_date(text),
        ProviderTimestamp::Wrapped { raw, fmt } => raw
            .and_then(epoch_date)
            .or_else(|| fmt.as_deref().and_then(iso_date)),
    }?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn epoch_date(value: i64) -> Option<NaiveDate> {
    let seconds = if value.unsigned_abs() >= EPOCH_MILLIS_THRESHOLD.unsigned_abs() {
        value.div_euclid(1000)
    } else {
        value
    };
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

fn iso_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpanel_market_data::models::{
        AssetProfile, FinancialData, IncomeStatementHistory, KeyStatistics, SummaryDetail,
        SummaryPrice,
    };

    fn statement(end_date: ProviderTimestamp, revenue: f64) -> ProviderIncomeStatement {
        ProviderIncomeStatement {
            end_date: Some(end_date),
            total_revenue: Some(revenue),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_quote() {
        let quote = ProviderQuote {
            regular_market_price: Some(150.25),
            regular_market_change_percent: Some(1.5),
            regular_market_volume: Some(1000.0),
            regular_market_previous_close: Some(148.0),
            regular_market_day_high: Some(151.0),
            regular_market_day_low: Some(147.5),
            average_daily_volume_3_month: Some(2000.0),
            ..Default::default()
        };
        let mapped = map_quote(&quote);
        assert_eq!(mapped.price, Some(150.25));
        assert_eq!(mapped.change_percent, Some(1.5));
        assert_eq!(mapped.previous_close, Some(148.0));
        assert_eq!(mapped.day_high, Some(151.0));
        assert_eq!(mapped.day_low, Some(147.5));
        assert_eq!(mapped.average_volume, Some(2000.0));
    }

    #[test]
    fn test_ratios_scaled_to_percent() {
        let summary = QuoteSummary {
            financial_data: Some(FinancialData {
                profit_margins: Some(0.2531),
                total_revenue: Some(383_285_000_000.0),
            }),
            summary_detail: Some(SummaryDetail {
                dividend_yield: Some(0.0055),
                ..Default::default()
            }),
            ..Default::default()
        };
        let fundamentals = map_fundamentals("AAPL", &ProviderQuote::default(), &summary);
        assert_eq!(fundamentals.profit_margin, Some(0.2531 * 100.0));
        assert_eq!(fundamentals.dividend_yield, Some(0.0055 * 100.0));
        assert_eq!(fundamentals.revenue, Some(383_285_000_000.0));
    }

    #[test]
    fn test_fundamentals_from_summary() {
        let summary = QuoteSummary {
            price: Some(SummaryPrice {
                long_name: Some("Apple Inc.".to_string()),
                ..Default::default()
            }),
            summary_detail: Some(SummaryDetail {
                market_cap: Some(2.5e12),
                trailing_pe: Some(28.5),
                beta: Some(1.29),
                fifty_two_week_high: Some(199.62),
                fifty_two_week_low: Some(124.17),
                ..Default::default()
            }),
            default_key_statistics: Some(KeyStatistics {
                trailing_eps: Some(6.13),
                price_to_book: Some(47.2),
            }),
            asset_profile: Some(AssetProfile {
                sector: Some("Technology".to_string()),
                industry: Some("Consumer Electronics".to_string()),
            }),
            ..Default::default()
        };
        let f = map_fundamentals("AAPL", &ProviderQuote::default(), &summary);
        assert_eq!(f.company_name.as_deref(), Some("Apple Inc."));
        assert_eq!(f.market_cap, Some(2.5e12));
        assert_eq!(f.pe_ratio, Some(28.5));
        assert_eq!(f.eps, Some(6.13));
        assert_eq!(f.beta, Some(1.29));
        assert_eq!(f.fifty_two_week_low, Some(124.17));
        assert_eq!(f.fifty_two_week_high, Some(199.62));
        assert_eq!(f.price_to_book, Some(47.2));
        assert_eq!(f.sector.as_deref(), Some("Technology"));
        assert_eq!(f.industry.as_deref(), Some("Consumer Electronics"));
        assert_eq!(f.profit_margin, None);
        assert_eq!(f.dividend_yield, None);
    }

    #[test]
    fn test_fundamentals_fall_back_to_quote() {
        let quote = ProviderQuote {
            short_name: Some("Apple".to_string()),
            market_cap: Some(2.5e12),
            trailing_pe: Some(30.0),
            eps_trailing_twelve_months: Some(6.0),
            ..Default::default()
        };
        let f = map_fundamentals("AAPL", &quote, &QuoteSummary::default());
        assert_eq!(f.company_name.as_deref(), Some("Apple"));
        assert_eq!(f.market_cap, Some(2.5e12));
        assert_eq!(f.pe_ratio, Some(30.0));
        assert_eq!(f.eps, Some(6.0));
    }

    #[test]
    fn test_company_name_defaults_to_symbol() {
        let summary = QuoteSummary {
            price: Some(SummaryPrice {
                long_name: Some("   ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let f = map_fundamentals("AAPL", &ProviderQuote::default(), &summary);
        assert_eq!(f.company_name.as_deref(), Some("AAPL"));
    }

    #[test]
    fn test_period_end_date_epoch_is_utc() {
        // 2023-06-30T00:00:00Z
        assert_eq!(
            period_end_date(&ProviderTimestamp::Epoch(1_688_083_200)),
            Some("2023-06-30".to_string())
        );
        // 2023-06-30T23:59:59Z stays on the same day
        assert_eq!(
            period_end_date(&ProviderTimestamp::Epoch(1_688_169_599)),
            Some("2023-06-30".to_string())
        );
        // milliseconds
        assert_eq!(
            period_end_date(&ProviderTimestamp::Epoch(1_688_083_200_000)),
            Some("2023-06-30".to_string())
        );
    }

    #[test]
    fn test_period_end_date_iso_ignores_time_and_offset() {
        for text in [
            "2023-06-30",
            "2023-06-30T00:00:00.000Z",
            "2023-06-30T23:30:00-05:00",
            "2023-06-30T01:00:00+09:00",
        ] {
            assert_eq!(
                period_end_date(&ProviderTimestamp::Iso(text.to_string())),
                Some("2023-06-30".to_string()),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_period_end_date_wrapped() {
        let ts = ProviderTimestamp::Wrapped {
            raw: Some(1_680_220_800),
            fmt: Some("ignored".to_string()),
        };
        assert_eq!(period_end_date(&ts), Some("2023-03-31".to_string()));

        let ts = ProviderTimestamp::Wrapped {
            raw: None,
            fmt: Some("2023-03-31".to_string()),
        };
        assert_eq!(period_end_date(&ts), Some("2023-03-31".to_string()));

        let ts = ProviderTimestamp::Wrapped {
            raw: None,
            fmt: None,
        };
        assert_eq!(period_end_date(&ts), None);
    }

    #[test]
    fn test_period_end_date_rejects_garbage() {
        assert_eq!(period_end_date(&ProviderTimestamp::Iso("soon".to_string())), None);
        assert_eq!(
            period_end_date(&ProviderTimestamp::Iso("2023-13-45".to_string())),
            None
        );
    }

    #[test]
    fn test_period_end_date_extreme_epochs() {
        assert_eq!(period_end_date(&ProviderTimestamp::Epoch(i64::MIN)), None);
        assert_eq!(period_end_date(&ProviderTimestamp::Epoch(i64::MAX)), None);
        assert_eq!(
            period_end_date(&ProviderTimestamp::Wrapped {
                raw: Some(i64::MIN),
                fmt: Some("2023-06-30".to_string()),
            }),
            Some("2023-06-30".to_string())
        );

        let statements = [statement(ProviderTimestamp::Epoch(i64::MIN), 1.0)];
        assert!(map_income_statements(&statements).is_empty());
    }

    #[test]
    fn test_map_income_statements() {
        let statements = vec![
            statement(ProviderTimestamp::Epoch(1_680_220_800), 94_836_000_000.0),
            statement(ProviderTimestamp::Epoch(1_688_083_200), 81_797_000_000.0),
            ProviderIncomeStatement::default(),
        ];
        let mapped = map_income_statements(&statements);

        assert_eq!(
            mapped.keys().cloned().collect::<Vec<_>>(),
            vec!["2023-03-31".to_string(), "2023-06-30".to_string()]
        );
        let june = &mapped["2023-06-30"];
        assert_eq!(june.total_revenue, Some(81_797_000_000.0));
        assert_eq!(june.net_income, None);
    }

    #[test]
    fn test_build_response_missing_history_is_empty() {
        let summary = QuoteSummary {
            income_statement_history: Some(IncomeStatementHistory {
                income_statement_history: vec![statement(
                    ProviderTimestamp::Iso("2022-09-24".to_string()),
                    394_328_000_000.0,
                )],
            }),
            ..Default::default()
        };
        let response = build_response("AAPL", &ProviderQuote::default(), &summary);
        let statements = &response.financials.financial_statements;
        assert!(statements.quarterly.income_statement.is_empty());
        assert_eq!(statements.annual.income_statement.len(), 1);
        assert!(statements.annual.income_statement.contains_key("2022-09-24"));
    }
}

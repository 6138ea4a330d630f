use serde::Deserialize;

use super::value::raw_number;

/// Live quote for a single symbol, as returned by the provider's quote endpoint.
///
/// Every field is optional: providers omit whatever they do not have.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuote {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,

    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_price: Option<f64>,

    /// Percent change since previous close, already in percent units (1.5 = 1.5%)
    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_change_percent: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_volume: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_previous_close: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_day_high: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_day_low: Option<f64>,

    #[serde(
        rename = "averageDailyVolume3Month",
        default,
        deserialize_with = "raw_number"
    )]
    pub average_daily_volume_3_month: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub market_cap: Option<f64>,

    #[serde(rename = "trailingPE", default, deserialize_with = "raw_number")]
    pub trailing_pe: Option<f64>,

    #[serde(default, deserialize_with = "raw_number")]
    pub eps_trailing_twelve_months: Option<f64>,
}

impl ProviderQuote {
    /// Best display name the quote carries, long name first.
    pub fn display_name(&self) -> Option<&str> {
        [self.long_name.as_deref(), self.short_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
    }
}

use serde::{Deserialize, Deserializer};

/// Numeric value as providers send it.
///
/// Yahoo wraps most numbers as `{"raw": 123.45, "fmt": "123.45"}`, sends `{}`
/// when there is no data, and uses bare numbers on the quote endpoint.
/// Non-finite ratios come through as strings (`{"raw": "Infinity"}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Bare(RawScalar),
    Wrapped { raw: Option<RawScalar> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
}

impl RawScalar {
    fn into_f64(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

impl RawNumber {
    fn into_f64(self) -> Option<f64> {
        match self {
            Self::Bare(v) => v.into_f64(),
            Self::Wrapped { raw } => raw.and_then(RawScalar::into_f64),
        }
    }
}

/// Deserialize any provider number shape into `Option<f64>`.
///
/// Non-finite values are treated as absent. Use with
/// `#[serde(default, deserialize_with = "raw_number")]`.
pub fn raw_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(value
        .and_then(RawNumber::into_f64)
        .filter(|v| v.is_finite()))
}

/// A point in time as sent by the provider.
///
/// Statement period ends arrive either as epoch seconds (bare or wrapped in
/// `{"raw", "fmt"}`) or as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProviderTimestamp {
    Epoch(i64),
    Iso(String),
    Wrapped {
        raw: Option<i64>,
        fmt: Option<String>,
    },
}

//! Fetch/display cycle of the panel.
//!
//! ```text
//! Idle ──begin_fetch──▶ Loading ──complete_success──▶ Success
//!                          │                            │
//!                          └──complete_error──▶ Error ◀─┘ (via Loading)
//! ```

use finpanel_core::{normalize_symbol, FinancialResponse};

/// Shown when a failure carries no message of its own.
pub const GENERIC_ERROR: &str = "An error occurred while fetching data";

pub const BUSY_LABEL: &str = "Loading...";
pub const IDLE_LABEL: &str = "Fetch Data";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success(Box<FinancialResponse>),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Symbol as typed by the user
    pub symbol: String,
    pub phase: FetchPhase,
}

impl ViewState {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            phase: FetchPhase::Idle,
        }
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
    }

    /// A fetch needs a non-blank symbol and no fetch in flight.
    pub fn can_fetch(&self) -> bool {
        !self.is_loading() && normalize_symbol(&self.symbol).is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    /// Enter `Loading`, dropping any previous data or error.
    ///
    /// Returns the normalized symbol to fetch, or `None` when no fetch is
    /// allowed; the state is left untouched in that case.
    pub fn begin_fetch(&mut self) -> Option<String> {
        if !self.can_fetch() {
            return None;
        }
        let symbol = normalize_symbol(&self.symbol)?;
        self.phase = FetchPhase::Loading;
        Some(symbol)
    }

    pub fn complete_success(&mut self, response: FinancialResponse) {
        self.phase = FetchPhase::Success(Box::new(response));
    }

    pub fn complete_error(&mut self, message: Option<String>) {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR.to_string());
        self.phase = FetchPhase::Error(message);
    }

    pub fn response(&self) -> Option<&FinancialResponse> {
        match &self.phase {
            FetchPhase::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }
}

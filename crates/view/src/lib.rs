//! Finpanel View - formatting and HTML rendering of financial data.
//!
//! Turns a [`finpanel_core::FinancialResponse`] into display values (compact
//! currency, percentages, long-form dates), pivots statement series into
//! tables, tracks the fetch/display cycle in [`ViewState`], and renders the
//! whole page through [`PanelRenderer`].

pub mod errors;
pub mod format;
pub mod metrics;
pub mod panel;
pub mod render;
pub mod state;
pub mod table;

pub use errors::ViewError;
pub use format::{
    format_currency, format_date_header, format_number, format_percent, format_price,
    format_volume, PLACEHOLDER,
};
pub use metrics::{ChangeDirection, MetricCell, MetricsGrid};
pub use panel::FinancialPanel;
pub use render::PanelRenderer;
pub use state::{FetchPhase, ViewState, GENERIC_ERROR};
pub use table::{metric_label, StatementRow, StatementTable};

use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::Result;
use crate::panel::FinancialPanel;
use crate::state::ViewState;

const PANEL_TEMPLATE: &str = "panel.html";

#[derive(Serialize)]
struct PageContext<'a> {
    symbol: &'a str,
    can_fetch: bool,
    loading: bool,
    button_label: &'static str,
    busy_label: &'static str,
    error: Option<&'a str>,
    panel: Option<FinancialPanel>,
}

/// Renders the panel page from a [`ViewState`].
///
/// The template is compiled into the binary and parsed once at construction.
pub struct PanelRenderer {
    tera: Tera,
}

impl PanelRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PANEL_TEMPLATE, include_str!("../templates/panel.html"))?;
        Ok(Self { tera })
    }

    pub fn render_page(&self, state: &ViewState) -> Result<String> {
        let page = PageContext {
            symbol: &state.symbol,
            can_fetch: state.can_fetch(),
            loading: state.is_loading(),
            button_label: state.button_label(),
            busy_label: crate::state::BUSY_LABEL,
            error: state.error(),
            // Only a successful fetch has data to show
            panel: state
                .response()
                .map(|response| FinancialPanel::build(&state.symbol, Some(response))),
        };

        let context = Context::from_serialize(&page)?;
        Ok(self.tera.render(PANEL_TEMPLATE, &context)?)
    }
}

//! Bills list page.

use crate::{
    controllers::bills::BillsController,
    core::format::BillSummary,
    ui::dom::{BILL_URL_ATTRIBUTE, Element},
    views::escape,
};
use tracing::error;

/// State of the bills page.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    /// Fetch still in flight
    Loading,
    /// Fetch failed; holds the store's message verbatim
    Failed(String),
    /// Bills ready to display, newest first
    Loaded(Vec<BillSummary>),
}

impl BillsPage {
    /// Fetches bills through the controller and settles the page state.
    pub async fn mount(controller: &BillsController) -> Self {
        match controller.get_bills().await {
            Ok(bills) => Self::Loaded(bills),
            Err(e) => {
                error!(error = %e, "Bills page failed to load");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Eye icons of the rendered rows, in display order.
    #[must_use]
    pub fn eye_icons(&self) -> Vec<Element> {
        match self {
            Self::Loaded(bills) => bills
                .iter()
                .map(|s| Element::eye_icon(s.bill.file_url.as_deref()))
                .collect(),
            Self::Loading | Self::Failed(_) => Vec::new(),
        }
    }

    /// Page markup.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Loading => r#"<div id="loading">Loading...</div>"#.to_string(),
            Self::Failed(message) => format!(
                r#"<div class="error-page" data-testid="error-message"><div class="error-text">{}</div></div>"#,
                escape(message)
            ),
            Self::Loaded(bills) => render_table(bills),
        }
    }
}

fn render_table(bills: &[BillSummary]) -> String {
    let rows: String = bills.iter().map(render_row).collect();

    format!(
        r#"<div class="content-header"><div class="content-title">Mes notes de frais</div><button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button></div><div id="data-table"><table id="example" class="table table-striped" style="width:100%"><thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead><tbody data-testid="tbody">{rows}</tbody></table></div>"#
    )
}

fn render_row(summary: &BillSummary) -> String {
    let bill = &summary.bill;
    let amount = bill.amount.map(|a| format!("{a} €")).unwrap_or_default();
    let url_attr = bill
        .file_url
        .as_deref()
        .map(|url| format!(r#" {BILL_URL_ATTRIBUTE}="{}""#, escape(url)))
        .unwrap_or_default();
    format!(
        r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{amount}</td><td>{}</td><td><div class="icon-actions"><div id="eye" data-testid="icon-eye"{url_attr}></div></div></td></tr>"#,
        escape(bill.expense_type.label()),
        escape(&bill.name),
        escape(summary.display_date.as_str()),
        summary.status_label(),
    )
}

//! Bills list controller.
//!
//! Fetches the employee's bills from the store, prepares them for display newest-first and
//! handles the two row-level interactions: opening the new-bill form and previewing a receipt.

use crate::{
    core::{
        format::{BillSummary, format_bills},
        session::Session,
        store::BillStore,
    },
    errors::Result,
    ui::{
        dom::{BILL_URL_ATTRIBUTE, Element},
        modal::{ModalHost, ReceiptImage, ReceiptModal},
        navigator::{Navigator, Route},
    },
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Collaborators the bills controller is built from.
pub struct BillsDependencies {
    /// View switcher
    pub navigator: Arc<dyn Navigator>,
    /// Bill store; `None` renders an empty list without touching the network
    pub store: Option<Arc<dyn BillStore>>,
    /// Signed-in user
    pub session: Session,
    /// Host for the receipt preview
    pub modal: Arc<dyn ModalHost>,
}

/// Controller behind the bills page.
pub struct BillsController {
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn BillStore>>,
    session: Session,
    modal: Arc<dyn ModalHost>,
}

impl BillsController {
    /// Binds the controller to its collaborators. Does not fetch anything.
    #[must_use]
    pub fn new(deps: BillsDependencies) -> Self {
        let BillsDependencies {
            navigator,
            store,
            session,
            modal,
        } = deps;
        Self {
            navigator,
            store,
            session,
            modal,
        }
    }

    /// Session this controller was built for.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Fetches the bills and returns them newest first.
    ///
    /// Malformed dates are kept raw rather than failing the list. Store failures are
    /// propagated so the page can show the store's message.
    #[instrument(skip(self))]
    pub async fn get_bills(&self) -> Result<Vec<BillSummary>> {
        debug!(email = %self.session.email, "Loading bills");
        let Some(store) = &self.store else {
            debug!("No store configured, returning an empty bill list");
            return Ok(Vec::new());
        };

        let bills = store
            .list()
            .await
            .inspect_err(|e| warn!(error = %e, "Fetching bills failed"))?;
        let fetched = bills.len();
        let summaries = format_bills(bills);

        info!(fetched, listed = summaries.len(), "Fetched bills");
        Ok(summaries)
    }

    /// Opens the new-bill form.
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// Opens the receipt preview for the clicked eye icon. The image is half the modal
    /// width; an icon without a receipt URL opens an empty preview.
    pub fn handle_click_icon_eye(&self, icon: &Element) {
        let image = icon.attribute(BILL_URL_ATTRIBUTE).map(|url| ReceiptImage {
            src: url.to_string(),
            width: self.modal.width() / 2,
        });

        if image.is_none() {
            warn!("Eye icon has no receipt URL, opening an empty preview");
        }

        self.modal.show(ReceiptModal { image });
    }
}

//! View switcher for the employee pages.
//!
//! The router is the [`Navigator`] handed to both controllers: navigating only records the
//! target route; [`Router::render`] then builds the layout and mounts the page.

use crate::{
    controllers::{
        bills::{BillsController, BillsDependencies},
        new_bill::{NewBillController, NewBillDependencies},
    },
    core::{session::Session, store::BillStore},
    ui::{
        modal::{ModalHost, ModalSlot},
        navigator::{Navigator, Route},
        notify::Notifier,
    },
    views::{self, bills::BillsPage},
};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// Routes the employee between the bills list and the new-bill form.
pub struct Router {
    store: Option<Arc<dyn BillStore>>,
    session: Session,
    modal: Arc<ModalSlot>,
    notifier: Arc<dyn Notifier>,
    current: Mutex<Option<Route>>,
}

impl Router {
    /// Router with nothing displayed yet.
    #[must_use]
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        session: Session,
        modal: Arc<ModalSlot>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            session,
            modal,
            notifier,
            current: Mutex::new(None),
        })
    }

    /// Route currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `data-testid` of the highlighted layout icon.
    #[must_use]
    pub fn active_icon(&self) -> Option<&'static str> {
        self.current().map(Route::icon)
    }

    /// Controller for the bills page, navigating through this router.
    #[must_use]
    pub fn bills_controller(self: &Arc<Self>) -> BillsController {
        BillsController::new(BillsDependencies {
            navigator: Arc::clone(self) as Arc<dyn Navigator>,
            store: self.store.clone(),
            session: self.session.clone(),
            modal: Arc::clone(&self.modal) as Arc<dyn ModalHost>,
        })
    }

    /// Controller for the new-bill form, navigating through this router.
    #[must_use]
    pub fn new_bill_controller(self: &Arc<Self>) -> NewBillController {
        NewBillController::new(NewBillDependencies {
            navigator: Arc::clone(self) as Arc<dyn Navigator>,
            store: self.store.clone(),
            session: self.session.clone(),
            notifier: Arc::clone(&self.notifier),
        })
    }

    /// Renders the current route inside the layout, plus the receipt modal when open.
    /// The bills page is mounted, so this waits for the bill fetch.
    pub async fn render(self: &Arc<Self>) -> String {
        let Some(route) = self.current() else {
            return String::new();
        };

        let content = match route {
            Route::Bills => BillsPage::mount(&self.bills_controller()).await.render(),
            Route::NewBill => views::new_bill::render(),
        };
        let modal = self
            .modal
            .current()
            .map(|m| m.render())
            .unwrap_or_default();

        format!("{}{modal}", views::layout::render(route, &content))
    }
}

impl Navigator for Router {
    fn navigate(&self, route: Route) {
        info!(path = route.path(), "Navigating");
        self.modal.close();
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}

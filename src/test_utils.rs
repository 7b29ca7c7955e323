//! Shared test utilities for `bill-buddy`.
//!
//! Fixtures, fakes for the UI collaborators and in-memory stores used across the
//! module tests.

use crate::{
    core::{
        bill::{Bill, BillStatus, ExpenseType, NewBill, ReceiptFile},
        format::parse_bill_date,
        session::Session,
        store::{BillStore, StoreError, StoreResult},
    },
    ui::{
        navigator::{Navigator, Route},
        notify::Notifier,
    },
};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::{Mutex, PoisonError};
use tracing_subscriber::EnvFilter;

/// Email of the session used by tests.
pub const TEST_EMAIL: &str = "employee@test.tld";

/// Installs a test-friendly tracing subscriber (once).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Employee session for [`TEST_EMAIL`].
#[must_use]
pub fn employee_session() -> Session {
    Session::employee(TEST_EMAIL)
}

/// Draft with sensible defaults.
#[must_use]
pub fn draft(name: &str, date: &str) -> NewBill {
    NewBill {
        email: TEST_EMAIL.to_string(),
        expense_type: ExpenseType::Transport,
        name: name.to_string(),
        amount: Some(100.0),
        date: date.to_string(),
        vat: Some(20.0),
        pct: Some(20),
        commentary: None,
        file_name: None,
        status: BillStatus::Pending,
    }
}

/// Stored bill with the given id and raw date.
#[must_use]
pub fn bill_dated(id: &str, date: &str) -> Bill {
    Bill {
        id: id.to_string(),
        email: TEST_EMAIL.to_string(),
        expense_type: ExpenseType::Transport,
        name: format!("bill {id}"),
        amount: Some(100.0),
        date: date.to_string(),
        vat: Some(20.0),
        pct: Some(20),
        commentary: None,
        file_url: None,
        file_name: None,
        status: BillStatus::Pending,
    }
}

/// Four bills in deliberately unsorted order.
#[must_use]
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            expense_type: ExpenseType::Lodging,
            name: "encore".to_string(),
            amount: Some(400.0),
            status: BillStatus::Pending,
            file_url: Some("https://receipts.test/47qAXb6fIm2zOKkLzMro.jpg".to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            ..bill_dated("47qAXb6fIm2zOKkLzMro", "2004-04-04")
        },
        Bill {
            expense_type: ExpenseType::Lodging,
            name: "test1".to_string(),
            amount: Some(100.0),
            status: BillStatus::Refused,
            file_url: Some("https://receipts.test/BeKy5Mo4jkmdfPGYpTxZ.jpg".to_string()),
            file_name: Some("1592770761.jpeg".to_string()),
            ..bill_dated("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01")
        },
        Bill {
            expense_type: ExpenseType::OnlineServices,
            name: "test3".to_string(),
            amount: Some(300.0),
            status: BillStatus::Accepted,
            file_url: Some("https://receipts.test/UIUZtnPQvnbFnB0ozvJh.jpg".to_string()),
            file_name: Some("facture-client-php-exportee.jpg".to_string()),
            ..bill_dated("UIUZtnPQvnbFnB0ozvJh", "2003-03-03")
        },
        Bill {
            expense_type: ExpenseType::Restaurants,
            name: "test2".to_string(),
            amount: Some(200.0),
            status: BillStatus::Accepted,
            file_url: Some("https://receipts.test/qcCK3SzECmaZAGRrHjaC.jpg".to_string()),
            file_name: Some("preview-facture-free-201903-pdf-1.jpg".to_string()),
            ..bill_dated("qcCK3SzECmaZAGRrHjaC", "2002-02-02")
        },
    ]
}

/// Navigator that records every route it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Routes navigated to, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

/// Notifier that records alert messages.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Alerts raised, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Store keeping bills in memory, assigning sequential ids.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bills: Mutex<Vec<Bill>>,
}

impl InMemoryStore {
    /// Store pre-filled with `bills`.
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
        }
    }
}

#[async_trait]
impl BillStore for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Ok(self
            .bills
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn create(&self, draft: NewBill, receipt: Option<ReceiptFile>) -> StoreResult<Bill> {
        if parse_bill_date(&draft.date).is_none() {
            return Err(StoreError::InvalidDate { date: draft.date });
        }
        let mut bills = self.bills.lock().unwrap_or_else(PoisonError::into_inner);
        let id = (bills.len() + 1).to_string();
        let file_name = receipt.map(|r| r.name).or(draft.file_name);
        let bill = Bill {
            file_url: file_name.as_ref().map(|name| format!("/receipts/{id}/{name}")),
            id,
            email: draft.email,
            expense_type: draft.expense_type,
            name: draft.name,
            amount: draft.amount,
            date: draft.date,
            vat: draft.vat,
            pct: draft.pct,
            commentary: draft.commentary,
            file_name,
            status: BillStatus::Pending,
        };
        bills.push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, id: &str, draft: NewBill) -> StoreResult<Bill> {
        let mut bills = self.bills.lock().unwrap_or_else(PoisonError::into_inner);
        let bill = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        bill.expense_type = draft.expense_type;
        bill.name = draft.name;
        bill.amount = draft.amount;
        bill.date = draft.date;
        bill.vat = draft.vat;
        bill.pct = draft.pct;
        bill.commentary = draft.commentary;
        Ok(bill.clone())
    }
}

/// Store whose every call fails with an HTTP status.
#[derive(Debug, Clone, Copy)]
pub struct FailingStore {
    /// Status reported by every call
    pub status: u16,
}

#[async_trait]
impl BillStore for FailingStore {
    async fn list(&self) -> StoreResult<Vec<Bill>> {
        Err(StoreError::Http {
            status: self.status,
        })
    }

    async fn create(&self, _draft: NewBill, _receipt: Option<ReceiptFile>) -> StoreResult<Bill> {
        Err(StoreError::Http {
            status: self.status,
        })
    }

    async fn update(&self, _id: &str, _draft: NewBill) -> StoreResult<Bill> {
        Err(StoreError::Http {
            status: self.status,
        })
    }
}
